// Asynchronous delivery between the hand tracker and sessions
//
// Frames enter through a latest-only feed, a single runner per session
// commits them, and round outcomes fan out on a per-session bus.

// Public API - what other modules can use
pub use bus::{EventBus, DEFAULT_CHANNEL_CAPACITY};
pub use events::RoundEvent;
pub use feed::{FeedError, PoseFeed};
pub use handler::{EventError, LoggingRoundSubscriber, RoundEventHandler};
pub use runner::{play_and_emit, SessionRunner};
pub use subscription::RoundSubscription;

// Internal modules
mod bus;
mod events;
mod feed;
mod handler;
mod runner;
mod subscription;
