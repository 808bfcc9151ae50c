// Library crate for the hand-gesture rock-paper-scissors opponent
// This file exposes the public API for the server binary and integration tests

pub mod bot;
pub mod config;
pub mod event;
pub mod game;
pub mod gesture;
pub mod session;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use bot::{Difficulty, OpponentStrategy, StrategyFactory};
pub use config::Config;
pub use event::{EventBus, PoseFeed, RoundEvent};
pub use game::{judge, Move, Outcome, TransitionModel};
pub use gesture::{classify, Gesture, HandPose, Joint, PoseError};
pub use session::{GameSession, RoundError, RoundReport, RoundResult, SessionManager};
pub use shared::{AppError, AppState};
