// Public API
pub use game_session::{GameSession, RoundError};
pub use handlers::router;
pub use manager::{SessionHandle, SessionManager};
pub use state::SessionState;
pub use types::{
    CreateSessionRequest, Frame, FrameRequest, RoundReport, RoundResult, Scoreboard,
    SessionResponse, SessionSnapshot, TransitionRow,
};

// Internal modules
mod game_session;
mod handlers;
mod manager;
mod state;
mod types;
