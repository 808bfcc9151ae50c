use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use super::events::RoundEvent;

/// Errors that can occur when handling round events
#[derive(Debug, Error)]
pub enum EventError {
    #[error("Handler error: {0}")]
    HandlerError(String),
}

/// Trait for components that react to a session's round events.
///
/// Handlers observe rounds after they are committed; failures are logged
/// and never reach session state.
#[async_trait]
pub trait RoundEventHandler: Send + Sync {
    async fn handle_round_event(&self, event: RoundEvent) -> Result<(), EventError>;

    /// Get a human-readable name for this handler (for logging/debugging)
    fn handler_name(&self) -> &'static str;
}

/// Writes every round event to the log
pub struct LoggingRoundSubscriber;

#[async_trait]
impl RoundEventHandler for LoggingRoundSubscriber {
    async fn handle_round_event(&self, event: RoundEvent) -> Result<(), EventError> {
        match &event {
            RoundEvent::RoundPlayed { session_id, result } => info!(
                session_id = %session_id,
                round = result.round,
                player_move = %result.player_move,
                opponent_move = %result.opponent_move,
                outcome = ?result.outcome,
                "Round played"
            ),
            RoundEvent::NoGesture { session_id } => {
                info!(session_id = %session_id, "No gesture detected")
            }
            RoundEvent::RoundRejected { session_id, reason } => {
                warn!(session_id = %session_id, reason = %reason, "Round rejected")
            }
        }
        Ok(())
    }

    fn handler_name(&self) -> &'static str {
        "LoggingRoundSubscriber"
    }
}
