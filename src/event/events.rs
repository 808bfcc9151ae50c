use serde::{Deserialize, Serialize};

use crate::session::RoundResult;

/// Events published on a session's channel after every attempted round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoundEvent {
    RoundPlayed {
        session_id: String,
        result: RoundResult,
    },

    /// No recognizable gesture; nothing was recorded
    NoGesture { session_id: String },

    /// Malformed pose or tracker failure; nothing was recorded
    RoundRejected { session_id: String, reason: String },
}

impl RoundEvent {
    pub fn session_id(&self) -> &str {
        match self {
            RoundEvent::RoundPlayed { session_id, .. } => session_id,
            RoundEvent::NoGesture { session_id } => session_id,
            RoundEvent::RoundRejected { session_id, .. } => session_id,
        }
    }

    /// Get a human-readable description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            RoundEvent::RoundPlayed { .. } => "round_played",
            RoundEvent::NoGesture { .. } => "no_gesture",
            RoundEvent::RoundRejected { .. } => "round_rejected",
        }
    }
}
