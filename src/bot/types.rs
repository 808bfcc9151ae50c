use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::game::{Move, TransitionModel};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Hard,
}

impl TryFrom<&str> for Difficulty {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(s.to_string()),
        }
    }
}

/// Trait for opponent decision-making strategies
pub trait OpponentStrategy: Send + Sync {
    /// Commit the opponent's move for the coming round.
    ///
    /// Called before the player's move for that round is known, with the
    /// player's previous move and the statistics gathered so far.
    fn choose_move(
        &self,
        last_move: Option<Move>,
        model: &TransitionModel,
        rng: &mut dyn RngCore,
    ) -> Move;

    /// Get the name of this strategy
    fn strategy_name(&self) -> &'static str;
}
