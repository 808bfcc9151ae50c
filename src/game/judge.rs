use serde::{Deserialize, Serialize};

use super::moves::Move;

/// Result of a round from the player's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

/// Judge one round. Total over all nine move pairs.
pub fn judge(player: Move, opponent: Move) -> Outcome {
    if player == opponent {
        Outcome::Draw
    } else if player.beats(opponent) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
