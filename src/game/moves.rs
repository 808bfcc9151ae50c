use std::fmt;
use strum_macros::EnumIter;

/// A rock-paper-scissors move.
///
/// Declaration order is the tie-break priority used by the predictor:
/// Rock, then Scissors, then Paper. `Ord` follows it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock = 0,
    Scissors = 1,
    Paper = 2,
}

impl Move {
    /// All moves in priority order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Scissors, Move::Paper];

    /// Row/column index into move-indexed tables.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The move that defeats this one.
    pub fn counter(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Scissors => Move::Rock,
            Move::Paper => Move::Scissors,
        }
    }

    /// Check if this move beats the other
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors) | (Move::Scissors, Move::Paper) | (Move::Paper, Move::Rock)
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Move::Rock => "rock",
                Move::Scissors => "scissors",
                Move::Paper => "paper",
            }
        )
    }
}
