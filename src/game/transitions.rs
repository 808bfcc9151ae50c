use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use super::moves::Move;

/// Counts of the moves that followed one particular move
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCounts([u32; 3]);

impl MoveCounts {
    pub fn get(&self, mv: Move) -> u32 {
        self.0[mv.index()]
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// The move with the strictly greatest count, or `None` for an empty row.
    /// Ties resolve to the earliest move in priority order.
    pub fn most_frequent(&self) -> Option<Move> {
        if self.is_empty() {
            return None;
        }

        let mut best = Move::Rock;
        for mv in Move::iter().skip(1) {
            if self.get(mv) > self.get(best) {
                best = mv;
            }
        }
        Some(best)
    }
}

/// First-order Markov frequency table over the player's moves.
///
/// Cell `(prev, curr)` counts how often `prev` was immediately followed
/// by `curr`. Cells only ever grow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionModel {
    counts: [MoveCounts; 3],
}

impl TransitionModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_transition(&mut self, prev: Move, curr: Move) {
        self.counts[prev.index()].0[curr.index()] += 1;
    }

    /// The row for `prev`
    pub fn counts(&self, prev: Move) -> MoveCounts {
        self.counts[prev.index()]
    }

    /// Sum over all nine cells
    pub fn total(&self) -> u32 {
        self.counts.iter().map(MoveCounts::total).sum()
    }

    /// Rows in priority order, for snapshots
    pub fn rows(&self) -> Vec<(Move, MoveCounts)> {
        Move::iter().map(|mv| (mv, self.counts(mv))).collect()
    }
}
