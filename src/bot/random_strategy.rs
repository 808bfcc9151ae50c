use rand::{Rng, RngCore};

use crate::game::{Move, TransitionModel};

use super::types::OpponentStrategy;

/// Plays uniformly at random and ignores the player's history
pub struct RandomStrategy;

impl RandomStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl OpponentStrategy for RandomStrategy {
    fn choose_move(
        &self,
        _last_move: Option<Move>,
        _model: &TransitionModel,
        rng: &mut dyn RngCore,
    ) -> Move {
        Move::ALL[rng.random_range(0..Move::ALL.len())]
    }

    fn strategy_name(&self) -> &'static str {
        "RandomStrategy"
    }
}
