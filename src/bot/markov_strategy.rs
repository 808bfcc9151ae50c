use rand::RngCore;
use tracing::debug;

use crate::game::{Move, TransitionModel};

use super::{
    predictor::{counter_move, predict_next},
    types::OpponentStrategy,
};

/// Counters the player's most likely next move under a first-order
/// Markov model of their history
pub struct MarkovStrategy;

impl MarkovStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MarkovStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl OpponentStrategy for MarkovStrategy {
    fn choose_move(
        &self,
        last_move: Option<Move>,
        model: &TransitionModel,
        rng: &mut dyn RngCore,
    ) -> Move {
        let predicted = predict_next(last_move, model, rng);
        let chosen = counter_move(predicted);

        debug!(
            last_move = ?last_move,
            predicted = ?predicted,
            chosen = ?chosen,
            "Opponent committed move"
        );

        chosen
    }

    fn strategy_name(&self) -> &'static str {
        "MarkovStrategy"
    }
}
