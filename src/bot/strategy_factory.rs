use std::sync::Arc;

use super::{
    markov_strategy::MarkovStrategy,
    random_strategy::RandomStrategy,
    types::{Difficulty, OpponentStrategy},
};

/// Factory for creating opponent strategies based on difficulty level
pub struct StrategyFactory;

impl StrategyFactory {
    /// Create a strategy instance for the given difficulty level
    pub fn create_strategy(difficulty: Difficulty) -> Arc<dyn OpponentStrategy> {
        match difficulty {
            Difficulty::Easy => Arc::new(RandomStrategy::new()),
            Difficulty::Hard => Arc::new(MarkovStrategy::new()),
        }
    }
}
