pub mod markov_strategy;
pub mod predictor;
pub mod random_strategy;
pub mod strategy_factory;
pub mod types;

pub use markov_strategy::MarkovStrategy;
pub use predictor::{counter_move, predict_next};
pub use random_strategy::RandomStrategy;
pub use strategy_factory::StrategyFactory;
pub use types::{Difficulty, OpponentStrategy};
