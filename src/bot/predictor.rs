use rand::Rng;
use tracing::trace;

use crate::game::{Move, TransitionModel};

/// Predict the player's next move.
///
/// Uses the row of `last_move` in the model and picks the most frequent
/// follow-up, ties going to Rock, then Scissors, then Paper. With no
/// previous move or an empty row the prediction is drawn uniformly from
/// `rng`.
pub fn predict_next<R: Rng + ?Sized>(
    last_move: Option<Move>,
    model: &TransitionModel,
    rng: &mut R,
) -> Move {
    let predicted = last_move.and_then(|last| model.counts(last).most_frequent());

    match predicted {
        Some(mv) => {
            trace!(last_move = ?last_move, predicted = ?mv, "Predicted from transitions");
            mv
        }
        None => {
            let mv = Move::ALL[rng.random_range(0..Move::ALL.len())];
            trace!(last_move = ?last_move, predicted = ?mv, "Cold start prediction");
            mv
        }
    }
}

/// The move that beats `predicted`
pub fn counter_move(predicted: Move) -> Move {
    predicted.counter()
}
