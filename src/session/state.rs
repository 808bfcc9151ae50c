use crate::game::{Move, TransitionModel};

use super::types::{RoundResult, Scoreboard};

/// Everything a session learns about its player.
///
/// Created empty when the session starts and dropped with it.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    model: TransitionModel,
    history: Vec<Move>,
    rounds_played: u32,
    aborted_rounds: u32,
    scoreboard: Scoreboard,
    last_result: Option<RoundResult>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(&self) -> &TransitionModel {
        &self.model
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn aborted_rounds(&self) -> u32 {
        self.aborted_rounds
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn last_result(&self) -> Option<RoundResult> {
        self.last_result
    }

    /// Learn from the player's move and advance history.
    /// The first move of a session has no predecessor and records no transition.
    pub(super) fn advance(&mut self, player_move: Move) {
        if let Some(prev) = self.last_move() {
            self.model.record_transition(prev, player_move);
        }
        self.history.push(player_move);
    }

    pub(super) fn finish_round(&mut self, result: RoundResult) {
        self.rounds_played = result.round;
        self.scoreboard.record(result.outcome);
        self.last_result = Some(result);
    }

    pub(super) fn record_abort(&mut self) {
        self.aborted_rounds += 1;
    }
}
