use serde::{Deserialize, Serialize};

use crate::{
    bot::Difficulty,
    game::{Move, MoveCounts, Outcome},
    gesture::HandPose,
};

/// One committed round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: u32, // 1-based count of committed rounds
    pub player_move: Move,
    pub opponent_move: Move,
    pub outcome: Outcome,
}

/// What a caller learns about one attempted round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RoundReport {
    /// The pose did not match any move; nothing was recorded
    NoGesture,
    Played(RoundResult),
}

impl RoundReport {
    pub fn result(&self) -> Option<&RoundResult> {
        match self {
            RoundReport::Played(result) => Some(result),
            RoundReport::NoGesture => None,
        }
    }
}

/// A single delivery from the hand tracker
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Hand(HandPose),
    NoHand,
    TrackingFailed(String),
}

/// Request body for POST /sessions
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Response for POST /sessions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionResponse {
    pub session_id: String,
    pub difficulty: Difficulty,
    pub strategy: String,
}

/// Request body for POST /sessions/:id/frames
///
/// Tracker payloads may carry several hands; only the first is played.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FrameRequest {
    #[serde(default)]
    pub hands: Vec<HandPose>,
    #[serde(default)]
    pub error: Option<String>,
}

impl From<FrameRequest> for Frame {
    fn from(request: FrameRequest) -> Self {
        if let Some(reason) = request.error {
            return Frame::TrackingFailed(reason);
        }
        match request.hands.into_iter().next() {
            Some(pose) => Frame::Hand(pose),
            None => Frame::NoHand,
        }
    }
}

/// One row of the transition matrix, keyed by the preceding move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRow {
    pub from: Move,
    pub rock: u32,
    pub scissors: u32,
    pub paper: u32,
}

impl TransitionRow {
    pub fn new(from: Move, counts: MoveCounts) -> Self {
        Self {
            from,
            rock: counts.get(Move::Rock),
            scissors: counts.get(Move::Scissors),
            paper: counts.get(Move::Paper),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

/// Read-only view of a session for GET /sessions/:id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSnapshot {
    pub session_id: String,
    pub difficulty: Difficulty,
    pub strategy: String,
    pub rounds_played: u32,
    pub aborted_rounds: u32,
    pub history: Vec<Move>,
    pub transitions: Vec<TransitionRow>,
    pub scoreboard: Scoreboard,
    pub last_result: Option<RoundResult>,
}
