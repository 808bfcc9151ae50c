use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::{
    state::SessionState,
    types::{Frame, RoundReport, RoundResult, SessionSnapshot, TransitionRow},
};
use crate::{
    bot::{Difficulty, OpponentStrategy, StrategyFactory},
    game::{judge, Move},
    gesture::{classify, Gesture, HandPose, PoseError},
};

/// Reasons a round was aborted without touching session state
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoundError {
    #[error(transparent)]
    MalformedPose(#[from] PoseError),

    #[error("Hand tracking failed: {0}")]
    Tracking(String),
}

/// One player's game against the adaptive opponent.
///
/// Owns the session state exclusively. Every mutation happens inside
/// [`GameSession::commit`], which takes `&mut self`, so two rounds can
/// never commit at the same time.
pub struct GameSession {
    state: SessionState,
    difficulty: Difficulty,
    strategy: Arc<dyn OpponentStrategy>,
    rng: StdRng,
}

impl GameSession {
    pub fn new(difficulty: Difficulty, strategy: Arc<dyn OpponentStrategy>, rng: StdRng) -> Self {
        Self {
            state: SessionState::new(),
            difficulty,
            strategy,
            rng,
        }
    }

    /// Session with the strategy for `difficulty`. A seed makes the
    /// opponent's random choices reproducible; otherwise the OS seeds it.
    pub fn with_difficulty(difficulty: Difficulty, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(difficulty, StrategyFactory::create_strategy(difficulty), rng)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.strategy_name()
    }

    pub fn snapshot(&self, session_id: &str) -> SessionSnapshot {
        SessionSnapshot {
            session_id: session_id.to_string(),
            difficulty: self.difficulty,
            strategy: self.strategy_name().to_string(),
            rounds_played: self.state.rounds_played(),
            aborted_rounds: self.state.aborted_rounds(),
            history: self.state.history().to_vec(),
            transitions: self
                .state
                .model()
                .rows()
                .into_iter()
                .map(|(from, counts)| TransitionRow::new(from, counts))
                .collect(),
            scoreboard: self.state.scoreboard(),
            last_result: self.state.last_result(),
        }
    }

    /// Classify a pose and, if it is a move, play it.
    pub fn play_round(&mut self, pose: &HandPose) -> Result<RoundReport, RoundError> {
        let gesture = match classify(pose) {
            Ok(gesture) => gesture,
            Err(e) => {
                warn!(error = %e, "Rejecting malformed pose");
                self.state.record_abort();
                return Err(e.into());
            }
        };

        match gesture {
            Gesture::Recognized(player_move) => Ok(RoundReport::Played(self.commit(player_move))),
            Gesture::Unrecognized => {
                debug!("No gesture detected, round aborted");
                self.state.record_abort();
                Ok(RoundReport::NoGesture)
            }
        }
    }

    /// Play whatever the tracker delivered
    pub fn play_frame(&mut self, frame: Frame) -> Result<RoundReport, RoundError> {
        match frame {
            Frame::Hand(pose) => self.play_round(&pose),
            Frame::NoHand => {
                debug!("No hand in frame, round aborted");
                self.state.record_abort();
                Ok(RoundReport::NoGesture)
            }
            Frame::TrackingFailed(reason) => {
                warn!(reason = %reason, "Tracker reported a failure, round aborted");
                self.state.record_abort();
                Err(RoundError::Tracking(reason))
            }
        }
    }

    /// Commit one round for an already-classified move.
    ///
    /// The opponent's move is chosen from the state as it stood before
    /// `player_move` is recorded.
    pub fn commit(&mut self, player_move: Move) -> RoundResult {
        let opponent_move =
            self.strategy
                .choose_move(self.state.last_move(), self.state.model(), &mut self.rng);

        self.state.advance(player_move);

        let result = RoundResult {
            round: self.state.rounds_played() + 1,
            player_move,
            opponent_move,
            outcome: judge(player_move, opponent_move),
        };
        self.state.finish_round(result);

        info!(
            round = result.round,
            player_move = ?result.player_move,
            opponent_move = ?result.opponent_move,
            outcome = ?result.outcome,
            "Round committed"
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        game::{Outcome, TransitionModel},
        gesture::{joint, Joint, JOINT_COUNT},
    };
    use rand::RngCore;
    use std::sync::Mutex;

    /// Records what the strategy was shown and always plays a fixed move
    struct RecordingStrategy {
        reply: Move,
        seen: Mutex<Vec<(Option<Move>, u32)>>,
    }

    impl OpponentStrategy for RecordingStrategy {
        fn choose_move(
            &self,
            last_move: Option<Move>,
            model: &TransitionModel,
            _rng: &mut dyn RngCore,
        ) -> Move {
            self.seen.lock().unwrap().push((last_move, model.total()));
            self.reply
        }

        fn strategy_name(&self) -> &'static str {
            "RecordingStrategy"
        }
    }

    fn fist() -> HandPose {
        let mut joints = vec![Joint::new(0.5, 0.5); JOINT_COUNT];
        joints[joint::THUMB_TIP] = Joint::new(0.4, 0.5);
        for (tip, pip) in [
            (joint::INDEX_TIP, joint::INDEX_PIP),
            (joint::MIDDLE_TIP, joint::MIDDLE_PIP),
            (joint::RING_TIP, joint::RING_PIP),
            (joint::PINKY_TIP, joint::PINKY_PIP),
        ] {
            joints[pip] = Joint::new(0.5, 0.4);
            joints[tip] = Joint::new(0.5, 0.6);
        }
        HandPose::new(joints)
    }

    fn seeded(seed: u64) -> GameSession {
        GameSession::with_difficulty(Difficulty::Hard, Some(seed))
    }

    #[test]
    fn test_first_round_records_no_transition() {
        let mut session = seeded(1);

        let result = session.commit(Move::Rock);

        assert_eq!(result.round, 1);
        assert_eq!(result.player_move, Move::Rock);
        assert_eq!(result.outcome, judge(Move::Rock, result.opponent_move));
        assert_eq!(session.state().history(), &[Move::Rock]);
        assert_eq!(session.state().model().total(), 0);
    }

    #[test]
    fn test_model_total_tracks_rounds() {
        let mut session = seeded(2);
        let moves = [
            Move::Rock,
            Move::Paper,
            Move::Paper,
            Move::Scissors,
            Move::Rock,
        ];

        for (n, mv) in moves.iter().enumerate() {
            session.commit(*mv);
            assert_eq!(session.state().model().total(), n as u32);
        }
        assert_eq!(session.state().rounds_played(), moves.len() as u32);
        assert_eq!(session.state().scoreboard().total(), moves.len() as u32);
    }

    #[test]
    fn test_opponent_commits_before_player_move_is_recorded() {
        let strategy = Arc::new(RecordingStrategy {
            reply: Move::Paper,
            seen: Mutex::new(Vec::new()),
        });
        let mut session = GameSession::new(
            Difficulty::Hard,
            strategy.clone(),
            StdRng::seed_from_u64(0),
        );

        session.commit(Move::Rock);
        session.commit(Move::Scissors);
        session.commit(Move::Paper);

        let seen = strategy.seen.lock().unwrap().clone();
        assert_eq!(
            seen,
            vec![
                (None, 0),
                (Some(Move::Rock), 0),
                (Some(Move::Scissors), 1),
            ]
        );
    }

    #[test]
    fn test_learned_pattern_is_countered() {
        let mut session = seeded(3);
        session.commit(Move::Rock);
        session.commit(Move::Scissors);
        // Scissors row is empty, opponent picks at random
        session.commit(Move::Rock);

        // Rock was followed by Scissors, so the opponent expects Scissors again
        let result = session.commit(Move::Scissors);
        assert_eq!(result.opponent_move, Move::Rock);
        assert_eq!(result.outcome, Outcome::Lose);
    }

    #[test]
    fn test_malformed_pose_leaves_state_untouched() {
        let mut session = seeded(4);
        session.commit(Move::Rock);
        session.commit(Move::Paper);
        let history_before = session.state().history().to_vec();
        let model_before = session.state().model().clone();

        let pose = HandPose::new(vec![Joint::new(0.5, 0.5); 10]);
        let err = session.play_round(&pose).unwrap_err();

        assert_eq!(err, RoundError::MalformedPose(PoseError::Malformed { found: 10 }));
        assert_eq!(session.state().history(), history_before.as_slice());
        assert_eq!(session.state().model(), &model_before);
        assert_eq!(session.state().rounds_played(), 2);
        assert_eq!(session.state().aborted_rounds(), 1);
    }

    #[test]
    fn test_unrecognized_gesture_is_not_an_error() {
        let mut session = seeded(5);
        let mut pose = fist();
        // index finger up only
        pose.joints[joint::INDEX_TIP] = Joint::new(0.5, 0.2);

        let report = session.play_round(&pose).unwrap();

        assert_eq!(report, RoundReport::NoGesture);
        assert!(session.state().history().is_empty());
        assert_eq!(session.state().aborted_rounds(), 1);
    }

    #[test]
    fn test_recognized_pose_plays_round() {
        let mut session = seeded(6);

        let report = session.play_round(&fist()).unwrap();

        let result = report.result().copied().unwrap();
        assert_eq!(result.player_move, Move::Rock);
        assert_eq!(session.state().last_result(), Some(result));
    }

    #[test]
    fn test_frames_without_hand_or_with_failure_abort() {
        let mut session = seeded(7);

        assert_eq!(session.play_frame(Frame::NoHand).unwrap(), RoundReport::NoGesture);
        assert_eq!(
            session
                .play_frame(Frame::TrackingFailed("camera lost".to_string()))
                .unwrap_err(),
            RoundError::Tracking("camera lost".to_string())
        );
        assert!(session.state().history().is_empty());
        assert_eq!(session.state().model().total(), 0);
        assert_eq!(session.state().aborted_rounds(), 2);

        let report = session.play_frame(Frame::Hand(fist())).unwrap();
        assert!(matches!(report, RoundReport::Played(_)));
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut session = seeded(8);
        session.commit(Move::Paper);
        session.commit(Move::Paper);
        session.play_frame(Frame::NoHand).unwrap();

        let snapshot = session.snapshot("abc");

        assert_eq!(snapshot.session_id, "abc");
        assert_eq!(snapshot.strategy, "MarkovStrategy");
        assert_eq!(snapshot.rounds_played, 2);
        assert_eq!(snapshot.aborted_rounds, 1);
        assert_eq!(snapshot.history, vec![Move::Paper, Move::Paper]);
        assert_eq!(snapshot.transitions.len(), 3);
        assert_eq!(snapshot.transitions[2].from, Move::Paper);
        assert_eq!(snapshot.transitions[2].paper, 1);
        assert_eq!(snapshot.scoreboard.total(), 2);
        assert_eq!(snapshot.last_result.map(|r| r.round), Some(2));
    }

    #[test]
    fn test_same_seed_same_opponent() {
        let moves = [Move::Paper, Move::Rock, Move::Scissors, Move::Scissors];
        let play = |seed| {
            let mut session = GameSession::with_difficulty(Difficulty::Easy, Some(seed));
            moves
                .iter()
                .map(|mv| session.commit(*mv).opponent_move)
                .collect::<Vec<_>>()
        };

        assert_eq!(play(99), play(99));
    }
}
