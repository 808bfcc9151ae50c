use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::{bus::EventBus, events::RoundEvent};
use crate::session::{Frame, GameSession, RoundError, RoundReport};

/// Play one frame against a shared session and publish the outcome.
///
/// The session lock is held through the commit and the emit, so rounds for
/// one session are serialized and their events go out in round order no
/// matter how many producers there are.
pub async fn play_and_emit(
    session_id: &str,
    session: &Mutex<GameSession>,
    frame: Frame,
    event_bus: &EventBus,
) -> Result<RoundReport, RoundError> {
    let mut session = session.lock().await;
    let outcome = session.play_frame(frame);

    let event = match &outcome {
        Ok(RoundReport::Played(result)) => RoundEvent::RoundPlayed {
            session_id: session_id.to_string(),
            result: *result,
        },
        Ok(RoundReport::NoGesture) => RoundEvent::NoGesture {
            session_id: session_id.to_string(),
        },
        Err(e) => RoundEvent::RoundRejected {
            session_id: session_id.to_string(),
            reason: e.to_string(),
        },
    };
    event_bus.emit(event).await;
    drop(session);

    outcome
}

/// Single consumer of a session's pose feed.
///
/// Waits for the feed to change, takes whatever frame is newest and plays
/// it. Frames published while a round is being committed overwrite each
/// other, so at most one frame is ever pending.
pub struct SessionRunner {
    session_id: String,
    session: Arc<Mutex<GameSession>>,
    receiver: watch::Receiver<Option<Frame>>,
    event_bus: EventBus,
}

impl SessionRunner {
    pub fn new(
        session_id: String,
        session: Arc<Mutex<GameSession>>,
        receiver: watch::Receiver<Option<Frame>>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            session_id,
            session,
            receiver,
            event_bus,
        }
    }

    /// Spawn the consumer task. It ends once every feed handle is dropped.
    pub fn start(mut self) -> JoinHandle<()> {
        tokio::spawn(async move {
            info!(session_id = %self.session_id, "Session runner started");

            while self.receiver.changed().await.is_ok() {
                let frame = self.receiver.borrow_and_update().clone();
                let Some(frame) = frame else {
                    continue;
                };

                if let Err(e) =
                    play_and_emit(&self.session_id, &self.session, frame, &self.event_bus).await
                {
                    debug!(session_id = %self.session_id, error = %e, "Frame rejected");
                }
            }

            info!(session_id = %self.session_id, "Session runner stopped - feed closed");
        })
    }
}
