use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

use super::{
    game_session::{GameSession, RoundError},
    types::{CreateSessionRequest, Frame, RoundReport, SessionSnapshot},
};
use crate::{
    bot::Difficulty,
    event::{
        play_and_emit, EventBus, FeedError, PoseFeed, RoundEventHandler, RoundSubscription,
        SessionRunner,
    },
    shared::AppError,
};

/// Cheap handle to one live session
#[derive(Clone)]
pub struct SessionHandle {
    pub id: String,
    pub difficulty: Difficulty,
    session: Arc<Mutex<GameSession>>,
    feed: PoseFeed,
    event_bus: EventBus,
}

impl SessionHandle {
    /// Play a frame now and wait for the result
    pub async fn play(&self, frame: Frame) -> Result<RoundReport, RoundError> {
        play_and_emit(&self.id, &self.session, frame, &self.event_bus).await
    }

    /// Queue a frame for the session runner, replacing any unplayed one
    pub fn submit(&self, frame: Frame) -> Result<(), FeedError> {
        self.feed.publish(frame)
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.lock().await.snapshot(&self.id)
    }

    pub async fn strategy_name(&self) -> &'static str {
        self.session.lock().await.strategy_name()
    }
}

struct SessionEntry {
    handle: SessionHandle,
    tasks: Vec<JoinHandle<()>>,
}

/// Registry of live sessions.
///
/// Sessions are independent; ending one drops its state for good.
#[derive(Clone)]
pub struct SessionManager {
    sessions: Arc<RwLock<HashMap<String, SessionEntry>>>,
    event_bus: EventBus,
    subscribers: Vec<Arc<dyn RoundEventHandler>>,
    default_difficulty: Difficulty,
    default_seed: Option<u64>,
}

impl SessionManager {
    pub fn new(event_bus: EventBus) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            event_bus,
            subscribers: Vec::new(),
            default_difficulty: Difficulty::default(),
            default_seed: None,
        }
    }

    pub fn with_default_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.default_difficulty = difficulty;
        self
    }

    pub fn with_default_seed(mut self, seed: Option<u64>) -> Self {
        self.default_seed = seed;
        self
    }

    /// Attach a handler to every session created from now on
    pub fn with_subscriber(mut self, handler: Arc<dyn RoundEventHandler>) -> Self {
        self.subscribers.push(handler);
        self
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Create a session and start its runner and subscriptions
    pub async fn create_session(&self, request: CreateSessionRequest) -> SessionHandle {
        let id = Uuid::new_v4().to_string();
        let difficulty = request.difficulty.unwrap_or(self.default_difficulty);
        let seed = request.seed.or(self.default_seed);

        let session = Arc::new(Mutex::new(GameSession::with_difficulty(difficulty, seed)));
        let (feed, receiver) = PoseFeed::channel();
        self.event_bus.open_session(&id).await;

        let mut tasks = Vec::with_capacity(self.subscribers.len() + 1);
        for handler in &self.subscribers {
            let subscription =
                RoundSubscription::new(id.clone(), handler.clone(), self.event_bus.clone());
            tasks.push(subscription.start().await);
        }
        tasks.push(
            SessionRunner::new(id.clone(), session.clone(), receiver, self.event_bus.clone())
                .start(),
        );

        let handle = SessionHandle {
            id: id.clone(),
            difficulty,
            session,
            feed,
            event_bus: self.event_bus.clone(),
        };

        info!(
            session_id = %id,
            difficulty = ?difficulty,
            seeded = seed.is_some(),
            "Session created"
        );

        let mut sessions = self.sessions.write().await;
        sessions.insert(
            id,
            SessionEntry {
                handle: handle.clone(),
                tasks,
            },
        );

        handle
    }

    pub async fn get(&self, session_id: &str) -> Option<SessionHandle> {
        let sessions = self.sessions.read().await;
        sessions.get(session_id).map(|entry| entry.handle.clone())
    }

    /// End a session, stopping its runner and discarding its state
    pub async fn end_session(&self, session_id: &str) -> Result<(), AppError> {
        let entry = {
            let mut sessions = self.sessions.write().await;
            sessions.remove(session_id)
        }
        .ok_or_else(|| AppError::NotFound(format!("Session not found: {}", session_id)))?;

        for task in entry.tasks {
            task.abort();
        }
        self.event_bus.close_session(session_id).await;

        info!(session_id = %session_id, "Session ended");
        Ok(())
    }

    pub async fn session_count(&self) -> usize {
        let sessions = self.sessions.read().await;
        debug!(count = sessions.len(), "Counting sessions");
        sessions.len()
    }
}
