use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use handrps::{
    event::{EventError, RoundEventHandler},
    session::{CreateSessionRequest, SessionHandle},
    Difficulty, EventBus, RoundEvent, SessionManager,
};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

/// Keeps every round event it sees
#[derive(Clone, Default)]
pub struct CollectingSubscriber {
    events: Arc<Mutex<Vec<RoundEvent>>>,
}

impl CollectingSubscriber {
    pub async fn events(&self) -> Vec<RoundEvent> {
        self.events.lock().await.clone()
    }
}

#[async_trait]
impl RoundEventHandler for CollectingSubscriber {
    async fn handle_round_event(&self, event: RoundEvent) -> Result<(), EventError> {
        self.events.lock().await.push(event);
        Ok(())
    }

    fn handler_name(&self) -> &'static str {
        "CollectingSubscriber"
    }
}

pub struct TestSetup {
    pub manager: SessionManager,
    pub collector: CollectingSubscriber,
    pub session: SessionHandle,
}

pub struct TestSetupBuilder {
    difficulty: Difficulty,
    seed: u64,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            difficulty: Difficulty::Hard,
            seed: 2024,
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub async fn build(self) -> TestSetup {
        let collector = CollectingSubscriber::default();
        let manager = SessionManager::new(EventBus::default())
            .with_subscriber(Arc::new(collector.clone()));

        let session = manager
            .create_session(CreateSessionRequest {
                difficulty: Some(self.difficulty),
                seed: Some(self.seed),
            })
            .await;

        TestSetup {
            manager,
            collector,
            session,
        }
    }
}
