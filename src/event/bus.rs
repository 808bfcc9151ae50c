use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::debug;

use super::events::RoundEvent;

pub const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Event bus for distributing round events to per-session subscribers
#[derive(Debug, Clone)]
pub struct EventBus {
    /// Session-specific event channels: session_id -> sender
    session_channels: Arc<RwLock<HashMap<String, broadcast::Sender<RoundEvent>>>>,
    capacity: usize,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }
}

impl EventBus {
    /// Creates a new event bus with the specified per-session capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            session_channels: Arc::new(RwLock::new(HashMap::new())),
            capacity: capacity.max(1),
        }
    }

    /// Open the channel for a new session
    pub async fn open_session(&self, session_id: &str) {
        self.sender_for(session_id).await;
    }

    /// Emits an event to all subscribers of its session.
    ///
    /// Events for sessions with no open channel are dropped.
    pub async fn emit(&self, event: RoundEvent) {
        let session_id = event.session_id().to_string();
        let session_channels = self.session_channels.read().await;

        let Some(sender) = session_channels.get(&session_id) else {
            debug!(session_id = %session_id, "No channel for session, dropping event");
            return;
        };

        match sender.send(event) {
            Ok(receiver_count) => {
                debug!(
                    session_id = %session_id,
                    receivers = receiver_count,
                    "Round event emitted"
                );
            }
            Err(_) => {
                debug!(session_id = %session_id, "Round event emitted with no receivers");
            }
        }
    }

    /// Subscribe to events for a specific session
    pub async fn subscribe_to_session(&self, session_id: &str) -> broadcast::Receiver<RoundEvent> {
        self.sender_for(session_id).await.subscribe()
    }

    /// Drop a session's channel; its subscribers see the channel close
    pub async fn close_session(&self, session_id: &str) {
        let mut session_channels = self.session_channels.write().await;
        if session_channels.remove(session_id).is_some() {
            debug!(session_id = %session_id, "Closed session channel");
        }
    }

    pub async fn has_session(&self, session_id: &str) -> bool {
        self.session_channels.read().await.contains_key(session_id)
    }

    async fn sender_for(&self, session_id: &str) -> broadcast::Sender<RoundEvent> {
        let session_channels = self.session_channels.read().await;
        if let Some(sender) = session_channels.get(session_id) {
            return sender.clone();
        }
        drop(session_channels);

        debug!(session_id = %session_id, "Creating new session channel");
        let mut session_channels = self.session_channels.write().await;
        session_channels
            .entry(session_id.to_string())
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .clone()
    }
}
