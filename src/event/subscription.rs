use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::{bus::EventBus, handler::RoundEventHandler};

/// Routes one session's round events to a handler
pub struct RoundSubscription {
    session_id: String,
    handler: Arc<dyn RoundEventHandler>,
    event_bus: EventBus,
}

impl RoundSubscription {
    pub fn new(
        session_id: String,
        handler: Arc<dyn RoundEventHandler>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            session_id,
            handler,
            event_bus,
        }
    }

    /// Start the subscription - spawns a background task that listens to
    /// session events and routes them to the handler
    pub async fn start(self) -> JoinHandle<()> {
        let session_id = self.session_id.clone();
        let handler_name = self.handler.handler_name();

        info!(
            session_id = %session_id,
            handler = handler_name,
            "Starting round subscription"
        );

        let mut receiver = self.event_bus.subscribe_to_session(&session_id).await;

        tokio::spawn(async move {
            loop {
                let event = match receiver.recv().await {
                    Ok(event) => event,
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(
                            session_id = %session_id,
                            handler = handler_name,
                            skipped = skipped,
                            "Subscriber lagged, skipping events"
                        );
                        continue;
                    }
                    Err(RecvError::Closed) => break,
                };

                debug!(
                    session_id = %session_id,
                    handler = handler_name,
                    event_type = event.event_type(),
                    "Received round event"
                );

                if let Err(e) = self.handler.handle_round_event(event).await {
                    warn!(
                        session_id = %session_id,
                        handler = handler_name,
                        error = %e,
                        "Round event handler failed"
                    );
                }
            }

            info!(
                session_id = %session_id,
                handler = handler_name,
                "Round subscription ended"
            );
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventError, RoundEvent};
    use async_trait::async_trait;
    use tokio::sync::mpsc;

    /// Fails on every event after forwarding it
    struct FailingHandler {
        seen: mpsc::UnboundedSender<RoundEvent>,
    }

    #[async_trait]
    impl RoundEventHandler for FailingHandler {
        async fn handle_round_event(&self, event: RoundEvent) -> Result<(), EventError> {
            let event_type = event.event_type();
            let _ = self.seen.send(event);
            Err(EventError::HandlerError(format!("cannot store {}", event_type)))
        }

        fn handler_name(&self) -> &'static str {
            "FailingHandler"
        }
    }

    #[tokio::test]
    async fn test_handler_failure_does_not_stop_subscription() {
        let bus = EventBus::default();
        let (tx, mut seen) = mpsc::unbounded_channel();
        let task = RoundSubscription::new(
            "s1".to_string(),
            Arc::new(FailingHandler { seen: tx }),
            bus.clone(),
        )
        .start()
        .await;

        let first = RoundEvent::NoGesture {
            session_id: "s1".to_string(),
        };
        let second = RoundEvent::RoundRejected {
            session_id: "s1".to_string(),
            reason: "tracker lost the hand".to_string(),
        };
        bus.emit(first.clone()).await;
        bus.emit(second.clone()).await;

        assert_eq!(seen.recv().await, Some(first));
        assert_eq!(seen.recv().await, Some(second));

        bus.close_session("s1").await;
        task.await.unwrap();
    }
}
