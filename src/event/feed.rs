use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

use crate::session::Frame;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedError {
    #[error("Pose feed closed: session runner has stopped")]
    Closed,
}

/// Latest-only slot between the hand tracker and a session.
///
/// Publishing replaces any frame the session has not picked up yet, so a
/// fast tracker never queues work behind a slow consumer.
#[derive(Debug, Clone)]
pub struct PoseFeed {
    sender: Arc<watch::Sender<Option<Frame>>>,
}

impl PoseFeed {
    /// Create a feed and the receiver its consumer reads from
    pub fn channel() -> (Self, watch::Receiver<Option<Frame>>) {
        let (sender, receiver) = watch::channel(None);
        (
            Self {
                sender: Arc::new(sender),
            },
            receiver,
        )
    }

    /// Hand a frame to the consumer, superseding any unread one
    pub fn publish(&self, frame: Frame) -> Result<(), FeedError> {
        self.sender.send(Some(frame)).map_err(|_| FeedError::Closed)
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
