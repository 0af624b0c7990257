use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::events::RouterMessage;

use super::{QueueCollector, QueueError};

pub struct RouterActor(mpsc::Receiver<RouterMessage>);

impl RouterActor {
    pub fn new(rx: mpsc::Receiver<RouterMessage>) -> Self {
        Self(rx)
    }

    /// Runs until every [`ChannelQueue`] handle is dropped. Returns the number
    /// of messages drained.
    pub async fn run(mut self) -> usize {
        let mut drained = 0;

        while let Some(message) = self.0.recv().await {
            drained += 1;
            tracing::info!(
                installation_id = message.installation_id,
                owner = %message.owner,
                repo = %message.repo_name,
                "Router message received"
            );
        }

        tracing::debug!("Router queue closed after {drained} messages");
        drained
    }
}

#[derive(Clone)]
pub struct ChannelQueue(mpsc::Sender<RouterMessage>);

impl ChannelQueue {
    pub fn bounded(capacity: usize) -> (Self, RouterActor) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self(tx), RouterActor::new(rx))
    }
}

#[async_trait]
impl QueueCollector for ChannelQueue {
    async fn add(&self, message: RouterMessage) -> Result<(), QueueError> {
        self.0.send(message).await.map_err(|_| QueueError::Closed)
    }
}
