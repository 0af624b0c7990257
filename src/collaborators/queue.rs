use async_trait::async_trait;
use thiserror::Error;

use crate::events::RouterMessage;

#[derive(Error, Debug)]
pub enum QueueError {
    #[error("Router queue is closed")]
    Closed,
}

#[async_trait]
pub trait QueueCollector: Send + Sync {
    async fn add(&self, message: RouterMessage) -> Result<(), QueueError>;
}
