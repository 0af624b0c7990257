use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::Instrument;

use crate::classify::{
    classify_marketplace, Decision, IgnoreReason, MarketplaceMutation, PushClassifier,
};
use crate::collaborators::{
    MarketplaceRecord, QueueCollector, TableOperation, TableStore,
};
use crate::error::HookError;
use crate::events::{GitHubEvent, InboundEvent};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookResponse {
    pub result: String,
}

impl HookResponse {
    pub fn new(result: impl Into<String>) -> Self {
        Self {
            result: result.into(),
        }
    }
}

#[derive(Debug)]
pub enum Outcome {
    Ignored,
    Dispatched,
    Mutated,
    Failed(HookError),
}

#[derive(Debug)]
pub struct HookReport {
    pub outcome: Outcome,
    pub response: HookResponse,
}

impl HookReport {
    fn failed(error: HookError) -> Self {
        Self {
            response: HookResponse::new(error.to_string()),
            outcome: Outcome::Failed(error),
        }
    }

    pub fn error(&self) -> Option<&HookError> {
        match &self.outcome {
            Outcome::Failed(e) => Some(e),
            _ => None,
        }
    }
}

pub struct DispatchEngine {
    push: PushClassifier,
    queue: Arc<dyn QueueCollector>,
    table: Arc<dyn TableStore>,
}

impl DispatchEngine {
    pub fn new(
        push: PushClassifier,
        queue: Arc<dyn QueueCollector>,
        table: Arc<dyn TableStore>,
    ) -> Self {
        Self { push, queue, table }
    }

    pub async fn handle(&self, event_header: &str, body: &[u8]) -> HookReport {
        self.dispatch(InboundEvent::new(event_header, body)).await
    }

    pub async fn dispatch(&self, event: InboundEvent) -> HookReport {
        let span = tracing::info_span!("dispatch", kind = event.kind.as_str());

        async move {
            match self.execute(&event).await {
                Ok(report) => report,
                Err(e) => {
                    tracing::error!("{e}");
                    HookReport::failed(e)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn execute(&self, event: &InboundEvent) -> Result<HookReport, HookError> {
        let decision = self.classify(event)?;
        let response = HookResponse::new(decision.response_text());

        let outcome = self.apply(decision).await?;

        Ok(HookReport { outcome, response })
    }

    fn classify(&self, event: &InboundEvent) -> Result<Decision, HookError> {
        let decision = match event.parse()? {
            GitHubEvent::Push(payload) => self.push.classify(&payload)?,
            GitHubEvent::MarketplacePurchase(payload) => classify_marketplace(&payload),
            GitHubEvent::Unknown => Decision::Ignore(IgnoreReason::UnknownEvent),
        };

        Ok(decision)
    }

    async fn apply(&self, decision: Decision) -> Result<Outcome, HookError> {
        match decision {
            Decision::Ignore(reason) => {
                tracing::debug!("Ignored: {}", reason.response_text());
                Ok(Outcome::Ignored)
            }
            Decision::Dispatch(message) => {
                tracing::info!(
                    installation_id = message.installation_id,
                    "Queueing {}/{} for optimization",
                    message.owner,
                    message.repo_name
                );
                self.queue.add(message).await?;
                Ok(Outcome::Dispatched)
            }
            Decision::Mutate(MarketplaceMutation::Upsert(record)) => {
                tracing::info!("Marketplace purchase for {}", record.key());
                self.table
                    .execute(TableOperation::InsertOrMerge(record))
                    .await?;
                Ok(Outcome::Mutated)
            }
            Decision::Mutate(MarketplaceMutation::Cancel(record)) => self.cancel(record).await,
        }
    }

    /// Fetch, then delete conditioned on the fetched etag. A missing row is a
    /// no-op; a changed row is a conflict.
    async fn cancel(&self, record: MarketplaceRecord) -> Result<Outcome, HookError> {
        let key = record.key();
        let existing = self
            .table
            .execute(TableOperation::Retrieve(key.clone()))
            .await?;

        let Some(stored) = existing.entity else {
            tracing::info!("Marketplace cancellation for {key}: no record, nothing to delete");
            return Ok(Outcome::Ignored);
        };

        let etag = existing.etag.ok_or_else(|| {
            HookError::TableUnavailable(format!("retrieve of {key} returned no etag"))
        })?;

        tracing::info!("Marketplace cancellation for {key}");
        self.table
            .execute(TableOperation::Delete {
                record: stored,
                etag,
            })
            .await?;

        Ok(Outcome::Mutated)
    }
}
