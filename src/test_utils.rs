use std::sync::Mutex;

use async_trait::async_trait;

use crate::collaborators::{
    MarketplaceRecord, QueueCollector, QueueError, TableError, TableOperation,
    TableOperationType, TableResult, TableStore,
};
use crate::events::RouterMessage;
use crate::webhook_payloads::github::{
    GithubCommit, GithubInstallation, GithubMarketplacePurchasePayload, GithubPushWebhookPayload,
    GithubRepository, GithubUser,
};

pub mod fixtures {
    macro_rules! hook {
        ($name:literal) => {
            include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/hooks/", $name))
        };
    }

    pub const COMMIT_OTHER_BRANCH: &[u8] = hook!("commit-otherbranch.json");
    pub const COMMIT_DEFAULT_BRANCH_NO_IMAGES: &[u8] = hook!("commit-defaultbranch-noimages.json");
    pub const COMMIT_DEFAULT_BRANCH_IMAGES: &[u8] = hook!("commit-defaultbranch-images.json");
    pub const MARKETPLACE_PURCHASE: &[u8] = hook!("marketplacepurchase.json");
    pub const MARKETPLACE_CANCELLATION: &[u8] = hook!("marketplacecancellation.json");
}

#[derive(Default)]
pub struct RecordingQueue {
    messages: Mutex<Vec<RouterMessage>>,
    fail: bool,
}

impl RecordingQueue {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn messages(&self) -> Vec<RouterMessage> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueueCollector for RecordingQueue {
    async fn add(&self, message: RouterMessage) -> Result<(), QueueError> {
        if self.fail {
            return Err(QueueError::Closed);
        }

        self.messages.lock().unwrap().push(message);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingTable {
    operations: Mutex<Vec<TableOperation>>,
    retrieve: TableResult,
    conflict_on_delete: bool,
    unavailable: bool,
}

impl RecordingTable {
    pub fn with_retrieve(result: TableResult) -> Self {
        Self {
            retrieve: result,
            ..Self::default()
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn conflict_on_delete(mut self) -> Self {
        self.conflict_on_delete = true;
        self
    }

    pub fn operations(&self) -> Vec<TableOperation> {
        self.operations.lock().unwrap().clone()
    }

    pub fn operation_types(&self) -> Vec<TableOperationType> {
        self.operations()
            .iter()
            .map(TableOperation::operation_type)
            .collect()
    }
}

#[async_trait]
impl TableStore for RecordingTable {
    async fn execute(&self, operation: TableOperation) -> Result<TableResult, TableError> {
        self.operations.lock().unwrap().push(operation.clone());

        if self.unavailable {
            return Err(TableError::Unavailable("503 Server Busy".to_string()));
        }

        match operation {
            TableOperation::Retrieve(_) => Ok(self.retrieve.clone()),
            TableOperation::InsertOrMerge(record) => Ok(TableResult {
                entity: Some(record),
                etag: Some("W/\"1\"".to_string()),
            }),
            TableOperation::Delete { record, .. } if self.conflict_on_delete => {
                Err(TableError::ConcurrencyConflict(record.key()))
            }
            TableOperation::Delete { .. } => Ok(TableResult::default()),
        }
    }
}

pub fn push_payload(
    reference: &str,
    default_branch: &str,
    commits: Vec<GithubCommit>,
) -> GithubPushWebhookPayload {
    GithubPushWebhookPayload {
        reference: reference.to_string(),
        commits,
        repository: GithubRepository {
            name: "test".to_string(),
            html_url: "https://github.com/dabutvin/test".to_string(),
            default_branch: default_branch.to_string(),
            owner: GithubUser {
                login: "dabutvin".to_string(),
                id: Some(3_781_339),
                email: None,
            },
        },
        installation: Some(GithubInstallation { id: 23199 }),
    }
}

pub fn marketplace_payload(action: &str) -> GithubMarketplacePurchasePayload {
    let mut payload: GithubMarketplacePurchasePayload =
        serde_json::from_slice(fixtures::MARKETPLACE_PURCHASE).unwrap();
    payload.action = action.to_string();
    payload
}

/// The record a delivery of `marketplacepurchase.json` produces.
pub fn purchased_record() -> MarketplaceRecord {
    MarketplaceRecord::from_payload(&marketplace_payload("purchased"))
}
