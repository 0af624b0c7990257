use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::webhook_payloads::github::GithubMarketplacePurchasePayload;

/// Etag value that matches any stored version of a row.
pub const ETAG_ANY: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordKey {
    pub partition_key: String,
    pub row_key: String,
}

impl RecordKey {
    pub fn new(account_id: i64, account_login: &str) -> Self {
        Self {
            partition_key: account_id.to_string(),
            row_key: account_login.to_string(),
        }
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.partition_key, self.row_key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceRecord {
    pub account_id: i64,
    pub account_login: String,
    pub account_type: String,
    pub plan_id: i64,
    pub plan_name: String,
    pub sender_login: String,
    pub on_free_trial: bool,
    pub organization_billing_email: Option<String>,
    pub sender_id: Option<i64>,
    pub sender_email: Option<String>,
    pub price_model: Option<String>,
    pub billing_cycle: Option<String>,
    pub unit_count: Option<i64>,
    pub effective_date: Option<String>,
    pub free_trial_ends_on: Option<String>,
    pub next_billing_date: Option<String>,
}

impl MarketplaceRecord {
    pub fn from_payload(payload: &GithubMarketplacePurchasePayload) -> Self {
        let purchase = &payload.marketplace_purchase;

        Self {
            account_id: purchase.account.id,
            account_login: purchase.account.login.clone(),
            account_type: purchase.account.account_type.clone(),
            plan_id: purchase.plan.id,
            plan_name: purchase.plan.name.clone(),
            sender_login: payload.sender.login.clone(),
            on_free_trial: purchase.on_free_trial,
            organization_billing_email: purchase.account.organization_billing_email.clone(),
            sender_id: payload.sender.id,
            sender_email: payload.sender.email.clone(),
            price_model: purchase.plan.price_model.clone(),
            billing_cycle: purchase.billing_cycle.clone(),
            unit_count: purchase.unit_count,
            effective_date: payload.effective_date.clone(),
            free_trial_ends_on: purchase.free_trial_ends_on.clone(),
            next_billing_date: purchase.next_billing_date.clone(),
        }
    }

    pub fn key(&self) -> RecordKey {
        RecordKey::new(self.account_id, &self.account_login)
    }

    /// Merge semantics of an upsert: present values win, absent optional
    /// values keep what is stored.
    pub fn merge(&mut self, incoming: MarketplaceRecord) {
        fn keep<T>(stored: &mut Option<T>, incoming: Option<T>) {
            if incoming.is_some() {
                *stored = incoming;
            }
        }

        self.account_type = incoming.account_type;
        self.plan_id = incoming.plan_id;
        self.plan_name = incoming.plan_name;
        self.sender_login = incoming.sender_login;
        self.on_free_trial = incoming.on_free_trial;
        keep(
            &mut self.organization_billing_email,
            incoming.organization_billing_email,
        );
        keep(&mut self.sender_id, incoming.sender_id);
        keep(&mut self.sender_email, incoming.sender_email);
        keep(&mut self.price_model, incoming.price_model);
        keep(&mut self.billing_cycle, incoming.billing_cycle);
        keep(&mut self.unit_count, incoming.unit_count);
        keep(&mut self.effective_date, incoming.effective_date);
        keep(&mut self.free_trial_ends_on, incoming.free_trial_ends_on);
        keep(&mut self.next_billing_date, incoming.next_billing_date);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableOperation {
    Retrieve(RecordKey),
    InsertOrMerge(MarketplaceRecord),
    /// Removes the row only if its current etag still equals `etag`.
    Delete {
        record: MarketplaceRecord,
        etag: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableOperationType {
    Retrieve,
    InsertOrMerge,
    Delete,
}

impl TableOperation {
    pub fn operation_type(&self) -> TableOperationType {
        match self {
            TableOperation::Retrieve(_) => TableOperationType::Retrieve,
            TableOperation::InsertOrMerge(_) => TableOperationType::InsertOrMerge,
            TableOperation::Delete { .. } => TableOperationType::Delete,
        }
    }

    pub fn is_mutation(&self) -> bool {
        !matches!(self, TableOperation::Retrieve(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableResult {
    pub entity: Option<MarketplaceRecord>,
    pub etag: Option<String>,
}

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Etag mismatch for {0}")]
    ConcurrencyConflict(RecordKey),

    #[error("Table storage unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait TableStore: Send + Sync {
    async fn execute(&self, operation: TableOperation) -> Result<TableResult, TableError>;
}
