use thiserror::Error;

use crate::collaborators::{QueueError, TableError};

pub type Result<T> = anyhow::Result<T>;

#[derive(Error, Debug)]
pub enum HookError {
    #[error("Malformed {kind} payload: {reason}")]
    MalformedPayload { kind: &'static str, reason: String },

    #[error("Router queue unavailable: {0}")]
    QueueUnavailable(String),

    #[error("Marketplace table unavailable: {0}")]
    TableUnavailable(String),

    #[error("Marketplace record {partition_key}/{row_key} was modified concurrently")]
    ConcurrencyConflict {
        partition_key: String,
        row_key: String,
    },
}

impl From<QueueError> for HookError {
    fn from(e: QueueError) -> Self {
        HookError::QueueUnavailable(e.to_string())
    }
}

impl From<TableError> for HookError {
    fn from(e: TableError) -> Self {
        match e {
            TableError::ConcurrencyConflict(key) => HookError::ConcurrencyConflict {
                partition_key: key.partition_key,
                row_key: key.row_key,
            },
            TableError::Unavailable(reason) => HookError::TableUnavailable(reason),
        }
    }
}
