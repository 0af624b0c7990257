use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use super::table::ETAG_ANY;
use super::{MarketplaceRecord, RecordKey, TableError, TableOperation, TableResult, TableStore};

#[derive(Debug, Clone)]
struct StoredRow {
    record: MarketplaceRecord,
    etag: String,
}

#[derive(Default)]
pub struct MemoryTable {
    rows: DashMap<RecordKey, StoredRow>,
}

impl MemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, key: &RecordKey) -> Option<MarketplaceRecord> {
        self.rows.get(key).map(|row| row.record.clone())
    }

    fn next_etag() -> String {
        format!("W/\"{}\"", Uuid::new_v4())
    }

    fn retrieve(&self, key: &RecordKey) -> TableResult {
        match self.rows.get(key) {
            Some(row) => TableResult {
                entity: Some(row.record.clone()),
                etag: Some(row.etag.clone()),
            },
            None => TableResult::default(),
        }
    }

    fn insert_or_merge(&self, record: MarketplaceRecord) -> TableResult {
        let etag = Self::next_etag();

        let stored = match self.rows.entry(record.key()) {
            Entry::Occupied(mut occupied) => {
                let row = occupied.get_mut();
                row.record.merge(record);
                row.etag = etag.clone();
                row.record.clone()
            }
            Entry::Vacant(vacant) => {
                vacant.insert(StoredRow {
                    record: record.clone(),
                    etag: etag.clone(),
                });
                record
            }
        };

        TableResult {
            entity: Some(stored),
            etag: Some(etag),
        }
    }

    fn delete(&self, record: &MarketplaceRecord, etag: &str) -> Result<TableResult, TableError> {
        let key = record.key();

        // A row that is already gone counts as a conflict too: something else
        // changed it after the caller read it.
        self.rows
            .remove_if(&key, |_, row| etag == ETAG_ANY || row.etag == etag)
            .map(|_| TableResult::default())
            .ok_or(TableError::ConcurrencyConflict(key))
    }
}

#[async_trait]
impl TableStore for MemoryTable {
    async fn execute(&self, operation: TableOperation) -> Result<TableResult, TableError> {
        match operation {
            TableOperation::Retrieve(key) => Ok(self.retrieve(&key)),
            TableOperation::InsertOrMerge(record) => Ok(self.insert_or_merge(record)),
            TableOperation::Delete { record, etag } => self.delete(&record, &etag),
        }
    }
}
