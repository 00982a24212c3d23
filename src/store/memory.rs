use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use super::gateway::DocumentStore;
use super::types::{PunchInRecord, StoreError, StoredRecord};

/// In-process document store with the same contract as the Postgres
/// gateway. Backs the handler tests; never used in production.
#[derive(Default)]
pub struct MemoryStore {
    documents: DashMap<String, PunchInRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, id: &str, record: &PunchInRecord) -> Result<(), StoreError> {
        match self.documents.entry(id.to_string()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateKey { id: id.to_string() }),
            Entry::Vacant(entry) => {
                entry.insert(record.clone());
                Ok(())
            }
        }
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        self.documents
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    async fn query_all_by_type(&self, doc_type: &str) -> Result<Vec<StoredRecord>, StoreError> {
        let mut records: Vec<StoredRecord> = self
            .documents
            .iter()
            .filter(|entry| entry.value().doc_type == doc_type)
            .map(|entry| StoredRecord {
                id: entry.key().clone(),
                record: entry.value().clone(),
            })
            .collect();

        records.sort_by(|a, b| b.record.created_at.cmp(&a.record.created_at));
        Ok(records)
    }
}
