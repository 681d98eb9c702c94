//! In-memory record store.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use scout_core::{PlayerDraft, PlayerRecord, RecordId};

use crate::repository::{RecordStore, RepositoryError, Result};

/// In-memory record store for testing and development.
///
/// Thread-safe but not persistent across process restarts. Record ids are
/// allocated sequentially and never reused.
pub struct InMemoryRecordStore {
    inner: RwLock<Inner>,
}

struct Inner {
    records: BTreeMap<RecordId, PlayerRecord>,
    next_id: u64,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a store pre-loaded with records, keeping their ids.
    pub fn with_records(records: Vec<PlayerRecord>) -> Self {
        // Saturates: u64::MAX is never assigned, creates fail once it is reached.
        let next_id = records
            .iter()
            .map(|record| record.record_id.0)
            .max()
            .map_or(1, |max| max.saturating_add(1));
        Self {
            inner: RwLock::new(Inner {
                records: records
                    .into_iter()
                    .map(|record| (record.record_id, record))
                    .collect(),
                next_id,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|inner| inner.records.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn list_records(&self) -> Result<Vec<PlayerRecord>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        Ok(inner.records.values().cloned().collect())
    }

    async fn create_record(&self, draft: PlayerDraft) -> Result<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let record_id = RecordId(inner.next_id);
        inner.next_id = inner
            .next_id
            .checked_add(1)
            .ok_or(RepositoryError::IdsExhausted)?;
        let record = draft.into_record(record_id, Some(chrono::Utc::now().to_rfc3339()));
        inner.records.insert(record_id, record);
        Ok(())
    }

    async fn delete_record(&self, record_id: RecordId) -> Result<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        inner
            .records
            .remove(&record_id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(record_id))
    }
}
