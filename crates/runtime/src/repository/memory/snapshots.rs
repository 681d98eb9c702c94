//! In-memory snapshot cache.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use scout_core::{ExternalId, LiveSnapshot};

use crate::repository::{RepositoryError, Result, SnapshotBatch, SnapshotService};

/// In-memory stand-in for the remote snapshot cache.
///
/// Every requested id gets an entry in the response: the cached snapshot, or
/// `None` on a miss.
#[derive(Default)]
pub struct InMemorySnapshotCache {
    entries: RwLock<HashMap<ExternalId, LiveSnapshot>>,
}

impl InMemorySnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: impl IntoIterator<Item = (ExternalId, LiveSnapshot)>) -> Self {
        Self {
            entries: RwLock::new(entries.into_iter().collect()),
        }
    }

    /// Store or replace the snapshot for `external_id`.
    pub fn put(&self, external_id: ExternalId, snapshot: LiveSnapshot) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        entries.insert(external_id, snapshot);
        Ok(())
    }

    pub fn evict(&self, external_id: ExternalId) -> Result<Option<LiveSnapshot>> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(entries.remove(&external_id))
    }
}

#[async_trait]
impl SnapshotService for InMemorySnapshotCache {
    async fn get_snapshots(&self, external_ids: &[ExternalId]) -> Result<SnapshotBatch> {
        let entries = self
            .entries
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        Ok(external_ids
            .iter()
            .map(|id| (*id, entries.get(id).cloned()))
            .collect())
    }
}
