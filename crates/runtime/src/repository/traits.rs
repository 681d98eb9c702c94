//! Collaborator contracts consumed by the session.

use std::collections::HashMap;

use async_trait::async_trait;
use scout_core::{ExternalId, LiveSnapshot, PlayerDraft, PlayerRecord, RecordId};

use super::Result;

/// Response of a batched snapshot lookup.
///
/// `None` values and missing keys both mean "no live data yet".
pub type SnapshotBatch = HashMap<ExternalId, Option<LiveSnapshot>>;

/// Canonical player collection.
///
/// The store performs no filtering or pagination; callers always receive
/// the whole collection and replace their copy wholesale.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Full current collection.
    async fn list_records(&self) -> Result<Vec<PlayerRecord>>;

    /// Inserts a new record. The store assigns the record id and creation time.
    async fn create_record(&self, draft: PlayerDraft) -> Result<()>;

    /// Removes a record. Fails with [`RepositoryError::NotFound`](super::RepositoryError::NotFound)
    /// if it does not exist.
    async fn delete_record(&self, record_id: RecordId) -> Result<()>;
}

/// Remote key-value cache of live player data.
#[async_trait]
pub trait SnapshotService: Send + Sync {
    /// Batched lookup. Implementations may omit ids they know nothing about.
    async fn get_snapshots(&self, external_ids: &[ExternalId]) -> Result<SnapshotBatch>;
}
