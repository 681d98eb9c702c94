//! File-backed snapshot cache.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use scout_core::{ExternalId, LiveSnapshot};

use crate::repository::{RepositoryError, Result, SnapshotBatch, SnapshotService};

/// Serves live snapshots from a JSON object keyed by external id.
///
/// ```json
/// { "10": { "team": "Blue", "age": 20, "market_value": 1000000 }, "11": null }
/// ```
///
/// The file is re-read on every lookup so an external process can refresh
/// it. A missing file is an empty cache, not an error.
pub struct FileSnapshotCache {
    path: PathBuf,
}

impl FileSnapshotCache {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    async fn load(&self) -> Result<HashMap<ExternalId, Option<LiveSnapshot>>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Snapshot file {} not found", self.path.display());
                Ok(HashMap::new())
            }
            Err(err) => Err(RepositoryError::Io(err)),
        }
    }
}

#[async_trait]
impl SnapshotService for FileSnapshotCache {
    async fn get_snapshots(&self, external_ids: &[ExternalId]) -> Result<SnapshotBatch> {
        let cached = self.load().await?;
        Ok(external_ids
            .iter()
            .map(|id| (*id, cached.get(id).cloned().flatten()))
            .collect())
    }
}
