//! File-based record store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use scout_core::{PlayerDraft, PlayerRecord, RecordId};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::repository::{RecordStore, RepositoryError, Result};

/// On-disk layout of the record file.
#[derive(Debug, Serialize, Deserialize)]
struct RecordFile {
    /// Next id to assign. Ids are never reused, even after deletes.
    #[serde(default)]
    next_record_id: u64,
    records: Vec<PlayerRecord>,
}

/// Record store persisted as a single pretty-printed JSON file.
///
/// A missing file reads as an empty collection. Writes go to a temp file
/// followed by a rename, so readers never observe a partial file.
pub struct FileRecordStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileRecordStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_file(&self) -> Result<RecordFile> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(RecordFile {
                    next_record_id: 1,
                    records: Vec::new(),
                });
            }
            Err(err) => return Err(RepositoryError::Io(err)),
        };

        let mut file: RecordFile = serde_json::from_slice(&bytes)?;
        let max_id = file
            .records
            .iter()
            .map(|record| record.record_id.0)
            .max()
            .unwrap_or(0);
        file.next_record_id = file.next_record_id.max(max_id.saturating_add(1));
        Ok(file)
    }

    async fn write_file(&self, file: &RecordFile) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(file)?;
        tokio::fs::write(&temp_path, bytes).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;

        tracing::debug!(
            "Wrote {} records to {}",
            file.records.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[async_trait]
impl RecordStore for FileRecordStore {
    async fn list_records(&self) -> Result<Vec<PlayerRecord>> {
        Ok(self.read_file().await?.records)
    }

    async fn create_record(&self, draft: PlayerDraft) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut file = self.read_file().await?;

        let record_id = RecordId(file.next_record_id);
        file.next_record_id = file
            .next_record_id
            .checked_add(1)
            .ok_or(RepositoryError::IdsExhausted)?;
        file.records.push(draft.into_record(record_id, Some(chrono::Utc::now().to_rfc3339())));

        self.write_file(&file).await
    }

    async fn delete_record(&self, record_id: RecordId) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut file = self.read_file().await?;

        let before = file.records.len();
        file.records.retain(|record| record.record_id != record_id);
        if file.records.len() == before {
            return Err(RepositoryError::NotFound(record_id));
        }

        self.write_file(&file).await
    }
}
