//! Collaborator layer for data the session does not own.
//!
//! - [`RecordStore`]: the canonical player collection (create, delete, list)
//! - [`SnapshotService`]: the remote cache of live player data
//!
//! Both come with in-memory adapters for tests and local runs, and JSON file
//! adapters used by the command-line client.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::{FileRecordStore, FileSnapshotCache};
pub use memory::{InMemoryRecordStore, InMemorySnapshotCache};
pub use traits::{RecordStore, SnapshotBatch, SnapshotService};
