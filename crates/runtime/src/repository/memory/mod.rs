//! In-memory collaborator implementations for testing and development.

mod records;
mod snapshots;

pub use records::InMemoryRecordStore;
pub use snapshots::InMemorySnapshotCache;
