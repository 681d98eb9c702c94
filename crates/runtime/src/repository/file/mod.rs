//! JSON file collaborator implementations used by the command-line client.

mod records;
mod snapshots;

pub use records::FileRecordStore;
pub use snapshots::FileSnapshotCache;
