use serde::{Deserialize, Serialize};

use super::Topic;

/// Outcome of merging one snapshot response into the overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeReport {
    /// Request generation the response belonged to.
    pub generation: u64,
    /// Entries written into the overlay.
    pub applied: usize,
    /// Entries for ids no longer in the collection.
    pub discarded: usize,
    /// Entries skipped because a newer request already wrote that id.
    pub superseded: usize,
    /// Ids the service had no data for.
    pub missing: usize,
}

/// Collaborator operation that was applied optimistically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Create,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The in-memory collection was replaced wholesale.
    CollectionReplaced { records: usize },

    SnapshotsMerged(MergeReport),

    /// A stale page number was pulled back into range.
    PageClamped { requested: usize, clamped: usize },

    /// An optimistic change was undone because the store rejected it.
    OptimisticRollback { operation: Operation, reason: String },
}

impl SessionEvent {
    pub fn topic(&self) -> Topic {
        match self {
            SessionEvent::CollectionReplaced { .. } | SessionEvent::OptimisticRollback { .. } => {
                Topic::Collection
            }
            SessionEvent::SnapshotsMerged(_) => Topic::Snapshots,
            SessionEvent::PageClamped { .. } => Topic::View,
        }
    }
}
