use std::collections::HashMap;

use super::record::ExternalId;

/// Freshly fetched values of a player's mutable fields.
///
/// Not persisted by this system. Presented as an overlay on top of the
/// stored record, never written back into it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiveSnapshot {
    pub team: String,
    pub age: u32,
    pub market_value: u64,
}

/// Live snapshots keyed by upstream id. A missing key means "no live data".
pub type SnapshotMap = HashMap<ExternalId, LiveSnapshot>;
