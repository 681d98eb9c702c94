//! Pairs stored records with their live snapshots for presentation.
//!
//! Nothing here is cached: each call compares the record against whatever
//! snapshot is in the map right now.

use bitflags::bitflags;

use super::sort::value_change;
use crate::state::{LiveSnapshot, PlayerRecord, SnapshotMap};

bitflags! {
    /// Mutable fields whose live value differs from the stored one.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ChangedFields: u8 {
        const TEAM         = 1 << 0;
        const AGE          = 1 << 1;
        const MARKET_VALUE = 1 << 2;
    }
}

impl ChangedFields {
    pub fn between(record: &PlayerRecord, live: &LiveSnapshot) -> Self {
        let mut changed = Self::empty();
        changed.set(Self::TEAM, live.team != record.team);
        changed.set(Self::AGE, live.age != record.age);
        changed.set(Self::MARKET_VALUE, live.market_value != record.market_value);
        changed
    }
}

/// A record as presented: stored values plus the live overlay, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayRow<'a> {
    pub record: &'a PlayerRecord,
    pub live: Option<&'a LiveSnapshot>,
    pub changes: ChangedFields,
    /// See [`value_change`]; 0 without a snapshot or with a zero baseline.
    pub value_change: f64,
}

impl OverlayRow<'_> {
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    pub fn team_changed(&self) -> bool {
        self.changes.contains(ChangedFields::TEAM)
    }
}

pub fn overlay_row<'a>(record: &'a PlayerRecord, snapshots: &'a SnapshotMap) -> OverlayRow<'a> {
    let live = snapshots.get(&record.external_id);
    OverlayRow {
        record,
        live,
        changes: live.map_or(ChangedFields::empty(), |live| {
            ChangedFields::between(record, live)
        }),
        value_change: value_change(record, live),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ExternalId, RecordId};

    fn ali() -> PlayerRecord {
        PlayerRecord {
            record_id: RecordId(1),
            external_id: ExternalId(10),
            name: "Ali".into(),
            team: "Red".into(),
            age: 20,
            market_value: 1_000_000,
            created_at: None,
        }
    }

    #[test]
    fn no_snapshot_means_no_changes() {
        let record = ali();
        let snapshots = SnapshotMap::new();
        let row = overlay_row(&record, &snapshots);
        assert!(row.live.is_none());
        assert!(!row.has_changes());
    }

    #[test]
    fn identical_snapshot_means_no_changes() {
        let record = ali();
        let mut snapshots = SnapshotMap::new();
        snapshots.insert(
            ExternalId(10),
            LiveSnapshot {
                team: "Red".into(),
                age: 20,
                market_value: 1_000_000,
            },
        );
        assert!(!overlay_row(&record, &snapshots).has_changes());
    }

    #[test]
    fn changes_follow_the_current_snapshot() {
        let record = ali();
        let mut snapshots = SnapshotMap::new();
        snapshots.insert(
            ExternalId(10),
            LiveSnapshot {
                team: "Blue".into(),
                age: 21,
                market_value: 1_000_000,
            },
        );
        let row = overlay_row(&record, &snapshots);
        assert_eq!(row.changes, ChangedFields::TEAM | ChangedFields::AGE);
        assert!(row.team_changed());

        snapshots.insert(
            ExternalId(10),
            LiveSnapshot {
                team: "Red".into(),
                age: 20,
                market_value: 1_500_000,
            },
        );
        let row = overlay_row(&record, &snapshots);
        assert_eq!(row.changes, ChangedFields::MARKET_VALUE);
        assert_eq!(row.value_change, 0.5);
    }
}
