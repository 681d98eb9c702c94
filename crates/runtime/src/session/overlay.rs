//! Live snapshot overlay with per-id last-writer-wins merging.

use std::collections::{HashMap, HashSet};

use scout_core::{ExternalId, SnapshotMap};

use crate::events::MergeReport;
use crate::repository::SnapshotBatch;

/// Snapshot map plus, for each id, the generation of the request that wrote it.
///
/// Generations increase with request issue order. A response never
/// overwrites an entry written by a newer request, so the outcome does not
/// depend on the order responses arrive in.
#[derive(Debug, Default)]
pub(crate) struct SnapshotOverlay {
    snapshots: SnapshotMap,
    written_by: HashMap<ExternalId, u64>,
}

impl SnapshotOverlay {
    pub(crate) fn snapshots(&self) -> &SnapshotMap {
        &self.snapshots
    }

    /// Merges one response.
    ///
    /// Ids outside `known` are discarded. `None` entries leave any existing
    /// snapshot in place: a miss means "no data yet", not "data removed".
    pub(crate) fn merge(
        &mut self,
        generation: u64,
        batch: SnapshotBatch,
        known: &HashSet<ExternalId>,
    ) -> MergeReport {
        let mut report = MergeReport {
            generation,
            ..MergeReport::default()
        };

        for (id, snapshot) in batch {
            if !known.contains(&id) {
                report.discarded += 1;
                continue;
            }
            let Some(snapshot) = snapshot else {
                report.missing += 1;
                continue;
            };
            if self
                .written_by
                .get(&id)
                .is_some_and(|&written| written > generation)
            {
                report.superseded += 1;
                continue;
            }
            self.snapshots.insert(id, snapshot);
            self.written_by.insert(id, generation);
            report.applied += 1;
        }

        report
    }

    /// Drops entries for ids that left the collection.
    pub(crate) fn retain(&mut self, known: &HashSet<ExternalId>) {
        self.snapshots.retain(|id, _| known.contains(id));
        self.written_by.retain(|id, _| known.contains(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_core::LiveSnapshot;

    fn live(team: &str) -> Option<LiveSnapshot> {
        Some(LiveSnapshot {
            team: team.into(),
            age: 20,
            market_value: 1,
        })
    }

    fn known(ids: &[u64]) -> HashSet<ExternalId> {
        ids.iter().copied().map(ExternalId).collect()
    }

    #[test]
    fn older_response_does_not_overwrite_newer() {
        let mut overlay = SnapshotOverlay::default();
        let ids = known(&[1]);

        let newer = overlay.merge(2, [(ExternalId(1), live("Blue"))].into(), &ids);
        assert_eq!(newer.applied, 1);

        let older = overlay.merge(1, [(ExternalId(1), live("Red"))].into(), &ids);
        assert_eq!(older.superseded, 1);
        assert_eq!(overlay.snapshots()[&ExternalId(1)].team, "Blue");
    }

    #[test]
    fn older_response_still_fills_untouched_ids() {
        let mut overlay = SnapshotOverlay::default();
        let ids = known(&[1, 2]);

        overlay.merge(2, [(ExternalId(1), live("Blue"))].into(), &ids);
        let older = overlay.merge(
            1,
            [(ExternalId(1), live("Red")), (ExternalId(2), live("Green"))].into(),
            &ids,
        );
        assert_eq!(older.applied, 1);
        assert_eq!(older.superseded, 1);
        assert_eq!(overlay.snapshots()[&ExternalId(2)].team, "Green");
    }

    #[test]
    fn unknown_ids_and_misses_are_not_errors() {
        let mut overlay = SnapshotOverlay::default();
        let report = overlay.merge(
            1,
            [(ExternalId(9), live("Blue")), (ExternalId(1), None)].into(),
            &known(&[1]),
        );
        assert_eq!(report.discarded, 1);
        assert_eq!(report.missing, 1);
        assert!(overlay.snapshots().is_empty());
    }

    #[test]
    fn miss_keeps_existing_snapshot() {
        let mut overlay = SnapshotOverlay::default();
        let ids = known(&[1]);
        overlay.merge(1, [(ExternalId(1), live("Blue"))].into(), &ids);
        overlay.merge(2, [(ExternalId(1), None)].into(), &ids);
        assert_eq!(overlay.snapshots()[&ExternalId(1)].team, "Blue");
    }

    #[test]
    fn retain_prunes_departed_ids() {
        let mut overlay = SnapshotOverlay::default();
        overlay.merge(
            1,
            [(ExternalId(1), live("Blue")), (ExternalId(2), live("Red"))].into(),
            &known(&[1, 2]),
        );
        overlay.retain(&known(&[2]));
        assert_eq!(overlay.snapshots().len(), 1);
        assert!(overlay.snapshots().contains_key(&ExternalId(2)));
    }
}
