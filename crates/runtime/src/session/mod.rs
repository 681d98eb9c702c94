//! Single-writer session around the view engine.
//!
//! The session owns the last-known-good collection, the snapshot overlay and
//! the view state. Collaborator calls are awaited while holding `&mut self`,
//! except snapshot lookups, which are split into [`Session::begin_snapshot_fetch`]
//! and [`Session::apply_snapshots`] so callers can keep several requests in
//! flight and deliver responses in any order.

mod builder;
mod overlay;

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use scout_core::{
    DerivedView, ExternalId, FilterInputError, PlayerDraft, PlayerRecord, RecordId, ScoutError,
    SnapshotMap, ViewAction, ViewState, available_teams, derive_view,
};

pub use builder::{SessionBuilder, SessionConfig};

use self::overlay::SnapshotOverlay;
use crate::api::{Result, RuntimeError};
use crate::events::{EventBus, MergeReport, Operation, SessionEvent};
use crate::repository::{RecordStore, RepositoryError, SnapshotBatch, SnapshotService};

/// A snapshot lookup that has been issued but not yet merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRequest {
    /// Issue order; later requests win per id.
    pub generation: u64,
    /// Distinct external ids of the collection at issue time, ascending.
    pub ids: Vec<ExternalId>,
}

pub struct Session {
    records: Arc<dyn RecordStore>,
    snapshots: Arc<dyn SnapshotService>,
    collection: Vec<PlayerRecord>,
    overlay: SnapshotOverlay,
    view: ViewState,
    events: EventBus,
    next_generation: u64,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub fn collection(&self) -> &[PlayerRecord] {
        &self.collection
    }

    pub fn snapshots(&self) -> &SnapshotMap {
        self.overlay.snapshots()
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Teams offered by the team filter.
    pub fn teams(&self) -> Vec<String> {
        available_teams(&self.collection)
    }

    /// Reloads the collection from the record store.
    ///
    /// On failure the previous collection is kept and the error is returned.
    pub async fn refresh(&mut self) -> Result<()> {
        let records = self.records.list_records().await.inspect_err(|err| {
            tracing::warn!(error = %err, "record store unavailable, keeping last-known-good collection");
        })?;
        self.replace_collection(records);
        Ok(())
    }

    /// Replaces the collection wholesale and prunes snapshots of departed ids.
    pub fn replace_collection(&mut self, records: Vec<PlayerRecord>) {
        self.collection = records;
        let known = self.known_ids();
        self.overlay.retain(&known);

        tracing::debug!(records = self.collection.len(), "collection replaced");
        self.events.publish(SessionEvent::CollectionReplaced {
            records: self.collection.len(),
        });
    }

    /// Issues a new snapshot request for every id in the current collection.
    pub fn begin_snapshot_fetch(&mut self) -> SnapshotRequest {
        let generation = self.next_generation;
        self.next_generation += 1;

        let ids: BTreeSet<ExternalId> = self
            .collection
            .iter()
            .map(|record| record.external_id)
            .collect();

        SnapshotRequest {
            generation,
            ids: ids.into_iter().collect(),
        }
    }

    /// Merges the response to `request`.
    ///
    /// Ids no longer in the collection are dropped, so responses that arrive
    /// after a refresh cannot resurrect removed players.
    pub fn apply_snapshots(&mut self, request: &SnapshotRequest, batch: SnapshotBatch) -> MergeReport {
        let known = self.known_ids();
        let report = self.overlay.merge(request.generation, batch, &known);

        tracing::debug!(
            generation = report.generation,
            applied = report.applied,
            discarded = report.discarded,
            superseded = report.superseded,
            missing = report.missing,
            "snapshots merged"
        );
        self.events.publish(SessionEvent::SnapshotsMerged(report));
        report
    }

    /// Issues a request, awaits the service and merges the response.
    ///
    /// A failed lookup leaves the overlay untouched.
    pub async fn fetch_snapshots(&mut self) -> Result<MergeReport> {
        let request = self.begin_snapshot_fetch();
        if request.ids.is_empty() {
            return Ok(MergeReport {
                generation: request.generation,
                ..MergeReport::default()
            });
        }

        let batch = self
            .snapshots
            .get_snapshots(&request.ids)
            .await
            .inspect_err(|err| {
                tracing::warn!(error = %err, generation = request.generation, "snapshot lookup failed");
            })?;
        Ok(self.apply_snapshots(&request, batch))
    }

    /// Adds a player.
    ///
    /// The record appears immediately under a provisional id and is rolled
    /// back if the store rejects it. On success the collection is reloaded
    /// so the store-assigned id replaces the provisional one.
    pub async fn add_player(&mut self, draft: PlayerDraft) -> Result<()> {
        draft.validate()?;

        let provisional = self
            .collection
            .iter()
            .map(|record| record.record_id.0)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .map(RecordId)
            .ok_or(RepositoryError::IdsExhausted)?;
        self.collection.push(
            draft
                .clone()
                .into_record(provisional, Some(chrono::Utc::now().to_rfc3339())),
        );

        if let Err(err) = self.records.create_record(draft).await {
            self.collection.retain(|record| record.record_id != provisional);
            self.rollback(Operation::Create, &err);
            return Err(err.into());
        }

        self.refresh_after_write().await;
        Ok(())
    }

    /// Removes a player, restoring it in place if the store refuses.
    pub async fn remove_player(&mut self, record_id: RecordId) -> Result<()> {
        let position = self
            .collection
            .iter()
            .position(|record| record.record_id == record_id)
            .ok_or(RuntimeError::UnknownRecord(record_id))?;
        let removed = self.collection.remove(position);

        if let Err(err) = self.records.delete_record(record_id).await {
            self.collection.insert(position, removed);
            self.rollback(Operation::Delete, &err);
            return Err(err.into());
        }

        self.refresh_after_write().await;
        Ok(())
    }

    /// Applies a view edit and returns the inputs that were ignored.
    pub fn dispatch(&mut self, action: ViewAction) -> Vec<FilterInputError> {
        let transition = self.view.apply(action);
        for rejected in &transition.rejected {
            tracing::warn!(
                code = rejected.error_code(),
                severity = rejected.severity().as_str(),
                "{rejected}"
            );
        }
        self.view = transition.state;
        transition.rejected
    }

    /// Derives the current page.
    ///
    /// A stale page number is clamped and the clamp is written back into the
    /// view state.
    pub fn view(&mut self) -> DerivedView<'_> {
        let derived = derive_view(&self.collection, self.overlay.snapshots(), &self.view);

        if derived.page_clamped {
            let requested = self.view.page.page_number;
            self.view.page = derived.page;
            tracing::debug!(requested, clamped = derived.page.page_number, "page clamped");
            self.events.publish(SessionEvent::PageClamped {
                requested,
                clamped: derived.page.page_number,
            });
        }

        derived
    }

    fn known_ids(&self) -> HashSet<ExternalId> {
        self.collection
            .iter()
            .map(|record| record.external_id)
            .collect()
    }

    fn rollback(&self, operation: Operation, err: &RepositoryError) {
        tracing::warn!(?operation, error = %err, "store rejected change, rolled back");
        self.events.publish(SessionEvent::OptimisticRollback {
            operation,
            reason: err.to_string(),
        });
    }

    async fn refresh_after_write(&mut self) {
        if let Err(err) = self.refresh().await {
            tracing::warn!(error = %err, "reload after write failed, keeping optimistic collection");
        }
    }
}
