use std::sync::Arc;

use scout_core::{ViewConfig, ViewState};

use super::{Session, overlay::SnapshotOverlay};
use crate::api::{Result, RuntimeError};
use crate::events::EventBus;
use crate::repository::{RecordStore, SnapshotService};

/// Session configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub view: ViewConfig,
    /// Per-topic event channel capacity.
    pub event_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            view: ViewConfig::default(),
            event_capacity: 64,
        }
    }
}

/// Builder for [`Session`]. Both collaborators are required.
pub struct SessionBuilder {
    config: SessionConfig,
    records: Option<Arc<dyn RecordStore>>,
    snapshots: Option<Arc<dyn SnapshotService>>,
    view: Option<ViewState>,
}

impl SessionBuilder {
    pub(super) fn new() -> Self {
        Self {
            config: SessionConfig::default(),
            records: None,
            snapshots: None,
            view: None,
        }
    }

    /// Override session configuration
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn record_store(mut self, store: impl RecordStore + 'static) -> Self {
        self.records = Some(Arc::new(store));
        self
    }

    /// Share a record store that is also used elsewhere.
    pub fn shared_record_store(mut self, store: Arc<dyn RecordStore>) -> Self {
        self.records = Some(store);
        self
    }

    pub fn snapshot_service(mut self, service: impl SnapshotService + 'static) -> Self {
        self.snapshots = Some(Arc::new(service));
        self
    }

    pub fn shared_snapshot_service(mut self, service: Arc<dyn SnapshotService>) -> Self {
        self.snapshots = Some(service);
        self
    }

    /// Start from a given view state instead of the configured defaults.
    pub fn initial_view(mut self, view: ViewState) -> Self {
        self.view = Some(view);
        self
    }

    /// Build an empty session. Call [`Session::refresh`] to load the collection.
    pub fn build(self) -> Result<Session> {
        let records = self
            .records
            .ok_or(RuntimeError::MissingCollaborator("record store"))?;
        let snapshots = self
            .snapshots
            .ok_or(RuntimeError::MissingCollaborator("snapshot service"))?;
        let view = self
            .view
            .unwrap_or_else(|| ViewState::from_config(&self.config.view));

        Ok(Session {
            records,
            snapshots,
            collection: Vec::new(),
            overlay: SnapshotOverlay::default(),
            view,
            events: EventBus::with_capacity(self.config.event_capacity),
            next_generation: 1,
        })
    }
}
