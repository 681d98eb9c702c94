//! Records, live snapshots, and the view state the engine derives from.
//!
//! Records and snapshots are owned by the caller and only ever read here.
//! [`ViewState`] is a plain value: edits produce a new value through
//! [`ViewState::apply`].
mod filter;
mod page;
mod record;
mod snapshot;

pub use filter::{ClosedRange, FilterState, SortDirection, SortKey};
pub use page::PageState;
pub use record::{ExternalId, PlayerDraft, PlayerRecord, RecordId};
pub use snapshot::{LiveSnapshot, SnapshotMap};

use crate::config::ViewConfig;

/// Filter and pagination configuration of one view.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewState {
    pub filter: FilterState,
    pub page: PageState,
}

impl ViewState {
    pub fn new(filter: FilterState, page: PageState) -> Self {
        Self { filter, page }
    }

    /// Default filters with the page size taken from `config`.
    pub fn from_config(config: &ViewConfig) -> Self {
        Self {
            filter: FilterState::default(),
            page: PageState::new(1, config.default_page_size),
        }
    }
}
