//! Pure view engine for the player tracking product.
//!
//! `scout-core` defines the stored record and live snapshot types, the
//! filter/page view state, and the derivations that turn a collection plus a
//! snapshot overlay into one page of rows. Nothing in this crate performs I/O;
//! every derivation is a pure function of its inputs, and view state changes
//! flow through [`ViewState::apply`], which returns a new value.
pub mod config;
pub mod engine;
pub mod error;
pub mod state;

pub use config::ViewConfig;
pub use engine::{
    ChangedFields, DerivedView, OverlayRow, PageSlice, SortValue, Transition, ViewAction,
    available_teams, derive_view, filter_records, has_team_change, matches_filter, matches_query,
    matches_team, ordered_records, overlay_row, paginate, parse_range_edge, sort_records,
    sort_value, transfer_records, value_change, within_age, within_market_value,
};
pub use error::{DraftError, ErrorSeverity, FilterInputError, RangeEdge, RangeField, ScoutError};
pub use state::{
    ClosedRange, ExternalId, FilterState, LiveSnapshot, PageState, PlayerDraft, PlayerRecord,
    RecordId, SnapshotMap, SortDirection, SortKey, ViewState,
};
