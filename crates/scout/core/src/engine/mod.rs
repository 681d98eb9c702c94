//! Derivation pipeline: filter, sort, paginate, overlay.
//!
//! [`derive_view`] is the single entry point presentation layers use. It
//! borrows the collection and snapshot map and returns one page of
//! [`OverlayRow`]s together with the clamped page state, so callers can write
//! the clamp back into their [`ViewState`].

mod overlay;
mod paginate;
mod predicate;
mod reducer;
mod sort;

pub use overlay::{ChangedFields, OverlayRow, overlay_row};
pub use paginate::{PageSlice, paginate};
pub use predicate::{
    available_teams, filter_records, has_team_change, matches_filter, matches_query,
    matches_team, transfer_records, within_age, within_market_value,
};
pub use reducer::{Transition, ViewAction, parse_range_edge};
pub use sort::{SortValue, sort_records, sort_value, value_change};

use crate::state::{PageState, PlayerRecord, SnapshotMap, ViewState};

/// One derived page of the view.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedView<'a> {
    pub rows: Vec<OverlayRow<'a>>,
    /// Page actually shown; see [`DerivedView::page_clamped`].
    pub page: PageState,
    pub total_pages: usize,
    /// Rows passing the filter, across all pages.
    pub filtered_count: usize,
    pub page_clamped: bool,
}

/// Filtered and ordered records, before pagination.
///
/// Transfer mode ignores the sort key and keeps the record id descending
/// order produced by [`transfer_records`].
pub fn ordered_records<'a>(
    records: &'a [PlayerRecord],
    snapshots: &SnapshotMap,
    state: &ViewState,
) -> Vec<&'a PlayerRecord> {
    let mut rows = filter_records(records, snapshots, &state.filter);
    if !state.filter.only_changed_team {
        sort_records(
            &mut rows,
            snapshots,
            state.filter.sort_key,
            state.filter.sort_direction,
        );
    }
    rows
}

pub fn derive_view<'a>(
    records: &'a [PlayerRecord],
    snapshots: &'a SnapshotMap,
    state: &ViewState,
) -> DerivedView<'a> {
    let ordered = ordered_records(records, snapshots, state);
    let slice = paginate(&ordered, &state.page);

    DerivedView {
        rows: slice
            .items
            .iter()
            .map(|record| overlay_row(*record, snapshots))
            .collect(),
        page: slice.page,
        total_pages: slice.total_pages,
        filtered_count: slice.total_items,
        page_clamped: slice.was_clamped(&state.page),
    }
}
