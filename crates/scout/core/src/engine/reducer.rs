//! View state transitions.
//!
//! [`ViewState::apply`] is the only way view state changes. It never fails:
//! malformed input keeps the prior value and is reported in
//! [`Transition::rejected`]. Any edit that changes which rows are selected
//! moves the view back to the first page; sort edits keep the page.

use crate::error::{FilterInputError, RangeEdge, RangeField};
use crate::state::{ClosedRange, FilterState, SortDirection, SortKey, ViewState};

/// A single edit of the view state.
///
/// Range edges arrive as `f64` so that NaN from an unparsable input field can
/// be told apart from a real bound. `f64::INFINITY` as the market value upper
/// edge means "no upper limit".
#[derive(Clone, Debug, PartialEq)]
pub enum ViewAction {
    SetSearchQuery(String),
    SetTeamFilter(String),
    SetAgeRange { min: f64, max: f64 },
    SetMarketValueRange { min: f64, max: f64 },
    SetOnlyChangedTeam(bool),
    SetSortKey(SortKey),
    SetSortDirection(SortDirection),
    ToggleSortDirection,
    SetPage(usize),
    SetPageSize(usize),
    /// Back to default filters and the first page; page size is kept.
    ResetFilters,
}

/// Outcome of [`ViewState::apply`].
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub state: ViewState,
    /// Edits that were ignored, at most one per range edge.
    pub rejected: Vec<FilterInputError>,
}

impl Transition {
    fn accepted(state: ViewState) -> Self {
        Self {
            state,
            rejected: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Parses a range edge typed by the user. Unparsable text becomes NaN.
///
/// Accepts `inf`, `infinity` and `∞` for an open upper bound.
pub fn parse_range_edge(text: &str) -> f64 {
    let text = text.trim();
    if text == "∞" {
        return f64::INFINITY;
    }
    let cleaned: String = text.chars().filter(|c| *c != '_' && *c != ',').collect();
    cleaned.parse::<f64>().unwrap_or(f64::NAN)
}

impl ViewState {
    pub fn apply(&self, action: ViewAction) -> Transition {
        let mut next = self.clone();
        let mut rejected = Vec::new();

        match action {
            ViewAction::SetSearchQuery(query) => next.filter.search_query = query,
            ViewAction::SetTeamFilter(team) => next.filter.team_filter = team,
            ViewAction::SetAgeRange { min, max } => {
                next.filter.age_range = apply_range(
                    next.filter.age_range,
                    RangeField::Age,
                    min,
                    max,
                    |edge| edge as u32,
                    &mut rejected,
                );
            }
            ViewAction::SetMarketValueRange { min, max } => {
                next.filter.market_value_range = apply_range(
                    next.filter.market_value_range,
                    RangeField::MarketValue,
                    min,
                    max,
                    |edge| edge as u64,
                    &mut rejected,
                );
            }
            ViewAction::SetOnlyChangedTeam(only) => next.filter.only_changed_team = only,
            ViewAction::SetSortKey(key) => next.filter.sort_key = key,
            ViewAction::SetSortDirection(direction) => next.filter.sort_direction = direction,
            ViewAction::ToggleSortDirection => {
                next.filter.sort_direction = next.filter.sort_direction.toggled();
            }
            ViewAction::SetPage(number) => {
                if number == 0 {
                    rejected.push(FilterInputError::ZeroPageNumber);
                } else {
                    next.page.page_number = number;
                }
                return Transition { state: next, rejected };
            }
            ViewAction::SetPageSize(size) => {
                if size == 0 {
                    rejected.push(FilterInputError::ZeroPageSize);
                } else if size != next.page.page_size {
                    next.page.page_size = size;
                    next.page = next.page.first();
                }
                return Transition { state: next, rejected };
            }
            ViewAction::ResetFilters => {
                next.filter = FilterState::default();
                next.page = next.page.first();
                return Transition::accepted(next);
            }
        }

        if !next.filter.same_selection(&self.filter) {
            next.page = next.page.first();
        }
        Transition {
            state: next,
            rejected,
        }
    }
}

/// Applies each finite-or-infinite edge; NaN keeps the prior edge.
///
/// Conversion saturates: negative edges become 0 and `+∞` becomes the
/// type's maximum.
fn apply_range<T: Copy>(
    current: ClosedRange<T>,
    field: RangeField,
    min: f64,
    max: f64,
    convert: impl Fn(f64) -> T,
    rejected: &mut Vec<FilterInputError>,
) -> ClosedRange<T> {
    let mut edge = |value: f64, prior: T, which: RangeEdge| {
        if value.is_nan() {
            rejected.push(FilterInputError::NonNumericEdge { field, edge: which });
            prior
        } else {
            convert(value.trunc())
        }
    };
    ClosedRange {
        min: edge(min, current.min, RangeEdge::Min),
        max: edge(max, current.max, RangeEdge::Max),
    }
}
