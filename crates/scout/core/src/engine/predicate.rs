//! Filter predicates and their composition.
//!
//! Every predicate is a pure function of (record, snapshots, filter). The
//! composed filter is a conjunction evaluated in a fixed order: text search,
//! team, age range, market value range. Transfer mode is a separate entry
//! point, [`transfer_records`], and is not combined with the others.

use std::collections::BTreeMap;

use crate::state::{ClosedRange, FilterState, PlayerRecord, SnapshotMap};

/// Case-insensitive substring match on name or team.
///
/// `query_lower` must already be lower-cased; an empty query matches all.
pub fn matches_query(record: &PlayerRecord, query_lower: &str) -> bool {
    query_lower.is_empty()
        || record.name.to_lowercase().contains(query_lower)
        || record.team.to_lowercase().contains(query_lower)
}

/// Case-insensitive team equality. `None` matches all.
pub fn matches_team(record: &PlayerRecord, team: Option<&str>) -> bool {
    match team {
        None => true,
        Some(team) => record.team.to_lowercase() == team.to_lowercase(),
    }
}

pub fn within_age(record: &PlayerRecord, range: &ClosedRange<u32>) -> bool {
    range.contains(record.age)
}

pub fn within_market_value(record: &PlayerRecord, range: &ClosedRange<u64>) -> bool {
    range.contains(record.market_value)
}

/// Live snapshot exists and reports a different team than the stored one.
pub fn has_team_change(record: &PlayerRecord, snapshots: &SnapshotMap) -> bool {
    snapshots
        .get(&record.external_id)
        .is_some_and(|live| live.team != record.team)
}

/// Conjunction of the search, team, age and market value predicates.
///
/// Ignores `only_changed_team`; see [`filter_records`] for the mode switch.
pub fn matches_filter(record: &PlayerRecord, filter: &FilterState) -> bool {
    let query = filter.search_query.to_lowercase();
    Matcher::new(filter, &query).matches(record)
}

/// Records passing the filter, in input order.
///
/// In transfer mode this returns [`transfer_records`] instead, which is
/// already ordered by record id descending.
pub fn filter_records<'a>(
    records: &'a [PlayerRecord],
    snapshots: &SnapshotMap,
    filter: &FilterState,
) -> Vec<&'a PlayerRecord> {
    if filter.only_changed_team {
        return transfer_records(records, snapshots);
    }

    let query = filter.search_query.to_lowercase();
    let matcher = Matcher::new(filter, &query);
    records
        .iter()
        .filter(|record| matcher.matches(record))
        .collect()
}

/// Records whose live team differs from the stored team, newest first.
pub fn transfer_records<'a>(
    records: &'a [PlayerRecord],
    snapshots: &SnapshotMap,
) -> Vec<&'a PlayerRecord> {
    let mut transfers: Vec<_> = records
        .iter()
        .filter(|record| has_team_change(record, snapshots))
        .collect();
    transfers.sort_by(|a, b| b.record_id.cmp(&a.record_id));
    transfers
}

/// Distinct team names for a team picker, sorted case-insensitively.
///
/// Teams differing only in case collapse to the first spelling seen.
pub fn available_teams(records: &[PlayerRecord]) -> Vec<String> {
    let mut teams: BTreeMap<String, String> = BTreeMap::new();
    for record in records {
        let team = record.team.trim();
        if team.is_empty() {
            continue;
        }
        teams
            .entry(team.to_lowercase())
            .or_insert_with(|| team.to_string());
    }
    teams.into_values().collect()
}

/// Filter with its per-call derived values computed once.
struct Matcher<'f> {
    query: &'f str,
    team: Option<String>,
    ages: &'f ClosedRange<u32>,
    values: &'f ClosedRange<u64>,
}

impl<'f> Matcher<'f> {
    fn new(filter: &'f FilterState, query_lower: &'f str) -> Self {
        Self {
            query: query_lower,
            team: filter.team_restriction().map(str::to_lowercase),
            ages: &filter.age_range,
            values: &filter.market_value_range,
        }
    }

    fn matches(&self, record: &PlayerRecord) -> bool {
        matches_query(record, self.query)
            && matches_team(record, self.team.as_deref())
            && within_age(record, self.ages)
            && within_market_value(record, self.values)
    }
}
