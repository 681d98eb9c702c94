//! Sort-key derivation and the stable row comparator.

use core::cmp::Ordering;

use crate::state::{LiveSnapshot, PlayerRecord, SnapshotMap, SortDirection, SortKey};

/// Comparable value derived from a record for one [`SortKey`].
#[derive(Clone, Debug, PartialEq)]
pub enum SortValue {
    Text(String),
    /// Exact integer keys: ids, age, market value, timestamps.
    Integer(i128),
    /// Value change magnitude.
    Number(f64),
}

impl SortValue {
    /// `(a < b) ? Less : (a > b) ? Greater : Equal`.
    ///
    /// Values of different kinds, or incomparable numbers, compare equal so
    /// the stable sort keeps their input order.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        }
    }
}

/// Relative market value change from the stored record to its live snapshot.
///
/// Exactly `0.0` when there is no snapshot or the stored value is zero.
pub fn value_change(record: &PlayerRecord, live: Option<&LiveSnapshot>) -> f64 {
    match live {
        Some(live) if record.market_value > 0 => {
            let baseline = record.market_value as f64;
            (live.market_value as f64 - baseline) / baseline
        }
        _ => 0.0,
    }
}

pub fn sort_value(record: &PlayerRecord, snapshots: &SnapshotMap, key: SortKey) -> SortValue {
    match key {
        SortKey::Insertion => SortValue::Integer(i128::from(record.record_id.0)),
        SortKey::Name => SortValue::Text(record.name.to_lowercase()),
        SortKey::Team => SortValue::Text(record.team.to_lowercase()),
        SortKey::Age => SortValue::Integer(i128::from(record.age)),
        SortKey::MarketValue => SortValue::Integer(i128::from(record.market_value)),
        SortKey::CreatedAt => SortValue::Integer(i128::from(record.created_at_millis())),
        SortKey::ValueIncrease => {
            SortValue::Number(value_change(record, snapshots.get(&record.external_id)))
        }
    }
}

/// Sorts in place by `key` and `direction`.
///
/// Keys are derived once per row; the sort is stable, so rows with equal
/// keys keep their input order in both directions.
pub fn sort_records(
    rows: &mut Vec<&PlayerRecord>,
    snapshots: &SnapshotMap,
    key: SortKey,
    direction: SortDirection,
) {
    let mut keyed: Vec<(SortValue, &PlayerRecord)> = rows
        .iter()
        .map(|record| (sort_value(record, snapshots, key), *record))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| direction.apply(a.compare(b)));

    rows.clear();
    rows.extend(keyed.into_iter().map(|(_, record)| record));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ExternalId, RecordId};

    fn record(id: u64, name: &str, value: u64) -> PlayerRecord {
        PlayerRecord {
            record_id: RecordId(id),
            external_id: ExternalId(id + 100),
            name: name.into(),
            team: "Red".into(),
            age: 20,
            market_value: value,
            created_at: None,
        }
    }

    fn live(value: u64) -> LiveSnapshot {
        LiveSnapshot {
            team: "Red".into(),
            age: 20,
            market_value: value,
        }
    }

    #[test]
    fn value_change_zero_baseline_is_zero() {
        let baseline = record(1, "Ali", 0);
        let change = value_change(&baseline, Some(&live(5_000_000)));
        assert_eq!(change, 0.0);
        assert!(change.is_finite());
    }

    #[test]
    fn value_change_without_snapshot_is_zero() {
        assert_eq!(value_change(&record(1, "Ali", 1_000_000), None), 0.0);
    }

    #[test]
    fn value_change_is_relative() {
        let player = record(1, "Ali", 1_000_000);
        assert_eq!(value_change(&player, Some(&live(2_000_000))), 1.0);
        assert_eq!(value_change(&player, Some(&live(500_000))), -0.5);
    }

    #[test]
    fn name_sort_ignores_case() {
        let a = record(1, "bob", 0);
        let b = record(2, "Alice", 0);
        let mut rows = vec![&a, &b];
        sort_records(&mut rows, &SnapshotMap::new(), SortKey::Name, SortDirection::Asc);
        assert_eq!(rows[0].name, "Alice");
    }

    #[test]
    fn equal_keys_keep_input_order_in_both_directions() {
        let a = record(3, "Same", 0);
        let b = record(1, "Same", 0);
        let c = record(2, "Same", 0);

        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let mut rows = vec![&a, &b, &c];
            sort_records(&mut rows, &SnapshotMap::new(), SortKey::Name, direction);
            let ids: Vec<_> = rows.iter().map(|r| r.record_id.0).collect();
            assert_eq!(ids, vec![3, 1, 2]);
        }
    }

    #[test]
    fn integer_keys_beyond_f64_precision_stay_distinct() {
        let low = record(1 << 53, "Low", 1 << 53);
        let high = record((1 << 53) + 1, "High", (1 << 53) + 1);
        let snapshots = SnapshotMap::new();

        let mut rows = vec![&low, &high];
        sort_records(&mut rows, &snapshots, SortKey::Insertion, SortDirection::Desc);
        assert_eq!(rows[0].name, "High");

        let mut rows = vec![&low, &high];
        sort_records(&mut rows, &snapshots, SortKey::MarketValue, SortDirection::Desc);
        assert_eq!(rows[0].name, "High");
    }
}
