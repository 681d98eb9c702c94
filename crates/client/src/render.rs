//! Text and JSON rendering of a derived page.

use std::fmt::Write as _;

use scout_core::{ChangedFields, DerivedView, OverlayRow};
use serde_json::{Value, json};

/// Output format for command results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned table for terminals
    #[default]
    Table,
    /// One JSON document on stdout
    Json,
}

const HEADERS: [&str; 7] = ["", "ID", "EXT", "NAME", "TEAM", "AGE", "VALUE"];

/// Renders a page as an aligned table followed by a page footer.
///
/// Rows with live changes are marked with `*`; changed fields show
/// `stored -> live`.
pub fn table(view: &DerivedView<'_>) -> String {
    let rows: Vec<[String; 7]> = view.rows.iter().map(table_row).collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(String::from), &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }

    let _ = write!(
        out,
        "page {}/{} ({} players)",
        view.page.page_number, view.total_pages, view.filtered_count
    );
    if view.page_clamped {
        out.push_str(" [page adjusted]");
    }
    out.push('\n');
    out
}

fn table_row(row: &OverlayRow<'_>) -> [String; 7] {
    let record = row.record;
    let marker = if row.has_changes() { "*" } else { "" };

    let team = match row.live {
        Some(live) if row.changes.contains(ChangedFields::TEAM) => {
            format!("{} -> {}", record.team, live.team)
        }
        _ => record.team.clone(),
    };
    let age = match row.live {
        Some(live) if row.changes.contains(ChangedFields::AGE) => {
            format!("{} -> {}", record.age, live.age)
        }
        _ => record.age.to_string(),
    };
    let value = match row.live {
        Some(live) if row.changes.contains(ChangedFields::MARKET_VALUE) => format!(
            "{} -> {} ({:+.1}%)",
            record.market_value,
            live.market_value,
            row.value_change * 100.0
        ),
        _ => record.market_value.to_string(),
    };

    [
        marker.to_string(),
        record.record_id.to_string(),
        record.external_id.to_string(),
        record.name.clone(),
        team,
        age,
        value,
    ]
}

fn push_line(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Renders a page as a JSON document.
pub fn json(view: &DerivedView<'_>) -> Value {
    let rows: Vec<Value> = view
        .rows
        .iter()
        .map(|row| {
            json!({
                "record": row.record,
                "live": row.live,
                "changed": row
                    .changes
                    .iter_names()
                    .map(|(name, _)| name.to_lowercase())
                    .collect::<Vec<_>>(),
                "value_change": row.value_change,
            })
        })
        .collect();

    json!({
        "page": view.page.page_number,
        "page_size": view.page.page_size,
        "total_pages": view.total_pages,
        "filtered_count": view.filtered_count,
        "page_clamped": view.page_clamped,
        "rows": rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_core::{
        ExternalId, LiveSnapshot, PlayerRecord, RecordId, SnapshotMap, ViewState, derive_view,
    };

    fn fixture() -> (Vec<PlayerRecord>, SnapshotMap) {
        let records = vec![
            PlayerRecord {
                record_id: RecordId(1),
                external_id: ExternalId(10),
                name: "Ali".into(),
                team: "Red".into(),
                age: 20,
                market_value: 1_000,
                created_at: None,
            },
            PlayerRecord {
                record_id: RecordId(2),
                external_id: ExternalId(20),
                name: "Bea".into(),
                team: "Green".into(),
                age: 22,
                market_value: 2_000,
                created_at: None,
            },
        ];
        let mut snapshots = SnapshotMap::new();
        snapshots.insert(
            ExternalId(10),
            LiveSnapshot {
                team: "Blue".into(),
                age: 20,
                market_value: 1_500,
            },
        );
        (records, snapshots)
    }

    #[test]
    fn table_marks_changed_rows() {
        let (records, snapshots) = fixture();
        let view = derive_view(&records, &snapshots, &ViewState::default());

        let text = table(&view);
        let ali = text
            .lines()
            .find(|line| line.contains("Ali"))
            .expect("Ali row");
        assert!(ali.starts_with('*'));
        assert!(ali.contains("Red -> Blue"));
        assert!(ali.contains("+50.0%"));

        let bea = text
            .lines()
            .find(|line| line.contains("Bea"))
            .expect("Bea row");
        assert!(!bea.starts_with('*'));
        assert!(text.ends_with("page 1/1 (2 players)\n"));
    }

    #[test]
    fn json_lists_changed_fields() {
        let (records, snapshots) = fixture();
        let view = derive_view(&records, &snapshots, &ViewState::default());

        let doc = json(&view);
        assert_eq!(doc["filtered_count"], 2);
        let ali = doc["rows"]
            .as_array()
            .and_then(|rows| rows.iter().find(|row| row["record"]["name"] == "Ali"))
            .expect("Ali row");
        assert_eq!(ali["changed"], json!(["team", "market_value"]));
        assert_eq!(ali["live"]["team"], "Blue");
    }
}
