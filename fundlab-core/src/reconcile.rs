//! Reconciliation — collapse multi-row feed history to one row per fund.
//!
//! The TDCC feeds return several historical rows for the same fund; only
//! the most recent one matters downstream.

use crate::fetch::RawRow;
use std::collections::HashMap;

/// Keep only the latest-dated row per primary identifier.
///
/// Rows with an empty identifier are dropped silently. Dates compare as
/// plain strings; the feeds publish zero-padded ISO dates, so lexical
/// order is chronological order. A strictly greater date replaces the
/// kept row, so the first-seen row wins a tie. Output preserves
/// first-seen key order.
pub fn latest_by_key(rows: Vec<RawRow>, key_column: &str, date_column: &str) -> Vec<RawRow> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut latest: Vec<RawRow> = Vec::new();

    for row in rows {
        let key = row.field(key_column);
        if key.is_empty() {
            continue;
        }
        match slots.get(key) {
            Some(&i) => {
                if row.field(date_column) > latest[i].field(date_column) {
                    latest[i] = row;
                }
            }
            None => {
                slots.insert(key.to_string(), latest.len());
                latest.push(row);
            }
        }
    }

    latest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs.iter().copied().collect()
    }

    #[test]
    fn keeps_latest_row_per_identifier() {
        let rows = vec![
            row(&[("基金統編", "D1"), ("日期", "2024-01-01"), ("基金淨值", "10.00")]),
            row(&[("基金統編", "D1"), ("日期", "2024-01-02"), ("基金淨值", "10.50")]),
        ];
        let latest = latest_by_key(rows, "基金統編", "日期");
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].field("日期"), "2024-01-02");
        assert_eq!(latest[0].field("基金淨值"), "10.50");
    }

    #[test]
    fn earlier_row_never_displaces_later() {
        let rows = vec![
            row(&[("基金統編", "D1"), ("日期", "2024-03-15")]),
            row(&[("基金統編", "D1"), ("日期", "2024-02-01")]),
        ];
        let latest = latest_by_key(rows, "基金統編", "日期");
        assert_eq!(latest[0].field("日期"), "2024-03-15");
    }

    #[test]
    fn drops_rows_missing_the_identifier() {
        let rows = vec![
            row(&[("基金統編", "  "), ("日期", "2024-01-01")]),
            row(&[("日期", "2024-01-02")]),
            row(&[("基金統編", "D2"), ("日期", "2024-01-03")]),
        ];
        let latest = latest_by_key(rows, "基金統編", "日期");
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].field("基金統編"), "D2");
    }

    #[test]
    fn equal_dates_keep_the_first_seen_row() {
        let rows = vec![
            row(&[("基金統編", "D1"), ("日期", "2024-01-01"), ("基金淨值", "first")]),
            row(&[("基金統編", "D1"), ("日期", "2024-01-01"), ("基金淨值", "second")]),
        ];
        let latest = latest_by_key(rows, "基金統編", "日期");
        assert_eq!(latest[0].field("基金淨值"), "first");
    }

    #[test]
    fn preserves_first_seen_key_order() {
        let rows = vec![
            row(&[("基金統編", "B"), ("日期", "2024-01-01")]),
            row(&[("基金統編", "A"), ("日期", "2024-01-01")]),
            row(&[("基金統編", "B"), ("日期", "2024-01-05")]),
        ];
        let latest = latest_by_key(rows, "基金統編", "日期");
        let keys: Vec<&str> = latest.iter().map(|r| r.field("基金統編")).collect();
        assert_eq!(keys, vec!["B", "A"]);
    }
}
