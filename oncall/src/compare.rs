//! Current versus previous period comparisons

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::stats::OrderedGroups;
use crate::types::LabelStats;

/// A headline number next to its value in the previous period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodComparison {
    pub current: f64,
    pub previous: Option<f64>,
    /// `current - previous`, zero without a previous value
    pub diff: f64,
    /// Relative change in percent, zero when the previous value is missing or zero
    pub percent_change: f64,
}

impl PeriodComparison {
    pub fn new(current: f64, previous: Option<f64>) -> Self {
        let diff = previous.map_or(0.0, |p| current - p);
        let percent_change = match previous {
            Some(p) if p != 0.0 => diff / p * 100.0,
            _ => 0.0,
        };
        Self {
            current,
            previous,
            diff,
            percent_change,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

/// One label's issues and hours across two periods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelComparison {
    pub label: String,
    pub current_issues: usize,
    pub previous_issues: usize,
    pub issues_diff: i64,
    pub issues_percent_change: f64,
    pub current_hours: f64,
    pub previous_hours: f64,
    pub hours_diff: f64,
    pub hours_percent_change: f64,
}

/// Percent change where growth from nothing counts as 100%
fn label_percent_change(current: f64, previous: f64) -> f64 {
    if previous != 0.0 {
        (current - previous) / previous * 100.0
    } else if current > 0.0 {
        100.0
    } else {
        0.0
    }
}

#[derive(Default)]
struct LabelPair<'a> {
    current: Option<&'a LabelStats>,
    previous: Option<&'a LabelStats>,
}

/// Compare per-label stats of two periods
///
/// Labels present on only one side count as zero on the other. Labels that
/// grew come first, biggest growth first; the rest follow with the biggest
/// drop first.
pub fn compare_labels(current: &[LabelStats], previous: &[LabelStats]) -> Vec<LabelComparison> {
    let mut pairs: OrderedGroups<'_, LabelPair<'_>> = OrderedGroups::new();
    for stats in current {
        pairs.entry(&stats.label).current = Some(stats);
    }
    for stats in previous {
        pairs.entry(&stats.label).previous = Some(stats);
    }

    let mut comparisons: Vec<LabelComparison> = pairs
        .into_vec()
        .into_iter()
        .map(|(label, pair)| {
            let current_issues = pair.current.map_or(0, |s| s.count);
            let previous_issues = pair.previous.map_or(0, |s| s.count);
            let current_hours = pair.current.map_or(0.0, |s| s.total_time_hours);
            let previous_hours = pair.previous.map_or(0.0, |s| s.total_time_hours);

            LabelComparison {
                label: label.to_string(),
                current_issues,
                previous_issues,
                issues_diff: current_issues as i64 - previous_issues as i64,
                issues_percent_change: label_percent_change(
                    current_issues as f64,
                    previous_issues as f64,
                ),
                current_hours,
                previous_hours,
                hours_diff: current_hours - previous_hours,
                hours_percent_change: label_percent_change(current_hours, previous_hours),
            }
        })
        .collect();

    comparisons.sort_by(|a, b| match (a.issues_diff > 0, b.issues_diff > 0) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => b.issues_diff.cmp(&a.issues_diff),
        (false, false) => a.issues_diff.cmp(&b.issues_diff),
    });
    comparisons
}

/// "↑ +3 (+50.0%)", "↓ -1.5 (-25.0%)" or "-" when nothing changed
pub fn format_change(diff: f64, percent_change: f64, hours: bool) -> String {
    if diff == 0.0 {
        return "-".to_string();
    }

    let arrow = if diff < 0.0 { "↓" } else { "↑" };
    let sign = if diff > 0.0 { "+" } else { "" };
    let amount = if hours {
        format!("{:.1}", diff)
    } else {
        format!("{}", diff)
    };

    format!("{} {}{} ({}{:.1}%)", arrow, sign, amount, sign, percent_change)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(label: &str, count: usize, hours: f64) -> LabelStats {
        LabelStats {
            label: label.to_string(),
            count,
            percentage: 0.0,
            total_time_seconds: (hours * 3600.0) as u64,
            total_time_hours: hours,
        }
    }

    #[test]
    fn test_period_comparison() {
        let up = PeriodComparison::new(6.0, Some(4.0));
        assert_eq!(up.diff, 2.0);
        assert_eq!(up.percent_change, 50.0);

        let from_zero = PeriodComparison::new(3.0, Some(0.0));
        assert_eq!(from_zero.diff, 3.0);
        assert_eq!(from_zero.percent_change, 0.0);

        let none = PeriodComparison::new(3.0, None);
        assert!(!none.has_previous());
        assert_eq!(none.diff, 0.0);
    }

    #[test]
    fn test_compare_labels_union_and_order() {
        let current = vec![stats("db", 5, 4.0), stats("net", 1, 0.5), stats("ui", 2, 1.0)];
        let previous = vec![stats("db", 2, 2.0), stats("net", 4, 3.0), stats("auth", 1, 1.0)];

        let rows = compare_labels(&current, &previous);
        let order: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(order, vec!["db", "ui", "net", "auth"]);

        let db = &rows[0];
        assert_eq!(db.issues_diff, 3);
        assert_eq!(db.issues_percent_change, 150.0);
        assert_eq!(db.hours_diff, 2.0);

        let ui = &rows[1];
        assert_eq!(ui.previous_issues, 0);
        assert_eq!(ui.issues_percent_change, 100.0);

        let auth = &rows[3];
        assert_eq!(auth.current_issues, 0);
        assert_eq!(auth.issues_diff, -1);
        assert_eq!(auth.issues_percent_change, -100.0);
    }

    #[test]
    fn test_unchanged_labels_sort_after_growth() {
        let current = vec![stats("same", 2, 1.0), stats("up", 3, 1.0)];
        let previous = vec![stats("same", 2, 1.0), stats("up", 1, 1.0)];
        let rows = compare_labels(&current, &previous);
        assert_eq!(rows[0].label, "up");
        assert_eq!(rows[1].label, "same");
        assert_eq!(rows[1].issues_percent_change, 0.0);
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(0.0, 0.0, false), "-");
        assert_eq!(format_change(3.0, 50.0, false), "↑ +3 (+50.0%)");
        assert_eq!(format_change(-1.5, -25.0, true), "↓ -1.5 (-25.0%)");
        assert_eq!(format_change(2.0, 12.5, true), "↑ +2.0 (+12.5%)");
    }
}
