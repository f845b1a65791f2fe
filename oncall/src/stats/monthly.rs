//! Month listing, month filtering and the monthly trend

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

use super::{round1, SECONDS_PER_HOUR};
use crate::month::{MonthFilter, MonthKey};
use crate::types::{MonthlyStats, OnCallIssue};

/// Months with at least one issue created in them, newest first
pub fn available_months(issues: &[OnCallIssue]) -> Vec<MonthKey> {
    let months: BTreeSet<MonthKey> = issues.iter().filter_map(OnCallIssue::created_month).collect();
    months.into_iter().rev().collect()
}

/// Issues created in the filtered month, or the input itself for `All`
pub fn filter_issues_by_month(issues: &[OnCallIssue], filter: MonthFilter) -> Cow<'_, [OnCallIssue]> {
    match filter {
        MonthFilter::All => Cow::Borrowed(issues),
        MonthFilter::Month(key) => Cow::Owned(
            issues
                .iter()
                .filter(|issue| issue.created_month() == Some(key))
                .cloned()
                .collect(),
        ),
    }
}

/// Issue count and hours per creation month, oldest first
///
/// Issues whose creation month is unknown are left out.
pub fn aggregate_by_month(issues: &[OnCallIssue]) -> Vec<MonthlyStats> {
    let mut months: BTreeMap<MonthKey, (usize, f64)> = BTreeMap::new();

    for issue in issues {
        let Some(month) = issue.created_month() else {
            continue;
        };
        let (count, hours) = months.entry(month).or_default();
        *count += 1;
        *hours += issue.time_spent.unwrap_or(0) as f64 / SECONDS_PER_HOUR;
    }

    months
        .into_iter()
        .map(|(month, (issues, hours))| MonthlyStats {
            month,
            month_display: month.month_name().to_string(),
            issues,
            hours: round1(hours),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::fixtures::issue;

    fn sample() -> Vec<OnCallIssue> {
        vec![
            issue("A-1", "db", "1/3/2026 9:00:00", Some(3600)),
            issue("A-2", "db", "12/30/2025 9:00:00", Some(900)),
            issue("A-3", "net", "bogus", Some(7200)),
            issue("A-4", "net", "1/20/2026 9:00:00", Some(1200)),
            issue("A-5", "net", "10/2/2025 9:00:00", None),
        ]
    }

    #[test]
    fn test_available_months_newest_first() {
        let months: Vec<String> = available_months(&sample())
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(months, vec!["2026-01", "2025-12", "2025-10"]);
    }

    #[test]
    fn test_filter_all_borrows_input() {
        let issues = sample();
        let filtered = filter_issues_by_month(&issues, MonthFilter::All);
        assert!(matches!(filtered, Cow::Borrowed(_)));
        assert_eq!(filtered.len(), issues.len());
    }

    #[test]
    fn test_filter_specific_month() {
        let issues = sample();
        let key: MonthKey = "2026-01".parse().unwrap();
        let keys: Vec<String> = filter_issues_by_month(&issues, key.into())
            .iter()
            .map(|i| i.key.clone())
            .collect();
        assert_eq!(keys, vec!["A-1", "A-4"]);
    }

    #[test]
    fn test_aggregate_by_month_skips_unknown() {
        let trend = aggregate_by_month(&sample());
        let months: Vec<String> = trend.iter().map(|m| m.month.to_string()).collect();
        assert_eq!(months, vec!["2025-10", "2025-12", "2026-01"]);

        let january = &trend[2];
        assert_eq!(january.month_display, "January");
        assert_eq!(january.issues, 2);
        assert_eq!(january.hours, 1.3);

        assert_eq!(trend[1].hours, 0.3);
        assert_eq!(trend[0].hours, 0.0);
        let counted: usize = trend.iter().map(|m| m.issues).sum();
        assert_eq!(counted, 4);
    }
}
