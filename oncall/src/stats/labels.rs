//! Per-label issue counts and time spent

use super::{OrderedGroups, SECONDS_PER_HOUR};
use crate::types::{LabelStats, OnCallIssue};

#[derive(Default)]
struct LabelTotals {
    count: usize,
    total_time_seconds: u64,
}

/// Count and time spent per label, most frequent label first
///
/// Percentages are relative to `issues.len()` and are all zero for an empty
/// slice. Labels with equal counts keep the order they were first seen in.
pub fn aggregate_by_label(issues: &[OnCallIssue]) -> Vec<LabelStats> {
    let mut groups: OrderedGroups<'_, LabelTotals> = OrderedGroups::new();

    for issue in issues {
        let totals = groups.entry(issue.label());
        totals.count += 1;
        totals.total_time_seconds = totals
            .total_time_seconds
            .saturating_add(issue.time_spent.unwrap_or(0));
    }

    let total_issues = issues.len();
    let mut stats: Vec<LabelStats> = groups
        .into_vec()
        .into_iter()
        .map(|(label, totals)| LabelStats {
            label: label.to_string(),
            count: totals.count,
            percentage: if total_issues > 0 {
                totals.count as f64 / total_issues as f64 * 100.0
            } else {
                0.0
            },
            total_time_seconds: totals.total_time_seconds,
            total_time_hours: totals.total_time_seconds as f64 / SECONDS_PER_HOUR,
        })
        .collect();

    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::fixtures::issue;
    use crate::types::NO_LABEL;

    #[test]
    fn test_counts_and_percentages() {
        let issues = vec![
            issue("A-1", "db", "1/1/2026 1:00:00", Some(3600)),
            issue("A-2", "network", "1/1/2026 1:00:00", None),
            issue("A-3", "db", "1/1/2026 1:00:00", Some(1800)),
            issue("A-4", "", "1/1/2026 1:00:00", Some(0)),
        ];
        let stats = aggregate_by_label(&issues);

        assert_eq!(stats.len(), 3);
        assert_eq!(stats[0].label, "db");
        assert_eq!(stats[0].count, 2);
        assert_eq!(stats[0].percentage, 50.0);
        assert_eq!(stats[0].total_time_seconds, 5400);
        assert_eq!(stats[0].total_time_hours, 1.5);

        let counted: usize = stats.iter().map(|s| s.count).sum();
        assert_eq!(counted, issues.len());
        let percent: f64 = stats.iter().map(|s| s.percentage).sum();
        assert!((percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_huge_time_spent_saturates() {
        let issues = vec![
            issue("A-1", "db", "1/1/2026 1:00:00", Some(u64::MAX)),
            issue("A-2", "db", "1/1/2026 1:00:00", Some(10)),
        ];
        let stats = aggregate_by_label(&issues);

        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].count, 2);
        assert_eq!(stats[0].total_time_seconds, u64::MAX);
    }

    #[test]
    fn test_ties_keep_discovery_order() {
        let issues = vec![
            issue("A-1", "zeta", "", None),
            issue("A-2", "", "", None),
            issue("A-3", "alpha", "", None),
        ];
        let labels: Vec<String> = aggregate_by_label(&issues)
            .into_iter()
            .map(|s| s.label)
            .collect();
        assert_eq!(labels, vec!["zeta", NO_LABEL, "alpha"]);
    }

    #[test]
    fn test_empty_slice() {
        assert!(aggregate_by_label(&[]).is_empty());
    }

    #[test]
    fn test_thirds_sum_to_hundred() {
        let issues = vec![
            issue("A-1", "a", "", None),
            issue("A-2", "b", "", None),
            issue("A-3", "c", "", None),
        ];
        let percent: f64 = aggregate_by_label(&issues).iter().map(|s| s.percentage).sum();
        assert!((percent - 100.0).abs() < 1e-9);
    }
}
