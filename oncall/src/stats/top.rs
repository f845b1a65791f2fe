//! Issues with the most logged time

use super::SECONDS_PER_HOUR;
use crate::types::{OnCallIssue, TopIssue};

/// Rows in the top time-consuming view unless configured otherwise
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Issues with the most logged time, largest first
///
/// Only issues with a positive time spent are considered; equal times keep
/// input order.
pub fn top_time_consuming_issues(issues: &[OnCallIssue], limit: usize) -> Vec<TopIssue> {
    let mut tracked: Vec<(&OnCallIssue, u64)> = issues
        .iter()
        .filter_map(|issue| issue.time_spent.filter(|&s| s > 0).map(|s| (issue, s)))
        .collect();

    tracked.sort_by(|a, b| b.1.cmp(&a.1));

    tracked
        .into_iter()
        .take(limit)
        .map(|(issue, seconds)| TopIssue {
            key: issue.key.clone(),
            summary: issue.summary.clone(),
            label: issue.label().to_string(),
            time_spent_hours: seconds as f64 / SECONDS_PER_HOUR,
            time_spent_formatted: format_time_spent(Some(seconds)),
        })
        .collect()
}

/// Render seconds as "1h 30m", "2h" or "45m"; untracked or zero is "-"
pub fn format_time_spent(seconds: Option<u64>) -> String {
    let seconds = match seconds {
        None | Some(0) => return "-".to_string(),
        Some(s) => s,
    };

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    match (hours, minutes) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}
