//! Time from creation to last update

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use super::{round1, OrderedGroups, SECONDS_PER_HOUR};
use crate::types::{LabelResolutionStats, OnCallIssue};

/// Leading `M/D/YYYY H:MM:SS` of a Jira date-time
static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})\s+(\d{1,2}):(\d{2}):(\d{2})").expect("Invalid regex")
});

/// Parse a Jira wall-clock timestamp
///
/// Returns `None` when the text does not match or names an impossible
/// date or time, such as `2/30/2026` or `25:00:00`.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let caps = TIMESTAMP_RE.captures(value)?;
    let number = |i: usize| caps.get(i)?.as_str().parse::<u32>().ok();

    let year = i32::try_from(number(3)?).ok()?;
    let date = NaiveDate::from_ymd_opt(year, number(1)?, number(2)?)?;
    date.and_hms_opt(number(4)?, number(5)?, number(6)?)
}

/// Hours between creation and last update
///
/// `None` if either timestamp is unusable or the update precedes creation.
pub fn calculate_resolution_hours(issue: &OnCallIssue) -> Option<f64> {
    let created = parse_timestamp(&issue.created)?;
    let updated = parse_timestamp(&issue.updated)?;

    let elapsed = updated.signed_duration_since(created).num_seconds();
    if elapsed < 0 {
        return None;
    }
    Some(elapsed as f64 / SECONDS_PER_HOUR)
}

#[derive(Default)]
struct ResolutionTotals {
    total_hours: f64,
    count: usize,
}

/// Mean resolution hours per label, slowest label first
pub fn aggregate_resolution_by_label(issues: &[OnCallIssue]) -> Vec<LabelResolutionStats> {
    let mut groups: OrderedGroups<'_, ResolutionTotals> = OrderedGroups::new();

    for issue in issues {
        let Some(hours) = calculate_resolution_hours(issue) else {
            continue;
        };
        let totals = groups.entry(issue.label());
        totals.total_hours += hours;
        totals.count += 1;
    }

    let mut stats: Vec<LabelResolutionStats> = groups
        .into_vec()
        .into_iter()
        .map(|(label, totals)| LabelResolutionStats {
            label: label.to_string(),
            avg_hours: round1(totals.total_hours / totals.count as f64),
            count: totals.count,
        })
        .collect();

    stats.sort_by(|a, b| b.avg_hours.total_cmp(&a.avg_hours));
    stats
}
