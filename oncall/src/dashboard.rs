//! Everything the dashboard shows for one month filter

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compare::{compare_labels, LabelComparison, PeriodComparison};
use crate::month::{MonthFilter, MonthKey};
use crate::stats::{
    aggregate_by_label, aggregate_by_month, aggregate_resolution_by_label, available_months,
    filter_issues_by_month, top_time_consuming_issues,
};
use crate::types::{LabelResolutionStats, LabelStats, MonthlyStats, OnCallIssue, TopIssue};

/// Comparison against the month before the selected one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviousPeriod {
    pub month: MonthKey,
    /// Month name without the year, e.g. "December"
    pub month_name: String,
    pub issues: PeriodComparison,
    pub hours: PeriodComparison,
    pub labels: Vec<LabelComparison>,
}

/// Derived view of an issue list under a month filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub filter: MonthFilter,
    pub filter_display: String,
    pub available_months: Vec<MonthKey>,
    pub total_issues: usize,
    pub total_hours: f64,
    pub label_stats: Vec<LabelStats>,
    /// Always computed over the full list, independent of the filter
    pub monthly_trend: Vec<MonthlyStats>,
    pub top_issues: Vec<TopIssue>,
    pub resolution_by_label: Vec<LabelResolutionStats>,
    /// Present only for a specific month whose previous month has data
    pub previous: Option<PreviousPeriod>,
}

/// Sum of hours across label rollups
pub fn total_hours(stats: &[LabelStats]) -> f64 {
    stats.iter().map(|s| s.total_time_hours).sum()
}

impl DashboardView {
    pub fn build(issues: &[OnCallIssue], filter: MonthFilter, top_limit: usize) -> Self {
        let months = available_months(issues);
        let filtered = filter_issues_by_month(issues, filter);
        let label_stats = aggregate_by_label(&filtered);
        let total_issues = filtered.len();
        let hours = total_hours(&label_stats);

        let previous = filter
            .month()
            .map(|month| month.previous())
            .filter(|prev| months.contains(prev))
            .map(|prev| {
                let prev_issues = filter_issues_by_month(issues, prev.into());
                let prev_stats = aggregate_by_label(&prev_issues);
                PreviousPeriod {
                    month: prev,
                    month_name: prev.month_name().to_string(),
                    issues: PeriodComparison::new(
                        total_issues as f64,
                        Some(prev_issues.len() as f64),
                    ),
                    hours: PeriodComparison::new(hours, Some(total_hours(&prev_stats))),
                    labels: compare_labels(&label_stats, &prev_stats),
                }
            });

        debug!(
            filter = %filter,
            issues = total_issues,
            has_previous = previous.is_some(),
            "Built dashboard view"
        );

        Self {
            filter,
            filter_display: filter.display_name(),
            available_months: months,
            total_issues,
            total_hours: hours,
            monthly_trend: aggregate_by_month(issues),
            top_issues: top_time_consuming_issues(&filtered, top_limit),
            resolution_by_label: aggregate_resolution_by_label(&filtered),
            label_stats,
            previous,
        }
    }

    /// Whether a trend line is worth drawing: all months selected and at least two points
    pub fn shows_trend(&self) -> bool {
        self.filter == MonthFilter::All && self.monthly_trend.len() >= 2
    }
}
