//! Issue records and the derived statistic types

use serde::{Deserialize, Serialize};

use crate::month::{extract_month, MonthKey};

/// Label used when an issue has none
pub const NO_LABEL: &str = "No Label";

/// One row of the Jira export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnCallIssue {
    pub issue_type: String,
    pub key: String,
    pub summary: String,
    pub assignee: String,
    /// Raw `M/D/YYYY H:MM:SS` creation time
    pub created: String,
    /// Raw `M/D/YYYY H:MM:SS` last update time
    pub updated: String,
    /// Label cell as exported, never split on separators
    pub labels: String,
    /// Logged time in seconds, `None` when not tracked
    pub time_spent: Option<u64>,
}

impl OnCallIssue {
    /// Label with the empty value normalized to [`NO_LABEL`]
    pub fn label(&self) -> &str {
        if self.labels.is_empty() {
            NO_LABEL
        } else {
            &self.labels
        }
    }

    /// Month the issue was created in, `None` for the unknown bucket
    pub fn created_month(&self) -> Option<MonthKey> {
        extract_month(&self.created)
    }
}

/// Per-label rollup of a slice of issues
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelStats {
    pub label: String,
    pub count: usize,
    /// Share of the slice, 0-100
    pub percentage: f64,
    pub total_time_seconds: u64,
    pub total_time_hours: f64,
}

/// Per-month rollup used for trend lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStats {
    pub month: MonthKey,
    /// Month name without the year
    pub month_display: String,
    pub issues: usize,
    /// Hours spent, rounded to one decimal
    pub hours: f64,
}

/// Average resolution time of one label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelResolutionStats {
    pub label: String,
    /// Mean hours from creation to last update, rounded to one decimal
    pub avg_hours: f64,
    /// Issues with a usable resolution time
    pub count: usize,
}

/// An issue selected into the top-by-time-spent view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopIssue {
    pub key: String,
    pub summary: String,
    pub label: String,
    pub time_spent_hours: f64,
    pub time_spent_formatted: String,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::OnCallIssue;

    /// Issue with the fields the aggregations look at
    pub(crate) fn issue(key: &str, labels: &str, created: &str, time_spent: Option<u64>) -> OnCallIssue {
        OnCallIssue {
            issue_type: "Bug".to_string(),
            key: key.to_string(),
            summary: format!("Summary of {}", key),
            assignee: "oncall".to_string(),
            created: created.to_string(),
            updated: created.to_string(),
            labels: labels.to_string(),
            time_spent,
        }
    }
}
