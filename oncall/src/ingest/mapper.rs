//! Row to record mapping

use std::collections::HashMap;

use super::schema::{ASSIGNEE, CREATED, ISSUE_TYPE, KEY, LABELS, SUMMARY, TIME_SPENT, UPDATED};
use crate::types::OnCallIssue;

/// Column name to position lookup built from the header row
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    columns: HashMap<String, usize>,
}

impl HeaderIndex {
    /// Index the trimmed header names; a repeated name maps to its last position
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        let columns = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.as_ref().trim().to_string(), i))
            .collect();
        Self { columns }
    }

    /// Cell for `column`, empty when the column or the cell is absent
    pub fn field<'a>(&self, row: &'a [String], column: &str) -> &'a str {
        self.columns
            .get(column)
            .and_then(|&i| row.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Build a record from one tokenized data row
    pub fn map_row(&self, row: &[String]) -> OnCallIssue {
        let text = |column: &str| self.field(row, column).to_string();

        OnCallIssue {
            issue_type: text(ISSUE_TYPE),
            key: text(KEY),
            summary: text(SUMMARY),
            assignee: text(ASSIGNEE),
            created: text(CREATED),
            updated: text(UPDATED),
            labels: text(LABELS),
            time_spent: parse_time_spent(self.field(row, TIME_SPENT)),
        }
    }
}

/// Leading base-10 integer of a time-spent cell
///
/// An optional `+` and the digits that follow are read; anything after them
/// is ignored. Blank cells, cells without leading digits and negative values
/// give `None`. Zero stays `Some(0)`.
pub fn parse_time_spent(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    let unsigned = raw.strip_prefix('+').unwrap_or(raw);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];

    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
