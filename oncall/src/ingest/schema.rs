//! Header validation

use crate::error::CsvError;

pub const ISSUE_TYPE: &str = "Issue Type";
pub const KEY: &str = "Key";
pub const SUMMARY: &str = "Summary";
pub const ASSIGNEE: &str = "Assignee";
pub const CREATED: &str = "Created";
pub const UPDATED: &str = "Updated";
pub const LABELS: &str = "Labels";
pub const TIME_SPENT: &str = "Σ Time Spent";

/// Columns every export must carry, in reporting order
pub const REQUIRED_COLUMNS: [&str; 8] = [
    ISSUE_TYPE, KEY, SUMMARY, ASSIGNEE, CREATED, UPDATED, LABELS, TIME_SPENT,
];

/// Outcome of checking a header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaValidation {
    pub valid: bool,
    pub missing_columns: Vec<String>,
}

impl SchemaValidation {
    /// Turn a failed validation into the upload-rejecting error
    pub fn into_result(self) -> Result<(), CsvError> {
        if self.valid {
            Ok(())
        } else {
            Err(CsvError::MissingColumns(self.missing_columns))
        }
    }
}

/// Check that `headers` contains every required column
pub fn validate_csv_columns<S: AsRef<str>>(headers: &[S]) -> SchemaValidation {
    let normalized: Vec<&str> = headers.iter().map(|h| h.as_ref().trim()).collect();

    let missing_columns: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !normalized.contains(*column))
        .map(|column| column.to_string())
        .collect();

    SchemaValidation {
        valid: missing_columns.is_empty(),
        missing_columns,
    }
}
