//! Ingestion errors
//!
//! Only the upload gate can fail. Everything downstream of a validated header
//! degrades to sentinel values instead of returning an error.

use thiserror::Error;

/// Errors that reject a whole CSV upload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CsvError {
    /// No non-blank line in the input
    #[error("CSV file is empty")]
    Empty,

    /// Header row lacks one or more required columns
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

impl CsvError {
    /// Required columns the header was missing, empty for other errors
    pub fn missing_columns(&self) -> &[String] {
        match self {
            CsvError::MissingColumns(columns) => columns,
            CsvError::Empty => &[],
        }
    }
}
