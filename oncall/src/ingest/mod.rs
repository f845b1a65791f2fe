//! CSV ingestion: tokenize, validate the header, map rows to records

mod mapper;
mod parser;
mod schema;

pub use mapper::{parse_time_spent, HeaderIndex};
pub use parser::{non_blank_lines, parse_csv_line, parse_rows};
pub use schema::{validate_csv_columns, SchemaValidation, REQUIRED_COLUMNS};

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::CsvError;
use crate::types::OnCallIssue;

/// Records from an accepted upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCsv {
    pub issues: Vec<OnCallIssue>,
    pub row_count: usize,
}

/// Parse a whole Jira export
///
/// Fails only when the text has no data at all or the header is missing
/// required columns. Row-level problems degrade to empty or absent values.
pub fn parse_csv(text: &str) -> Result<ParsedCsv, CsvError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rows = parse_rows(text).into_iter();

    let Some(headers) = rows.next() else {
        warn!("Rejecting empty CSV upload");
        return Err(CsvError::Empty);
    };

    let validation = validate_csv_columns(&headers);
    if !validation.valid {
        warn!(missing = ?validation.missing_columns, "Rejecting CSV upload");
    }
    validation.into_result()?;

    let index = HeaderIndex::new(&headers);
    let issues: Vec<OnCallIssue> = rows.map(|row| index.map_row(&row)).collect();

    debug!(
        columns = headers.len(),
        rows = issues.len(),
        "Mapped CSV rows"
    );

    Ok(ParsedCsv {
        row_count: issues.len(),
        issues,
    })
}
