//! Loading exports from disk

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::ingest::{parse_csv, ParsedCsv};

/// Read and parse a Jira CSV export
pub fn load_issues(path: &Path) -> Result<ParsedCsv> {
    info!("Loading on-call export from {}", path.display());

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read CSV file: {}", path.display()))?;
    let parsed = parse_csv(&text)?;

    info!("Loaded {} issues", parsed.row_count);
    Ok(parsed)
}
