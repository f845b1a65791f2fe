//! On-call issue statistics
//!
//! Parses Jira CSV exports of on-call issues and derives the statistics an
//! on-call review looks at: issues and hours per label, monthly trends,
//! resolution times, the most time-consuming issues, and month-over-month
//! comparisons.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use oncall::{parse_csv, DashboardView, MonthFilter};
//!
//! let parsed = parse_csv(&text)?;
//! let view = DashboardView::build(&parsed.issues, MonthFilter::All, 10);
//! ```
//!
//! Only the upload gate can fail: an empty file or a header missing required
//! columns. Unreadable dates, times and labels degrade to sentinel values.

pub mod compare;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod ingest;
pub mod loader;
pub mod logging;
pub mod month;
pub mod reporter;
pub mod stats;
pub mod types;

pub use compare::{compare_labels, format_change, LabelComparison, PeriodComparison};
pub use config::OncallConfig;
pub use dashboard::{DashboardView, PreviousPeriod};
pub use error::CsvError;
pub use ingest::{parse_csv, validate_csv_columns, ParsedCsv, REQUIRED_COLUMNS};
pub use loader::load_issues;
pub use month::{extract_month, format_month_display, previous_month, MonthFilter, MonthKey};
pub use reporter::{OutputFormat, Reporter};
pub use stats::*;
pub use types::*;
