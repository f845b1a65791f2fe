//! Calendar month keys and the month filter
//!
//! A [`MonthKey`] always renders as `YYYY-MM` with a zero-padded month, so its
//! textual and chronological orders agree. Dates whose month cannot be read
//! fall into the `"Unknown"` bucket, represented as `None`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::Month;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display name of the bucket for dates without a readable month
pub const UNKNOWN_MONTH: &str = "Unknown";

/// Textual form of [`MonthFilter::All`]
pub const ALL_MONTHS: &str = "all";

/// Leading `M/D/YYYY` of a Jira date-time
static MONTH_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})").expect("Invalid regex"));

/// Errors from parsing a month key or filter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthKeyError {
    #[error("invalid month '{0}', expected YYYY-MM")]
    Format(String),
    #[error("month out of range in '{0}'")]
    OutOfRange(String),
}

/// A calendar month, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Build a key, `None` unless `month` is in `1..=12`
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The calendar month immediately before this one
    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// English month name, e.g. "January"
    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or(UNKNOWN_MONTH)
    }

    /// Month name and year, e.g. "January 2026"
    pub fn display_name(&self) -> String {
        format!("{} {:04}", self.month_name(), self.year)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .filter(|(y, m)| {
                y.len() == 4
                    && m.len() == 2
                    && y.bytes().all(|b| b.is_ascii_digit())
                    && m.bytes().all(|b| b.is_ascii_digit())
            })
            .ok_or_else(|| MonthKeyError::Format(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| MonthKeyError::Format(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| MonthKeyError::Format(s.to_string()))?;

        MonthKey::new(year, month).ok_or_else(|| MonthKeyError::OutOfRange(s.to_string()))
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for MonthKey {
    type Error = MonthKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Either every month or one specific month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum MonthFilter {
    #[default]
    All,
    Month(MonthKey),
}

impl MonthFilter {
    /// The selected month, `None` for [`MonthFilter::All`]
    pub fn month(&self) -> Option<MonthKey> {
        match self {
            MonthFilter::All => None,
            MonthFilter::Month(key) => Some(*key),
        }
    }

    /// "All Months" or e.g. "January 2026"
    pub fn display_name(&self) -> String {
        match self {
            MonthFilter::All => "All Months".to_string(),
            MonthFilter::Month(key) => key.display_name(),
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str(ALL_MONTHS),
            MonthFilter::Month(key) => write!(f, "{}", key),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = MonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(ALL_MONTHS) {
            Ok(MonthFilter::All)
        } else {
            s.parse().map(MonthFilter::Month)
        }
    }
}

impl From<MonthKey> for MonthFilter {
    fn from(key: MonthKey) -> Self {
        MonthFilter::Month(key)
    }
}

impl From<MonthFilter> for String {
    fn from(filter: MonthFilter) -> Self {
        filter.to_string()
    }
}

impl TryFrom<String> for MonthFilter {
    type Error = MonthKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Month of a `M/D/YYYY ...` date string, `None` for the unknown bucket
pub fn extract_month(date: &str) -> Option<MonthKey> {
    let caps = MONTH_PREFIX_RE.captures(date)?;
    let month: u32 = caps.get(1)?.as_str().parse().ok()?;
    let year: i32 = caps.get(3)?.as_str().parse().ok()?;
    MonthKey::new(year, month)
}

/// Calendar month before `key`
pub fn previous_month(key: MonthKey) -> MonthKey {
    key.previous()
}

/// Human label for a textual month filter
///
/// `"all"` gives "All Months" and a valid key gives e.g. "January 2026".
/// Anything else is returned unchanged.
pub fn format_month_display(value: &str) -> String {
    match value.parse::<MonthFilter>() {
        Ok(filter) => filter.display_name(),
        Err(_) => value.to_string(),
    }
}
