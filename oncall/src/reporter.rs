//! Report rendering
//!
//! Generates formatted output in various formats (terminal, Markdown, JSON, CSV).

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::compare::{format_change, PeriodComparison};
use crate::dashboard::{DashboardView, PreviousPeriod};
use crate::month::MonthKey;
use crate::types::{LabelResolutionStats, LabelStats, MonthlyStats, TopIssue};

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned plain-text tables
    #[default]
    Terminal,
    /// Human-readable Markdown
    Markdown,
    /// Machine-readable JSON
    Json,
    /// Spreadsheet-compatible CSV
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" | "term" | "console" => Ok(Self::Terminal),
            "md" | "markdown" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(anyhow::anyhow!("Unknown format: {}", s)),
        }
    }
}

/// A titled table inside a report
struct Section {
    title: String,
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Section {
    fn new(title: impl Into<String>, headers: &[&'static str]) -> Self {
        Self {
            title: title.into(),
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }
}

/// Report generator
pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    /// Create a new reporter with the specified format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Full dashboard for one month filter
    pub fn dashboard(&self, view: &DashboardView) -> String {
        if self.format == OutputFormat::Json {
            return to_json(view, "{}");
        }

        let month_name = view.previous.as_ref().map(|p| p.month_name.as_str());
        let mut headline = Section::new("Overview", &["Metric", "Value", "Change"]);
        let issues = view.previous.as_ref().map(|p| &p.issues);
        let hours = view.previous.as_ref().map(|p| &p.hours);
        headline.row(vec![
            "Issues".to_string(),
            view.total_issues.to_string(),
            card_change(issues, month_name, false),
        ]);
        headline.row(vec![
            "Hours".to_string(),
            format!("{:.1}", view.total_hours),
            card_change(hours, month_name, true),
        ]);

        let mut sections = vec![headline];
        if view.shows_trend() {
            sections.push(trend_section(&view.monthly_trend));
        }
        sections.push(label_section(&view.label_stats));
        sections.push(resolution_section(&view.resolution_by_label));
        sections.push(top_section(&view.top_issues));
        if let Some(previous) = &view.previous {
            sections.push(comparison_section(previous));
        }

        self.render(
            &format!("On-call Dashboard: {}", view.filter_display),
            &sections,
        )
    }

    /// Months available for filtering, newest first
    pub fn months(&self, months: &[MonthKey]) -> String {
        if self.format == OutputFormat::Json {
            return to_json(months, "[]");
        }

        let mut section = Section::new("Available Months", &["Month", "Name"]);
        for month in months {
            section.row(vec![month.to_string(), month.display_name()]);
        }
        self.render("Available Months", &[section])
    }

    /// Per-label issue counts and time spent
    pub fn labels(&self, heading: &str, stats: &[LabelStats]) -> String {
        if self.format == OutputFormat::Json {
            return to_json(stats, "[]");
        }
        self.render(heading, &[label_section(stats)])
    }

    /// Issues and hours per month
    pub fn trend(&self, trend: &[MonthlyStats]) -> String {
        if self.format == OutputFormat::Json {
            return to_json(trend, "[]");
        }
        self.render("Monthly Trend", &[trend_section(trend)])
    }

    /// Average resolution time per label
    pub fn resolution(&self, heading: &str, stats: &[LabelResolutionStats]) -> String {
        if self.format == OutputFormat::Json {
            return to_json(stats, "[]");
        }
        self.render(heading, &[resolution_section(stats)])
    }

    /// Most time-consuming issues
    pub fn top_issues(&self, heading: &str, issues: &[TopIssue]) -> String {
        if self.format == OutputFormat::Json {
            return to_json(issues, "[]");
        }
        self.render(heading, &[top_section(issues)])
    }

    /// Totals and per-label changes against the previous month
    pub fn comparison(&self, heading: &str, previous: &PreviousPeriod) -> String {
        if self.format == OutputFormat::Json {
            return to_json(previous, "{}");
        }

        let name = Some(previous.month_name.as_str());
        let mut totals = Section::new("Totals", &["Metric", "Current", "Previous", "Change"]);
        totals.row(vec![
            "Issues".to_string(),
            format!("{}", previous.issues.current),
            previous
                .issues
                .previous
                .map(|p| format!("{}", p))
                .unwrap_or_default(),
            card_change(Some(&previous.issues), name, false),
        ]);
        totals.row(vec![
            "Hours".to_string(),
            format!("{:.1}", previous.hours.current),
            previous
                .hours
                .previous
                .map(|p| format!("{:.1}", p))
                .unwrap_or_default(),
            card_change(Some(&previous.hours), name, true),
        ]);

        self.render(heading, &[totals, comparison_section(previous)])
    }

    /// Write report to a writer
    pub fn write_to<W: Write>(&self, writer: &mut W, content: &str) -> Result<()> {
        write!(writer, "{}", content)?;
        Ok(())
    }

    fn render(&self, heading: &str, sections: &[Section]) -> String {
        match self.format {
            OutputFormat::Terminal => render_terminal(heading, sections),
            OutputFormat::Markdown => render_markdown(heading, sections),
            OutputFormat::Csv => render_csv(sections),
            OutputFormat::Json => to_json(heading, "\"\""),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(OutputFormat::Terminal)
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, fallback: &str) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| fallback.to_string())
}

/// Text of a headline card: the change, "No change", or "No previous data"
///
/// The percent sign follows `percent_change`, so growth from zero reads
/// "(0.0%)".
fn card_change(comparison: Option<&PeriodComparison>, month_name: Option<&str>, hours: bool) -> String {
    let (c, name) = match (comparison, month_name) {
        (Some(c), Some(name)) if c.has_previous() => (c, name),
        _ => return "No previous data".to_string(),
    };
    if c.diff == 0.0 {
        return format!("No change vs {}", name);
    }

    let arrow = if c.diff < 0.0 { "↓" } else { "↑" };
    let sign = if c.diff > 0.0 { "+" } else { "" };
    let percent_sign = if c.percent_change > 0.0 { "+" } else { "" };
    let amount = if hours {
        format!("{:.1}", c.diff)
    } else {
        format!("{}", c.diff)
    };

    format!(
        "{} {}{} ({}{:.1}%) vs {}",
        arrow, sign, amount, percent_sign, c.percent_change, name
    )
}

// === Section builders ===

fn label_section(stats: &[LabelStats]) -> Section {
    let mut section = Section::new("Issues by Label", &["Label", "Issues", "Share", "Hours"]);
    for s in stats {
        section.row(vec![
            s.label.clone(),
            s.count.to_string(),
            format!("{:.1}%", s.percentage),
            format!("{:.1}", s.total_time_hours),
        ]);
    }
    section
}

fn trend_section(trend: &[MonthlyStats]) -> Section {
    let mut section = Section::new("Monthly Trend", &["Month", "Name", "Issues", "Hours"]);
    for m in trend {
        section.row(vec![
            m.month.to_string(),
            m.month_display.clone(),
            m.issues.to_string(),
            format!("{:.1}", m.hours),
        ]);
    }
    section
}

fn resolution_section(stats: &[LabelResolutionStats]) -> Section {
    let mut section = Section::new(
        "Avg Resolution Time by Label",
        &["Label", "Avg Hours", "Issues"],
    );
    for s in stats {
        section.row(vec![
            s.label.clone(),
            format!("{:.1}", s.avg_hours),
            s.count.to_string(),
        ]);
    }
    section
}

fn top_section(issues: &[TopIssue]) -> Section {
    let mut section = Section::new(
        "Top Time-Consuming Issues",
        &["Key", "Summary", "Label", "Time Spent"],
    );
    for issue in issues {
        section.row(vec![
            issue.key.clone(),
            issue.summary.clone(),
            issue.label.clone(),
            issue.time_spent_formatted.clone(),
        ]);
    }
    section
}

fn comparison_section(previous: &PreviousPeriod) -> Section {
    let mut section = Section::new(
        format!("Label Comparison vs {}", previous.month_name),
        &["Label", "Issues", "Prev", "Change", "Hours", "Prev", "Change"],
    );
    for c in &previous.labels {
        section.row(vec![
            c.label.clone(),
            c.current_issues.to_string(),
            c.previous_issues.to_string(),
            format_change(c.issues_diff as f64, c.issues_percent_change, false),
            format!("{:.1}", c.current_hours),
            format!("{:.1}", c.previous_hours),
            format_change(c.hours_diff, c.hours_percent_change, true),
        ]);
    }
    section
}

// === Renderers ===

fn render_terminal(heading: &str, sections: &[Section]) -> String {
    let mut output = format!("\n{}\n", heading);

    for section in sections {
        output.push_str(&format!("\n {}\n", section.title));

        if section.rows.is_empty() {
            output.push_str("   (none)\n");
            continue;
        }

        let widths: Vec<usize> = section
            .headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                section
                    .rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let headers: Vec<String> = section.headers.iter().map(|h| h.to_string()).collect();
        output.push_str(&terminal_line(&headers, &widths));
        for row in &section.rows {
            output.push_str(&terminal_line(row, &widths));
        }
    }

    output.push('\n');
    output
}

fn terminal_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    format!("   {}\n", padded.join("  ").trim_end())
}

fn render_markdown(heading: &str, sections: &[Section]) -> String {
    let mut output = format!("# {}\n\n", heading);

    for section in sections {
        output.push_str(&format!("## {}\n\n", section.title));

        if section.rows.is_empty() {
            output.push_str("_No data_\n\n");
            continue;
        }

        output.push_str(&format!("| {} |\n", section.headers.join(" | ")));
        let rule: Vec<&str> = section.headers.iter().map(|_| "---").collect();
        output.push_str(&format!("|{}|\n", rule.join("|")));
        for row in &section.rows {
            let cells: Vec<String> = row.iter().map(|c| c.replace('|', "\\|")).collect();
            output.push_str(&format!("| {} |\n", cells.join(" | ")));
        }
        output.push('\n');
    }

    output
}

fn render_csv(sections: &[Section]) -> String {
    let tables: Vec<String> = sections
        .iter()
        .map(|section| {
            let mut table = section.headers.join(",");
            table.push('\n');
            for row in &section.rows {
                let cells: Vec<String> = row.iter().map(|c| csv_cell(c)).collect();
                table.push_str(&cells.join(","));
                table.push('\n');
            }
            table
        })
        .collect();
    tables.join("\n")
}

fn csv_cell(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::parse_csv_line;
    use crate::month::MonthFilter;
    use crate::types::fixtures::issue;
    use crate::types::OnCallIssue;

    fn sample() -> Vec<OnCallIssue> {
        vec![
            issue("OPS-1", "db", "12/4/2025 9:00:00", Some(3600)),
            issue("OPS-2", "db", "1/3/2026 9:00:00", Some(5400)),
            issue("OPS-3", "", "1/5/2026 9:00:00", Some(600)),
        ]
    }

    fn january_view() -> DashboardView {
        DashboardView::build(&sample(), MonthFilter::Month("2026-01".parse().unwrap()), 10)
    }

    #[test]
    fn test_terminal_dashboard() {
        let output = Reporter::new(OutputFormat::Terminal).dashboard(&january_view());
        assert!(output.contains("On-call Dashboard: January 2026"));
        assert!(output.contains("↑ +1 (+100.0%) vs December"));
        assert!(output.contains("Label Comparison vs December"));
        assert!(output.contains("1h 30m"));
        assert!(!output.contains("Monthly Trend"));
    }

    #[test]
    fn test_card_growth_from_zero_hours() {
        let issues = vec![
            issue("OPS-1", "db", "12/4/2025 9:00:00", None),
            issue("OPS-2", "db", "1/3/2026 9:00:00", Some(10800)),
        ];
        let view = DashboardView::build(&issues, MonthFilter::Month("2026-01".parse().unwrap()), 10);
        let output = Reporter::default().dashboard(&view);

        assert!(output.contains("↑ +3.0 (0.0%) vs December"));
        assert!(output.contains("No change vs December"));
    }

    #[test]
    fn test_all_months_has_no_previous_data() {
        let view = DashboardView::build(&sample(), MonthFilter::All, 10);
        let output = Reporter::default().dashboard(&view);
        assert!(output.contains("No previous data"));
        assert!(output.contains("Monthly Trend"));
    }

    #[test]
    fn test_markdown_output() {
        let output = Reporter::new(OutputFormat::Markdown).labels("Issues by Label", &january_view().label_stats);
        assert!(output.starts_with("# Issues by Label"));
        assert!(output.contains("| Label | Issues | Share | Hours |"));
        assert!(output.contains("| db | 1 | 50.0% | 1.5 |"));
    }

    #[test]
    fn test_json_output() {
        let output = Reporter::new(OutputFormat::Json).dashboard(&january_view());
        assert!(output.contains("\"filter\": \"2026-01\""));
        assert!(output.contains("\"total_issues\": 2"));
        assert!(output.contains("\"month_name\": \"December\""));
    }

    #[test]
    fn test_csv_output_quotes_cells() {
        let top = vec![TopIssue {
            key: "OPS-7".to_string(),
            summary: "Disk full, \"again\"".to_string(),
            label: "db".to_string(),
            time_spent_hours: 1.0,
            time_spent_formatted: "1h".to_string(),
        }];
        let output = Reporter::new(OutputFormat::Csv).top_issues("Top", &top);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Key,Summary,Label,Time Spent");
        assert_eq!(
            parse_csv_line(lines[1]),
            vec!["OPS-7", "Disk full, \"again\"", "db", "1h"]
        );
    }

    #[test]
    fn test_empty_sections() {
        assert!(Reporter::default().months(&[]).contains("(none)"));
        assert!(Reporter::new(OutputFormat::Markdown).trend(&[]).contains("_No data_"));
        assert_eq!(Reporter::new(OutputFormat::Json).trend(&[]), "[]");
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("markdown".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("MD".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("term".parse::<OutputFormat>().unwrap(), OutputFormat::Terminal);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
