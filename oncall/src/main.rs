//! On-call statistics CLI
//!
//! Usage:
//!   oncall <COMMAND> <CSV> [OPTIONS]
//!
//! Examples:
//!   oncall summary export.csv                   # Dashboard over all months
//!   oncall summary export.csv --month 2026-01   # One month, compared to December
//!   oncall top export.csv --limit 5 -o json     # Five biggest time sinks as JSON
//!   oncall validate export.csv                  # Check the header only

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use oncall::{
    aggregate_by_label, aggregate_by_month, aggregate_resolution_by_label, available_months,
    filter_issues_by_month, load_issues, top_time_consuming_issues, DashboardView, MonthFilter,
    MonthKey, OncallConfig, OutputFormat, Reporter,
};

#[derive(Parser)]
#[command(name = "oncall")]
#[command(about = "On-call issue statistics from Jira CSV exports")]
struct Cli {
    /// Config file path (uses ONCALL_CONFIG_PATH or ~/.config/oncall/config.toml if not specified)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Input {
    /// Jira CSV export
    csv: PathBuf,

    /// Output format: terminal, markdown, json, csv
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Full dashboard for a month filter
    Summary {
        #[command(flatten)]
        input: Input,
        /// Month to show (YYYY-MM) or "all"
        #[arg(short, long, default_value = "all")]
        month: MonthFilter,
        /// Rows in the top issues table
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Months with issues, newest first
    Months {
        #[command(flatten)]
        input: Input,
    },
    /// Issues and hours per label
    Labels {
        #[command(flatten)]
        input: Input,
        #[arg(short, long, default_value = "all")]
        month: MonthFilter,
    },
    /// Issues and hours per month
    Trend {
        #[command(flatten)]
        input: Input,
    },
    /// Average resolution time per label
    Resolution {
        #[command(flatten)]
        input: Input,
        #[arg(short, long, default_value = "all")]
        month: MonthFilter,
    },
    /// Most time-consuming issues
    Top {
        #[command(flatten)]
        input: Input,
        #[arg(short, long, default_value = "all")]
        month: MonthFilter,
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Compare a month with the one before it
    Compare {
        #[command(flatten)]
        input: Input,
        /// Month to compare (YYYY-MM)
        #[arg(short, long)]
        month: MonthKey,
    },
    /// Check that a file is an acceptable export
    Validate {
        /// Jira CSV export
        csv: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    oncall::logging::init_tracing(cli.verbose)?;

    let config = OncallConfig::load(cli.config.as_deref())?;
    run(cli.command, &config)
}

fn reporter_for(input: &Input, config: &OncallConfig) -> Result<Reporter> {
    let format: OutputFormat = input
        .output
        .as_deref()
        .unwrap_or(&config.default_output)
        .parse()?;
    Ok(Reporter::new(format))
}

fn print(reporter: &Reporter, content: &str) -> Result<()> {
    reporter.write_to(&mut std::io::stdout().lock(), content)
}

fn heading(title: &str, month: MonthFilter) -> String {
    format!("{} ({})", title, month.display_name())
}

fn run(command: Command, config: &OncallConfig) -> Result<()> {
    match command {
        Command::Summary {
            input,
            month,
            limit,
        } => {
            let reporter = reporter_for(&input, config)?;
            let issues = load_issues(&input.csv)?.issues;
            let limit = limit.unwrap_or(config.default_top_limit);
            let view = DashboardView::build(&issues, month, limit);
            print(&reporter, &reporter.dashboard(&view))
        }
        Command::Months { input } => {
            let reporter = reporter_for(&input, config)?;
            let issues = load_issues(&input.csv)?.issues;
            print(&reporter, &reporter.months(&available_months(&issues)))
        }
        Command::Labels { input, month } => {
            let reporter = reporter_for(&input, config)?;
            let issues = load_issues(&input.csv)?.issues;
            let stats = aggregate_by_label(&filter_issues_by_month(&issues, month));
            print(
                &reporter,
                &reporter.labels(&heading("Issues by Label", month), &stats),
            )
        }
        Command::Trend { input } => {
            let reporter = reporter_for(&input, config)?;
            let issues = load_issues(&input.csv)?.issues;
            print(&reporter, &reporter.trend(&aggregate_by_month(&issues)))
        }
        Command::Resolution { input, month } => {
            let reporter = reporter_for(&input, config)?;
            let issues = load_issues(&input.csv)?.issues;
            let stats = aggregate_resolution_by_label(&filter_issues_by_month(&issues, month));
            print(
                &reporter,
                &reporter.resolution(&heading("Avg Resolution Time by Label", month), &stats),
            )
        }
        Command::Top {
            input,
            month,
            limit,
        } => {
            let reporter = reporter_for(&input, config)?;
            let issues = load_issues(&input.csv)?.issues;
            let limit = limit.unwrap_or(config.default_top_limit);
            let top = top_time_consuming_issues(&filter_issues_by_month(&issues, month), limit);
            print(
                &reporter,
                &reporter.top_issues(&heading("Top Time-Consuming Issues", month), &top),
            )
        }
        Command::Compare { input, month } => {
            let reporter = reporter_for(&input, config)?;
            let issues = load_issues(&input.csv)?.issues;
            let view = DashboardView::build(&issues, month.into(), config.default_top_limit);
            match view.previous {
                Some(previous) => print(
                    &reporter,
                    &reporter.comparison(
                        &format!("{} vs {}", month.display_name(), previous.month.display_name()),
                        &previous,
                    ),
                ),
                None => anyhow::bail!(
                    "No issues in {} to compare {} against",
                    month.previous().display_name(),
                    month.display_name()
                ),
            }
        }
        Command::Validate { csv } => validate(&csv),
    }
}

fn validate(csv: &Path) -> Result<()> {
    let parsed = load_issues(csv)?;
    println!("OK: {} issues in {}", parsed.row_count, csv.display());
    Ok(())
}
