//! Tracing setup for the command-line tool
//!
//! Logs go to stderr so report output on stdout stays clean for piping.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing/logging
///
/// Defaults to `info` for this crate, `debug` when `verbose` is set.
/// `RUST_LOG` adds further directives and `LOG_FORMAT=json` switches to
/// structured JSON lines.
pub fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::from_default_env().add_directive(format!("oncall={}", level).parse()?);

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let stderr = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let output = if json {
        stderr.json().boxed()
    } else {
        stderr.with_ansi(false).with_target(false).boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(output)
        .try_init()?;
    Ok(())
}
