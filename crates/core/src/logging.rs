//! Logging infrastructure for Prompt My Papers.
//!
//! All logs are emitted to stderr. Stdout carries only the rendered prompt
//! (or its JSON envelope) so it can be piped or redirected.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{AppError, AppResult};

/// Initialize the tracing subscriber with stderr output.
///
/// # Arguments
/// * `log_level` - Optional filter override (e.g., "debug", "papers_prompt=trace")
/// * `no_color` - Disable colored output
///
/// # Example
/// ```no_run
/// use papers_core::logging::init_logging;
///
/// init_logging(None, false).expect("Failed to initialize logging");
/// ```
pub fn init_logging(log_level: Option<&str>, no_color: bool) -> AppResult<()> {
    let filter_str = resolve_filter(log_level, std::env::var("RUST_LOG").ok());

    let env_filter = EnvFilter::try_new(&filter_str)
        .map_err(|e| AppError::Config(format!("Invalid log filter: {}", e)))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_ansi(!no_color && supports_color());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| AppError::Config(format!("Failed to init logging: {}", e)))?;

    Ok(())
}

/// Pick the filter string: explicit level, then `RUST_LOG`, then `info`.
fn resolve_filter(log_level: Option<&str>, env_level: Option<String>) -> String {
    log_level
        .map(str::to_string)
        .or(env_level)
        .unwrap_or_else(|| "info".to_string())
}

fn supports_color() -> bool {
    std::env::var("NO_COLOR").is_err()
}
