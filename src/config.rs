use tracing_subscriber::EnvFilter;

pub const PROGRAM_NAME: &str = "ranma-episodes";

/// Layout of the air-date literals in the embedded table, e.g. `April 15, 1989`.
pub const AIR_DATE_FORMAT: &str = "%B %d, %Y";

/// Layout used whenever an air date is printed.
pub const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs the global tracing subscriber.
///
/// Diagnostics go to stderr; stdout carries only command results.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        // Fall back to warnings only so normal runs stay quiet.
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
