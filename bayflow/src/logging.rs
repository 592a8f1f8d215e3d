//! Subscriber setup for the `bayflow` binary.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `bayflow=debug`.
pub const LOG_ENV_VAR: &str = "BAYFLOW_LOG";

const DEFAULT_LEVEL: &str = "warn";

/// Pick the filter directive: `BAYFLOW_LOG`, then the configured level, then
/// `warn`. Blank values are skipped.
pub fn filter_directive(env_value: Option<&str>, configured: Option<&str>) -> String {
    [env_value, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|directive| !directive.is_empty())
        .unwrap_or(DEFAULT_LEVEL)
        .to_string()
}

/// Install the global subscriber. Logs go to stderr so command output on
/// stdout stays clean for `--json`.
pub fn init(configured_level: Option<&str>) {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let directive = filter_directive(env_value.as_deref(), configured_level);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
