//! Logging set-up.
//!
//! Installs a `tracing_subscriber` fmt subscriber. The `QUOTESYNC_LOG`
//! environment variable, when set, overrides the configured filter.

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV_VAR: &str = "QUOTESYNC_LOG";

/// Builds the filter from `QUOTESYNC_LOG`, falling back to `default_level`
/// and then to `info` if either directive is invalid.
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber. Returns `false` if one was already set.
pub fn init(default_level: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_level))
        .with_target(false)
        .try_init()
        .is_ok()
}
