//! Logging setup shared by slowOS apps.
//!
//! Apps log through `tracing`; the filter comes from `SLOWOS_LOG`
//! (e.g. `SLOWOS_LOG=slowcalc=debug`) and defaults to `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "SLOWOS_LOG";

/// Build the filter from `SLOWOS_LOG`, falling back to `warn`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global fmt subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init(app_name: &str) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(app = app_name, "logging initialized");
    }
}
