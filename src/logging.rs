//! Diagnostic logging to stderr.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a `tracing` filter directive, e.g. `classclash=debug`.
pub const LOG_ENV: &str = "CLASSCLASH_LOG";

/// Filter used when [`LOG_ENV`] is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Logs never go to stdout, which carries the report.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    let _ = tracing_subscriber::registry().with(filter).with(fmt_layer).try_init();
}
