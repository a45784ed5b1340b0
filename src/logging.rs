//! Logging setup for the viminfo-timeline binary
//!
//! Diagnostics go to stderr; stdout carries only body rows.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

/// Level used when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Initialize logging to stderr
///
/// Verbosity is taken from `RUST_LOG` (e.g. `RUST_LOG=viminfo_timeline=debug`),
/// falling back to [`DEFAULT_LOG_LEVEL`].
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

/// Initialize logging for tests (captured by the test harness)
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .with_span_events(FmtSpan::CLOSE)
        .try_init();
}
