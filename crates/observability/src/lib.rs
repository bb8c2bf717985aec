//! Tracing/logging setup shared by every stockcast process.
//!
//! Keeps subscriber wiring out of the domain crates; those only emit
//! `tracing` events and never configure output themselves.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing/logging with the standard defaults
/// (`info` unless `RUST_LOG` says otherwise).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    init_with_default("info");
}

/// Like [`init`], but with an explicit fallback filter for when `RUST_LOG`
/// is unset. Tests and one-off batch jobs use this to turn forecast debug
/// events on without touching the environment.
pub fn init_with_default(directives: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    // Flattened JSON lines: one object per event, fields at the top level,
    // which is what the log pipeline indexes on.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .flatten_event(true)
        .with_current_span(false)
        .try_init();
}
