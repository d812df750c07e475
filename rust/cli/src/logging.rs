//! Diagnostic logging for the `blackjack` binary.
//!
//! The engine emits `tracing` events (bets, cards dealt, settlements). The
//! binary routes them to stderr so they never mix with the game table on
//! stdout. The filter comes from `BLACKJACK_LOG`, then `RUST_LOG`, and
//! defaults to `warn`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "BLACKJACK_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Filter directives in effect for this process.
pub fn filter_directives() -> String {
    [LOG_ENV, "RUST_LOG"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Install the global stderr subscriber. Calling it twice is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_new(filter_directives())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
