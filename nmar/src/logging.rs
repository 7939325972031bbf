//! Tracing setup for the `nmar` binary.
//!
//! Module lifecycle events reach the subscriber through
//! [`crate::io::tracing_log::TracingLog`]. Reports printed by `nmar run` go to
//! stdout and are unaffected by the filter.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (from `nmar.toml`)
/// applies. Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=nmar=debug nmar run MetaReasoning
/// ```
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
