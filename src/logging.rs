//! Console logging for the binary and demos.
//!
//! Filtering follows `RUST_LOG`, e.g. `RUST_LOG=scatterplot=debug` to see rejected
//! input lines and selection changes. Without it only warnings and errors are shown.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install the global tracing subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    // try_init: a second call (e.g. from an embedding application) is a no-op
    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
