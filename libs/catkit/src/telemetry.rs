//! Process-wide tracing setup.

use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Install the global fmt subscriber.
///
/// Idempotent: repeated calls are no-ops, and losing the race against an
/// already-installed subscriber (as happens under test harnesses) is
/// tolerated. Filtering follows `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    if TRACING_INIT.get().is_some() {
        return;
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer();

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
    {
        tracing::debug!("tracing initialized");
    }

    TRACING_INIT.set(()).ok();
}
