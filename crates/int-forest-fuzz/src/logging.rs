//! Process-wide `tracing` subscriber.

use std::sync::Once;

use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs a compact stderr subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; only the first call takes effect.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = make_filter(Level::INFO);
        // A subscriber installed elsewhere (e.g. by a test harness) wins.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init();
    });
}

fn make_filter(default_level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level.to_string()))
}
