// src/logging.rs

use std::sync::Once;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. The filter comes from `RUST_LOG` and
/// falls back to warnings only. Logs go to stderr so stdout carries
/// nothing but the configuration hand-off.
///
/// Later calls are ignored, which lets tests call this freely.
pub fn initialize() {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
