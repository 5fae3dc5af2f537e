//! Tracing setup for applications embedding `trellis`.
//!
//! The layout crates only emit `tracing` events under the `trellis::layout`
//! and `trellis::tree` targets. [`install_tracing`] wires them to stderr.

use std::str::FromStr;
use std::sync::{Arc, Mutex, Once, OnceLock};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding an [`EnvFilter`] directive.
pub const LOG_ENV: &str = "TRELLIS_LOG";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

// ============================================================================
// Global State
// ============================================================================

static TRACING_INSTALLED: Once = Once::new();
static LOG_LEVEL: OnceLock<Arc<Mutex<LevelFilter>>> = OnceLock::new();

fn get_log_level_handle() -> Arc<Mutex<LevelFilter>> {
    LOG_LEVEL
        .get_or_init(|| Arc::new(Mutex::new(DEFAULT_LOG_LEVEL)))
        .clone()
}

/// Caps the level of events that reach the installed subscriber.
///
/// Unknown level names fall back to `info`.
pub fn set_log_level(level: &str) {
    let parsed = LevelFilter::from_str(level).unwrap_or(DEFAULT_LOG_LEVEL);
    if let Ok(mut guard) = get_log_level_handle().lock() {
        *guard = parsed;
    }
}

/// The level cap set by [`set_log_level`].
#[must_use]
pub fn log_level() -> LevelFilter {
    get_log_level_handle()
        .lock()
        .map_or(DEFAULT_LOG_LEVEL, |guard| *guard)
}

// ============================================================================
// Installation
// ============================================================================

/// Installs a stderr subscriber (idempotent).
///
/// Directives come from `TRELLIS_LOG` and default to `info`; the cap from
/// [`set_log_level`] applies on top and can change at any time.
pub fn install_tracing() {
    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
        let level = get_log_level_handle();

        let console = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(filter)
            .with_filter(filter_fn(move |metadata| {
                level
                    .lock()
                    .map_or(true, |guard| *metadata.level() <= *guard)
            }));

        if tracing_subscriber::registry()
            .with(console)
            .try_init()
            .is_err()
        {
            eprintln!("trellis: a global tracing subscriber is already installed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parses_and_falls_back() {
        set_log_level("debug");
        assert_eq!(log_level(), LevelFilter::DEBUG);

        set_log_level("chatty");
        assert_eq!(log_level(), LevelFilter::INFO);

        set_log_level("off");
        assert_eq!(log_level(), LevelFilter::OFF);
        set_log_level("info");
    }

    #[test]
    fn install_is_idempotent() {
        install_tracing();
        install_tracing();
        tracing::info!(target: "trellis::tree", "subscriber ready");
    }
}
