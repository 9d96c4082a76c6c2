//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Tether tracing/logging system.
///
/// Reads the `TETHER_LOG` environment variable for per-subsystem log levels.
/// Format: `TETHER_LOG=tether_wordsim=debug,tether_linker=info`
///
/// Falls back to `tether=info` if `TETHER_LOG` is not set or is invalid.
///
/// This function is idempotent; calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("TETHER_LOG")
            .unwrap_or_else(|_| EnvFilter::new("tether=info"));
        let active = filter.to_string();

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();

        tracing::debug!(filter = %active, "tracing initialized");
    });
}
