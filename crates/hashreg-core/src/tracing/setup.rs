//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "HASHREG_LOG";

/// Filter applied when `HASHREG_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "hashreg=info";

static INIT: Once = Once::new();

/// Initialize the hashreg tracing/logging system.
///
/// Reads `HASHREG_LOG` for per-module log levels, e.g.
/// `HASHREG_LOG=hashreg_gen=debug`. Falls back to `hashreg=info`.
///
/// Events are written to stderr so generated output on stdout stays clean.
/// Calling this more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
