//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the envcheck tracing/logging system.
///
/// Reads `ENVCHECK_LOG` for filter directives, e.g.
/// `ENVCHECK_LOG=envcheck_analysis=debug`. Falls back to `fallback`
/// (normally [`DEFAULT_LOG_FILTER`](crate::constants::DEFAULT_LOG_FILTER))
/// when the variable is unset or invalid.
///
/// Output goes to stderr so the report on stdout stays machine-readable.
/// Calling this more than once is a no-op.
pub fn init_tracing(fallback: &str) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(filter)
            .init();
    });
}
