//! Subscriber setup for the `immunet` binary and tests.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Install the global subscriber. Later calls are no-ops.
///
/// Events go to stderr; stdout carries only run results. Levels come from
/// [`env_filter`], e.g. `IMMUNET_LOG=immunet_engine::selection=debug`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true),
            )
            .with(env_filter())
            .try_init();
    });
}

/// Filter from `IMMUNET_LOG`, or `immunet=info` when it is unset or does
/// not parse.
pub fn env_filter() -> EnvFilter {
    match std::env::var(LOG_ENV_VAR) {
        Ok(directives) => EnvFilter::try_new(&directives).unwrap_or_else(|e| {
            eprintln!("ignoring invalid {LOG_ENV_VAR}: {e}");
            EnvFilter::new(DEFAULT_LOG_FILTER)
        }),
        Err(_) => EnvFilter::new(DEFAULT_LOG_FILTER),
    }
}
