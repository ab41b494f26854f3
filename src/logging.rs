//! Diagnostic logging setup for the binary.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static TRACING_INIT: Once = Once::new();

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "SHELLWORDS_LOG";

/// Initialize tracing on stderr.
///
/// `SHELLWORDS_LOG` wins over `fallback`; with neither set nothing is
/// installed. Safe to call multiple times.
pub fn init_tracing(fallback: Option<&str>) {
    TRACING_INIT.call_once(|| {
        let directive = std::env::var(LOG_ENV)
            .ok()
            .or_else(|| fallback.map(String::from));
        let Some(directive) = directive else {
            return;
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::new(directive))
            .init();
    });
}
