//! Shared setup for the `xsd-*` client binaries.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use xsd_valuespace_validator::ValueSpaceEngine;

/// Installs a stderr log subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Stdout is left to the binaries' own output.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Returns the process-wide engine over the standard catalogue.
///
/// # Errors
///
/// Returns an error if the standard rule table does not compose.
pub fn engine() -> Result<&'static ValueSpaceEngine<'static>> {
    Ok(ValueSpaceEngine::standard()?)
}
