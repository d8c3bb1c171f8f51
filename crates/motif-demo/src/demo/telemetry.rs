//! # Log output
//!
//! The demo installs a single `fmt` layer behind an [`EnvFilter`]. `motif` is
//! built with its `tracing` feature, so queue operations, handler dispatch and
//! theme application all show up here.
//!
//! ## Filtering
//!
//! - `RUST_LOG` picks the level, defaulting to `info`.
//! - `RUST_LOG=debug` adds the forwarding messages between chain links.
//! - `RUST_LOG=trace` adds a span per enqueue/dequeue and per dispatch.
//!
//! ## Example usage
//!
//! ```bash
//! RUST_LOG=debug cargo run -p motif-demo -- --pattern chain --request data
//! ```

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber. Fails if one is already set.
pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_line_number(true)
                .with_target(false),
        )
        .try_init()?;

    Ok(())
}
