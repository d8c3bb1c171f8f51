//! Sample scenarios for each pattern in `motif`.
//!
//! ## Structure
//!
//! - [`config`] - CLI/env configuration (`CliArgs` -> `DemoConfig`).
//! - [`scenario`] - one function per pattern, returning what it observed.
//! - [`telemetry`] - `tracing-subscriber` setup.

pub mod config;
pub mod scenario;
pub mod telemetry;

use config::{DemoConfig, Pattern};

/// Runs the scenarios selected by `config.pattern`.
pub fn run(config: &DemoConfig) -> anyhow::Result<()> {
    let all = config.pattern == Pattern::All;

    if all || config.pattern == Pattern::Queue {
        let drained = scenario::run_queue(&config.values);
        tracing::info!(count = drained.len(), "queue drained in FIFO order");
    }
    if all || config.pattern == Pattern::Chain {
        let dispatch = scenario::run_chain(config.request)?;
        tracing::info!(?dispatch, "chain finished");
    }
    if all || config.pattern == Pattern::Router {
        let dispatch = scenario::run_router(config.request)?;
        tracing::info!(?dispatch, "router finished");
    }
    if all || config.pattern == Pattern::Theme {
        let labels = scenario::run_themes(&config.label, &config.themes);
        tracing::info!(count = labels.len(), "labels styled");
    }
    Ok(())
}
