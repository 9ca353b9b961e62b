//! File-backed tracing setup.
//!
//! The terminal is owned by the TUI, so log output goes to a file when a
//! path is configured and is discarded otherwise. The filter honors
//! `RUST_LOG` with an `info` default.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber writing to `log_file`.
///
/// Call at most once, before the TUI starts. When `log_file` is None this
/// is a no-op and tracing events are dropped.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("logging initialized");
    Ok(())
}
