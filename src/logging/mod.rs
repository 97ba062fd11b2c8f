//! Diagnostic logging.
//!
//! The terminal is owned by the TUI, so tracing output goes to
//! `<data_dir>/tomatui/tomatui.log`. The filter is read from the
//! `TOMATUI_LOG` environment variable and defaults to `info`.

use anyhow::{Context, Result};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub fn init() -> Result<()> {
    let dir = crate::config::data_dir()?;
    let path = dir.join("tomatui.log");
    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env("TOMATUI_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
