pub mod model;

use anyhow::{Context, Result};
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

pub use model::{DurationBounds, DurationConfig, PartialDurations};

/// Failure saving the duration blob. Never fatal: callers log it and keep
/// the in-memory configuration authoritative for the rest of the process.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize durations")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Storage backend for the duration configuration. The timer machine never
/// touches storage itself; the event loop owns a store and drives it, which
/// keeps the machine testable without any backend.
pub trait DurationStore {
    /// Load the persisted configuration. Infallible by design: missing,
    /// unparseable, or partially absent data degrades to (per-field)
    /// defaults.
    fn load(&self) -> DurationConfig;

    /// Persist the full configuration, replacing whatever was stored.
    fn save(&self, durations: &DurationConfig) -> Result<(), StoreError>;
}

/// File-backed store keeping the blob at
/// `<config_dir>/tomatui/durations.json`.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new() -> Self {
        Self::at(default_path())
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DurationStore for JsonFileStore {
    fn load(&self) -> DurationConfig {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return DurationConfig::default(),
        };
        match serde_json::from_str::<PartialDurations>(&contents) {
            Ok(partial) => partial.merged(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "malformed duration blob, using defaults");
                DurationConfig::default()
            }
        }
    }

    fn save(&self, durations: &DurationConfig) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let contents = serde_json::to_string_pretty(durations)?;
        std::fs::write(&self.path, contents).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tomatui")
        .join("durations.json")
}

/// Directory for runtime artifacts (the tracing log).
pub fn data_dir() -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tomatui");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_store(name: &str) -> JsonFileStore {
        let path = std::env::temp_dir()
            .join(format!("tomatui-test-{}-{}", name, std::process::id()))
            .join("durations.json");
        let _ = std::fs::remove_file(&path);
        JsonFileStore::at(path)
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let store = scratch_store("missing");
        assert_eq!(store.load(), DurationConfig::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = scratch_store("roundtrip");
        let cfg = DurationConfig {
            work: 45,
            short_break: 12,
            long_break: 25,
        };
        store.save(&cfg).unwrap();
        assert_eq!(store.load(), cfg);
    }

    #[test]
    fn test_load_garbage_gives_defaults() {
        let store = scratch_store("garbage");
        store.save(&DurationConfig::default()).unwrap();
        std::fs::write(store.path.as_path(), "{not json at all").unwrap();
        assert_eq!(store.load(), DurationConfig::default());
    }

    #[test]
    fn test_load_partial_blob_merges_defaults() {
        let store = scratch_store("partial");
        store.save(&DurationConfig::default()).unwrap();
        std::fs::write(store.path.as_path(), r#"{"work": 30, "shortBreak": 9}"#).unwrap();
        let cfg = store.load();
        assert_eq!(cfg.work, 30);
        assert_eq!(cfg.short_break, 9);
        assert_eq!(cfg.long_break, 15);
    }
}
