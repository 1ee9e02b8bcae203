//! Persisted preferences.
//!
//! Exactly one thing survives a session: whether the user has completed
//! onboarding. Everything else (options, history, quota, selection) is
//! memory-only and starts fresh. The flag lives in a small JSON file
//! written atomically (temp file, then rename), and loading is tolerant: a
//! missing or unreadable file just means onboarding has not happened yet.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Failure while saving preferences. Loading never fails.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The persisted flags.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefs {
    /// Whether the onboarding tutorial has been completed.
    pub onboarding_completed: bool,
    /// Unix epoch seconds when onboarding finished.
    pub completed_at: Option<u64>,
}

/// Reads and writes [`Prefs`] at a fixed path.
#[derive(Debug, Clone)]
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    /// Store backed by the given file. Nothing is touched until the first
    /// save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted prefs. A missing, unreadable, or malformed file
    /// yields the defaults; corruption is logged, never surfaced.
    pub fn load(&self) -> Prefs {
        if !self.path.exists() {
            return Prefs::default();
        }
        match std::fs::read_to_string(&self.path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(prefs) => prefs,
                Err(e) => {
                    warn!("Ignoring malformed prefs at {}: {e}", self.path.display());
                    Prefs::default()
                }
            },
            Err(e) => {
                warn!("Ignoring unreadable prefs at {}: {e}", self.path.display());
                Prefs::default()
            }
        }
    }

    /// Atomic write: serialize to a temp file, then rename into place.
    pub fn save(&self, prefs: &Prefs) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let tmp_path = self.tmp_path();
        let json = serde_json::to_string_pretty(prefs)?;
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Marks onboarding as completed now and persists. Returns the saved
    /// prefs.
    pub fn mark_onboarding_completed(&self) -> Result<Prefs, StorageError> {
        let mut prefs = self.load();
        prefs.onboarding_completed = true;
        prefs.completed_at = Some(epoch_secs());
        self.save(&prefs)?;
        Ok(prefs)
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "prefs.json".into());
        self.path.with_file_name(format!(".{name}.tmp"))
    }
}

/// Current unix epoch in seconds.
fn epoch_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
