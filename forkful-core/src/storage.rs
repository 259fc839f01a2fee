//! Persisted store snapshot.
//!
//! The whole preference state is serialized as one JSON document under a
//! fixed key. Loading falls back to the documented defaults when no snapshot
//! exists or it cannot be read; there is no migration or versioning of the
//! stored shape.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::prefs::PreferenceState;

/// Fixed key the snapshot is stored under.
pub const STORAGE_KEY: &str = "recipe-storage";

/// On-disk location of the store snapshot.
#[derive(Debug, Clone)]
pub struct StateStorage {
    data_dir: PathBuf,
}

impl StateStorage {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Get the default data directory: ~/.forkful
    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".forkful"))
            .unwrap_or_else(|| PathBuf::from("data"))
    }

    fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join(format!("{STORAGE_KEY}.json"))
    }

    /// Load the persisted state, falling back to defaults when absent or
    /// unreadable.
    pub fn load(&self) -> PreferenceState {
        let path = self.snapshot_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(state) => state,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "unreadable snapshot, using defaults");
                    PreferenceState::default()
                }
            },
            Err(_) => PreferenceState::default(),
        }
    }

    /// Persist the whole state as one snapshot.
    pub fn save(&self, state: &PreferenceState) -> io::Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        fs::write(
            self.snapshot_path(),
            serde_json::to_string_pretty(state).unwrap(),
        )
    }
}

impl Default for StateStorage {
    fn default() -> Self {
        Self::new(Self::default_dir())
    }
}
