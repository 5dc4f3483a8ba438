use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_DRAFT_TEXT, DRAFT_FILE_NAME};
use crate::error::PersistenceError;

/// Keeps the last request draft between runs
#[derive(Clone, Debug)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Draft file in the user's home directory
    pub fn new() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Storage::with_path(home.join(DRAFT_FILE_NAME))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Storage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved draft, or the default draft when none can be read
    pub fn load_text(&self) -> String {
        match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "No saved draft");
                String::from(DEFAULT_DRAFT_TEXT)
            }
        }
    }

    pub fn try_save_text(&self, text: &str) -> Result<(), PersistenceError> {
        fs::write(&self.path, text).map_err(|source| PersistenceError {
            path: self.path.clone(),
            source,
        })
    }

    /// Best-effort save; failures are only logged
    pub fn save_text(&self, text: &str) {
        if let Err(e) = self.try_save_text(text) {
            tracing::warn!(error = %e, "Draft not saved");
        }
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}
