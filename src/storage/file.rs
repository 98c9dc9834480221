//! JSON file storage

use crate::error::Result;
use crate::storage::{GameState, StateStorage};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stores the game state as a single pretty-printed JSON document
///
/// Writes go to a `.tmp` sibling that is then renamed over the target.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl StateStorage for JsonFileStorage {
    fn save(&self, state: &GameState) -> Result<()> {
        let contents = state.to_json()?;
        let temp_path = self.temp_path();

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&temp_path, contents)?;
        fs::rename(&temp_path, &self.path)?;

        debug!(
            "Saved {} participants and {} matches to {}",
            state.people.len(),
            state.match_list.len(),
            self.path.display()
        );

        Ok(())
    }

    fn load(&self) -> Result<Option<GameState>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        let state = GameState::from_json(&contents)?;

        debug!(
            "Loaded {} participants and {} matches from {}",
            state.people.len(),
            state.match_list.len(),
            self.path.display()
        );

        Ok(Some(state))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
