//! In-memory storage, for tests and for running without a state file

use crate::error::{MatbojError, Result};
use crate::storage::{GameState, StateStorage};
use std::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryStateStorage {
    state: RwLock<Option<GameState>>,
    save_count: RwLock<usize>,
}

impl InMemoryStateStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful saves (for testing)
    pub fn save_count(&self) -> usize {
        self.save_count.read().map(|count| *count).unwrap_or_default()
    }
}

impl StateStorage for InMemoryStateStorage {
    fn save(&self, state: &GameState) -> Result<()> {
        let mut stored = self.state.write().map_err(|_| MatbojError::Persistence {
            message: "Failed to acquire state write lock".to_string(),
        })?;
        let mut count = self.save_count.write().map_err(|_| MatbojError::Persistence {
            message: "Failed to acquire save counter write lock".to_string(),
        })?;

        *stored = Some(state.clone());
        *count += 1;
        Ok(())
    }

    fn load(&self) -> Result<Option<GameState>> {
        let stored = self.state.read().map_err(|_| MatbojError::Persistence {
            message: "Failed to acquire state read lock".to_string(),
        })?;
        Ok(stored.clone())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
