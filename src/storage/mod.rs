//! Game state persistence
//!
//! This module defines the persisted game state, the storage interface, and
//! JSON file and in-memory implementations.

pub mod file;
pub mod memory;
pub mod state;

use crate::error::Result;

// Re-export commonly used types
pub use file::JsonFileStorage;
pub use memory::InMemoryStateStorage;
pub use state::GameState;

/// Trait for saving and loading the whole game state
pub trait StateStorage: Send + Sync {
    /// Persist the state, replacing whatever was stored before
    fn save(&self, state: &GameState) -> Result<()>;

    /// Load the last saved state, or `None` if nothing was saved yet
    fn load(&self) -> Result<Option<GameState>>;

    /// Human readable location, for messages and logs
    fn location(&self) -> String;
}
