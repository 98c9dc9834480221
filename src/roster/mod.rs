//! Participant store and roster loading
//!
//! The store owns every participant; everything else refers to participants
//! by name and goes through the store to read or change a rank.

pub mod loader;
pub mod store;

// Re-export commonly used types
pub use loader::{load_roster, parse_roster};
pub use store::ParticipantStore;
