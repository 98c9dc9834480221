//! Matboj - leaderboard keeper for head-to-head competitions
//!
//! This crate keeps a roster of participants with numeric ranks, applies the
//! Matboj rating formula after each reported match, and supports retracting
//! any past match with automatic replay of the matches reported after it.

pub mod command;
pub mod config;
pub mod error;
pub mod ledger;
pub mod rating;
pub mod roster;
pub mod session;
pub mod storage;
pub mod types;

// Re-export commonly used types and traits
pub use error::{MatbojError, Result};
pub use types::*;

// Re-export key components
pub use ledger::{MatchLedger, RankEngine};
pub use rating::{MatbojFormula, RatingCalculator};
pub use roster::ParticipantStore;
pub use session::Matboj;
pub use storage::{GameState, JsonFileStorage, StateStorage};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
