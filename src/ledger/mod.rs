//! Match ledger and rank engine
//!
//! The ledger is the chronological list of reported matches. The engine
//! applies the rating formula through the participant store, appends to the
//! ledger, and retracts past matches with undo-and-replay.

pub mod engine;
pub mod history;

// Re-export commonly used types
pub use engine::RankEngine;
pub use history::MatchLedger;
