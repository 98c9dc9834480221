//! Rank adjustment after a head-to-head match
//!
//! This module provides the rating calculator interface and the Matboj
//! formula used by the rank engine.

pub mod calculator;

// Re-export commonly used types
pub use calculator::{MatbojFormula, RatingCalculator};
