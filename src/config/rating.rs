//! Rating formula configuration

use serde::{Deserialize, Serialize};

use crate::types::DEFAULT_RANK;

/// Parameters of the rank adjustment applied after each match
///
/// With the defaults a winner gains `100 - gap / 3` and the loser drops by the
/// mirrored amount, where `gap` is the winner's rank minus the loser's.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Rank every participant starts with
    pub initial_rank: f64,
    /// Flat amount a win is worth between equally ranked participants
    pub win_bonus: f64,
    /// Divisor applied to the rank gap
    pub gap_divisor: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            initial_rank: DEFAULT_RANK,
            win_bonus: 100.0,
            gap_divisor: 3.0,
        }
    }
}
