//! Rating calculator trait and the Matboj formula
//!
//! The formula gives the winner `bonus - gap / divisor` points and takes the
//! same amount from the loser, where `gap` is the winner's rank minus the
//! loser's. Upsets (winner ranked lower) therefore move ranks further. There is
//! no clamp; ranks may go negative.

use crate::config::RatingConfig;
use crate::error::{MatbojError, Result};
use crate::types::RankUpdate;

/// Trait for calculating new ranks after a single match
pub trait RatingCalculator: Send + Sync {
    /// Compute both new ranks from the current winner and loser ranks
    fn calculate(&self, winner_rank: f64, loser_rank: f64) -> RankUpdate;

    /// Rank assigned to participants that have not played yet
    fn initial_rank(&self) -> f64;
}

/// The Matboj rank adjustment
#[derive(Debug, Clone, Default)]
pub struct MatbojFormula {
    config: RatingConfig,
}

impl MatbojFormula {
    /// Create a formula from validated configuration
    pub fn new(config: RatingConfig) -> Result<Self> {
        if !config.gap_divisor.is_finite() || config.gap_divisor <= 0.0 {
            return Err(MatbojError::ConfigurationError {
                message: "Gap divisor must be positive".to_string(),
            });
        }
        if !config.win_bonus.is_finite() || !config.initial_rank.is_finite() {
            return Err(MatbojError::ConfigurationError {
                message: "Rating parameters must be finite".to_string(),
            });
        }

        Ok(Self { config })
    }

    pub fn config(&self) -> &RatingConfig {
        &self.config
    }
}

impl RatingCalculator for MatbojFormula {
    fn calculate(&self, winner_rank: f64, loser_rank: f64) -> RankUpdate {
        let bonus = self.config.win_bonus;
        let divisor = self.config.gap_divisor;

        // Each side subtracts its own gap to the other; keep the operand order
        // so results match previously saved game states exactly.
        RankUpdate {
            new_winner_rank: winner_rank + bonus - (winner_rank - loser_rank) / divisor,
            new_loser_rank: loser_rank - bonus - (loser_rank - winner_rank) / divisor,
        }
    }

    fn initial_rank(&self) -> f64 {
        self.config.initial_rank
    }
}
