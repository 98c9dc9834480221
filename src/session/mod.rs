//! A running leaderboard: rank engine plus the storage it is saved to
//!
//! Every successful match and undo is followed by a save when autosave is on.
//! A failed save is returned as [`MatbojError::Persistence`]; the in-memory
//! leaderboard keeps the change and stays usable.

use crate::error::{MatbojError, Result};
use crate::ledger::RankEngine;
use crate::rating::{MatbojFormula, RatingCalculator};
use crate::storage::{GameState, StateStorage};
use crate::types::{HistoryEntry, MatchRecord, MatchResult, RankingEntry, UndoOutcome};
use std::sync::Arc;
use tracing::{error, info};

pub struct Matboj<C: RatingCalculator + Clone = MatbojFormula> {
    engine: RankEngine<C>,
    storage: Arc<dyn StateStorage>,
    autosave: bool,
}

impl<C: RatingCalculator + Clone> Matboj<C> {
    pub fn new(engine: RankEngine<C>, storage: Arc<dyn StateStorage>, autosave: bool) -> Self {
        Self {
            engine,
            storage,
            autosave,
        }
    }

    /// Start from the last saved state instead of a fresh roster
    pub fn resume(storage: Arc<dyn StateStorage>, calculator: C, autosave: bool) -> Result<Self> {
        let state = storage.load()?.ok_or_else(|| MatbojError::Persistence {
            message: format!("No saved game state at {}", storage.location()),
        })?;
        let engine = state.into_engine(calculator)?;

        info!(
            "Resumed {} participants and {} matches from {}",
            engine.store().len(),
            engine.ledger().len(),
            storage.location()
        );

        Ok(Self::new(engine, storage, autosave))
    }

    /// Report a match outcome; see [`RankEngine::record_match`]
    pub fn record_match(&mut self, winner_name: &str, loser_name: &str) -> Result<MatchResult> {
        let result = self.engine.record_match(winner_name, loser_name)?;
        self.autosave()?;
        Ok(result)
    }

    /// The match an undo at `position` would retract
    pub fn preview_undo(&self, position: usize) -> Result<MatchRecord> {
        self.engine.preview_undo(position).cloned()
    }

    /// Retract the match at `position` and replay the ones after it
    pub fn commit_undo(&mut self, position: usize) -> Result<UndoOutcome> {
        let outcome = self.engine.commit_undo(position)?;
        self.autosave()?;
        Ok(outcome)
    }

    pub fn ranking(&self) -> Vec<RankingEntry> {
        self.engine.ranking()
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        self.engine.history()
    }

    /// Write the current state to storage
    pub fn save(&self) -> Result<()> {
        let state = GameState::capture(&self.engine);
        self.storage.save(&state).map_err(|e| {
            error!("Failed to save game state to {}: {}", self.storage.location(), e);
            e
        })
    }

    /// Replace the current state with the last saved one
    ///
    /// The current state is kept if nothing was saved or the saved state is invalid.
    pub fn load(&mut self) -> Result<()> {
        let state = self.storage.load()?.ok_or_else(|| MatbojError::Persistence {
            message: format!("No saved game state at {}", self.storage.location()),
        })?;
        self.engine = state.into_engine(self.engine.calculator().clone())?;

        info!(
            "Loaded {} matches from {}",
            self.engine.ledger().len(),
            self.storage.location()
        );
        Ok(())
    }

    fn autosave(&self) -> Result<()> {
        if self.autosave {
            self.save()?;
        }
        Ok(())
    }

    pub fn engine(&self) -> &RankEngine<C> {
        &self.engine
    }

    pub fn storage_location(&self) -> String {
        self.storage.location()
    }
}
