//! Persisted form of the leaderboard

use crate::error::Result;
use crate::ledger::RankEngine;
use crate::rating::RatingCalculator;
use crate::types::{MatchRecord, Participant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything needed to rebuild an engine: ranks, rank histories and the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Participants by descending rank at save time
    pub people: Vec<Participant>,
    /// Matches in chronological order
    pub match_list: Vec<MatchRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl GameState {
    /// Snapshot an engine
    pub fn capture<C: RatingCalculator>(engine: &RankEngine<C>) -> Self {
        Self {
            people: engine
                .store()
                .ranked_participants()
                .into_iter()
                .cloned()
                .collect(),
            match_list: engine.ledger().records().to_vec(),
            saved_at: Some(Utc::now()),
        }
    }

    /// Rebuild an engine; roster order becomes the saved (ranked) order
    pub fn into_engine<C: RatingCalculator>(self, calculator: C) -> Result<RankEngine<C>> {
        RankEngine::from_parts(self.people, self.match_list, calculator)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }
}
