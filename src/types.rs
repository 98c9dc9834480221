//! Common types used throughout the leaderboard

use serde::{Deserialize, Serialize};

/// Display name of a participant, as written in the roster
pub type ParticipantName = String;

/// Rank every participant starts from
pub const DEFAULT_RANK: f64 = 1000.0;

/// Lookup key for a participant name; names match case-insensitively
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}

/// A competitor with a current rank and the stack of ranks it replaced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub name: ParticipantName,
    pub rank: f64,
    /// Previous ranks, most recent last. One entry per rating change not yet undone.
    #[serde(rename = "old_ranks", default)]
    pub rank_history: Vec<f64>,
}

impl Participant {
    /// Create a participant at the given starting rank with no history
    pub fn new(name: impl Into<ParticipantName>, rank: f64) -> Self {
        Self {
            name: name.into(),
            rank,
            rank_history: Vec::new(),
        }
    }

    /// Push the current rank onto the history and adopt the new one
    pub fn update_rank(&mut self, new_rank: f64) {
        self.rank_history.push(self.rank);
        self.rank = new_rank;
    }

    /// Restore the most recently replaced rank; returns false if there is none
    pub fn undo(&mut self) -> bool {
        match self.rank_history.pop() {
            Some(previous) => {
                self.rank = previous;
                true
            }
            None => false,
        }
    }

    /// Number of rating changes applied and not undone
    pub fn games_played(&self) -> usize {
        self.rank_history.len()
    }
}

/// One reported outcome. Names are canonical roster names, never raw input.
///
/// Persisted as a `[winner, loser]` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    from = "(ParticipantName, ParticipantName)",
    into = "(ParticipantName, ParticipantName)"
)]
pub struct MatchRecord {
    pub winner_name: ParticipantName,
    pub loser_name: ParticipantName,
}

impl MatchRecord {
    pub fn new(winner_name: impl Into<ParticipantName>, loser_name: impl Into<ParticipantName>) -> Self {
        Self {
            winner_name: winner_name.into(),
            loser_name: loser_name.into(),
        }
    }

    /// Whether the participant took part in this match (case-insensitive)
    pub fn involves(&self, name: &str) -> bool {
        let key = name_key(name);
        name_key(&self.winner_name) == key || name_key(&self.loser_name) == key
    }
}

impl From<(ParticipantName, ParticipantName)> for MatchRecord {
    fn from((winner_name, loser_name): (ParticipantName, ParticipantName)) -> Self {
        Self {
            winner_name,
            loser_name,
        }
    }
}

impl From<MatchRecord> for (ParticipantName, ParticipantName) {
    fn from(record: MatchRecord) -> Self {
        (record.winner_name, record.loser_name)
    }
}

impl std::fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.winner_name, self.loser_name)
    }
}

/// Ranks of both sides after a match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankUpdate {
    pub new_winner_rank: f64,
    pub new_loser_rank: f64,
}

/// Outcome of a successfully recorded match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub record: MatchRecord,
    pub old_winner_rank: f64,
    pub old_loser_rank: f64,
    pub update: RankUpdate,
}

/// One row of a ranking snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// 1-based place on the leaderboard
    pub position: usize,
    pub name: ParticipantName,
    pub rank: f64,
}

/// One row of the match history listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub record: MatchRecord,
    /// Distance from the end of the ledger; this is the position `undo` expects
    pub distance: usize,
}

/// Outcome of a committed undo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UndoOutcome {
    /// The retracted match
    pub removed: MatchRecord,
    /// Later matches that were re-applied, in chronological order
    pub replayed: Vec<MatchResult>,
}
