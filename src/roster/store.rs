//! Name-keyed participant storage with a ranked view

use crate::error::{MatbojError, Result};
use crate::types::{name_key, Participant, RankingEntry};
use std::collections::HashMap;
use tracing::debug;

/// Owns the roster in insertion order and indexes it by case-folded name
#[derive(Debug, Clone, Default)]
pub struct ParticipantStore {
    participants: Vec<Participant>,
    index: HashMap<String, usize>,
}

impl ParticipantStore {
    /// Create one participant per name, all at `initial_rank` with empty history
    pub fn load<I, S>(names: I, initial_rank: f64) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_participants(
            names
                .into_iter()
                .map(|name| Participant::new(name, initial_rank)),
        )
    }

    /// Rebuild a store from existing participants, keeping their order and history
    pub fn from_participants<I>(participants: I) -> Result<Self>
    where
        I: IntoIterator<Item = Participant>,
    {
        let mut store = Self::default();
        for participant in participants {
            store.insert(participant)?;
        }

        debug!("Loaded {} participants", store.len());
        Ok(store)
    }

    fn insert(&mut self, participant: Participant) -> Result<()> {
        if participant.name.trim().is_empty() {
            return Err(MatbojError::EmptyParticipantName);
        }

        let key = name_key(&participant.name);
        if self.index.contains_key(&key) {
            return Err(MatbojError::DuplicateParticipant {
                name: participant.name,
            });
        }

        self.index.insert(key, self.participants.len());
        self.participants.push(participant);
        Ok(())
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.index
            .get(&name_key(name))
            .copied()
            .ok_or_else(|| MatbojError::UnknownParticipant {
                name: name.to_string(),
            })
    }

    /// Find a participant by case-insensitive name
    pub fn lookup(&self, name: &str) -> Result<&Participant> {
        let position = self.position(name)?;
        Ok(&self.participants[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&name_key(name))
    }

    /// Push the participant's current rank onto its history and set the new rank
    pub fn apply_rank_change(&mut self, name: &str, new_rank: f64) -> Result<()> {
        let position = self.position(name)?;
        self.participants[position].update_rank(new_rank);
        Ok(())
    }

    /// Restore the participant's previous rank, returning it
    pub fn revert_last_change(&mut self, name: &str) -> Result<f64> {
        let position = self.position(name)?;
        let participant = &mut self.participants[position];
        if !participant.undo() {
            return Err(MatbojError::NothingToUndo);
        }
        Ok(participant.rank)
    }

    /// Participants by descending rank; ties keep roster order
    pub fn ranked_view(&self) -> Vec<RankingEntry> {
        self.ranked_participants()
            .into_iter()
            .enumerate()
            .map(|(i, participant)| RankingEntry {
                position: i + 1,
                name: participant.name.clone(),
                rank: participant.rank,
            })
            .collect()
    }

    /// Participants by descending rank, including their history
    pub fn ranked_participants(&self) -> Vec<&Participant> {
        let mut ranked: Vec<&Participant> = self.participants.iter().collect();
        // sort_by is stable, so equal ranks stay in roster order
        ranked.sort_by(|a, b| {
            b.rank
                .partial_cmp(&a.rank)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }

    /// Participants in roster order
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
