//! Rank engine: applies match outcomes and retracts them with replay
//!
//! Retracting a match that is not the most recent one cannot just restore old
//! ranks: later matches were rated against ranks that included the retracted
//! result. The engine therefore unwinds every later match, drops the target,
//! and records the later matches again so their ranks are recomputed from the
//! corrected baseline.

use crate::error::{MatbojError, Result};
use crate::ledger::MatchLedger;
use crate::rating::{MatbojFormula, RatingCalculator};
use crate::roster::ParticipantStore;
use crate::types::{
    name_key, HistoryEntry, MatchRecord, MatchResult, Participant, RankingEntry, UndoOutcome,
};
use tracing::{debug, info, warn};

/// Participant store, match ledger and rating formula bundled together
#[derive(Debug, Clone)]
pub struct RankEngine<C: RatingCalculator = MatbojFormula> {
    store: ParticipantStore,
    ledger: MatchLedger,
    calculator: C,
}

impl RankEngine<MatbojFormula> {
    /// Engine over a fresh roster using the default formula
    pub fn with_roster<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_roster(names, MatbojFormula::default())
    }
}

impl<C: RatingCalculator> RankEngine<C> {
    /// Engine over a fresh roster; everyone starts at the calculator's initial rank
    pub fn from_roster<I, S>(names: I, calculator: C) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = ParticipantStore::load(names, calculator.initial_rank())?;
        Ok(Self {
            store,
            ledger: MatchLedger::new(),
            calculator,
        })
    }

    /// Engine over previously saved participants and matches
    ///
    /// Every match must name known participants, and each participant must
    /// have exactly one history entry per match it took part in, otherwise
    /// undo could not unwind the ledger.
    pub fn from_parts(
        participants: Vec<Participant>,
        records: Vec<MatchRecord>,
        calculator: C,
    ) -> Result<Self> {
        let store = ParticipantStore::from_participants(participants).map_err(|e| match e {
            MatbojError::DuplicateParticipant { name } => MatbojError::CorruptState {
                reason: format!("participant '{}' appears twice", name),
            },
            other => other,
        })?;

        for record in &records {
            for name in [&record.winner_name, &record.loser_name] {
                if !store.contains(name) {
                    return Err(MatbojError::CorruptState {
                        reason: format!("match {} names unknown participant '{}'", record, name),
                    });
                }
            }
            if name_key(&record.winner_name) == name_key(&record.loser_name) {
                return Err(MatbojError::CorruptState {
                    reason: format!("match {} has the same winner and loser", record),
                });
            }
        }

        let ledger = MatchLedger::from_records(records);
        for participant in store.participants() {
            let played = ledger.involvement_count(&participant.name);
            if participant.rank_history.len() != played {
                return Err(MatbojError::CorruptState {
                    reason: format!(
                        "'{}' has {} previous ranks but played {} matches",
                        participant.name,
                        participant.rank_history.len(),
                        played
                    ),
                });
            }
        }

        Ok(Self {
            store,
            ledger,
            calculator,
        })
    }

    /// Apply a match outcome and append it to the ledger
    ///
    /// Both names are resolved before anything changes, winner first. The
    /// ledger stores the roster spelling of each name.
    pub fn record_match(&mut self, winner_name: &str, loser_name: &str) -> Result<MatchResult> {
        let result = self.apply_match(winner_name, loser_name)?;

        info!(
            "Recorded {} - {}: {:.1} -> {:.1}, {}: {:.1} -> {:.1}",
            result.record,
            result.record.winner_name,
            result.old_winner_rank,
            result.update.new_winner_rank,
            result.record.loser_name,
            result.old_loser_rank,
            result.update.new_loser_rank
        );

        Ok(result)
    }

    fn apply_match(&mut self, winner_name: &str, loser_name: &str) -> Result<MatchResult> {
        let winner = self.store.lookup(winner_name)?;
        let loser = self.store.lookup(loser_name)?;

        if name_key(&winner.name) == name_key(&loser.name) {
            return Err(MatbojError::InvalidMatch {
                name: winner.name.clone(),
            });
        }

        let record = MatchRecord::new(winner.name.clone(), loser.name.clone());
        let old_winner_rank = winner.rank;
        let old_loser_rank = loser.rank;
        let update = self.calculator.calculate(old_winner_rank, old_loser_rank);

        self.store
            .apply_rank_change(&record.winner_name, update.new_winner_rank)?;
        self.store
            .apply_rank_change(&record.loser_name, update.new_loser_rank)?;
        self.ledger.push(record.clone());

        Ok(MatchResult {
            record,
            old_winner_rank,
            old_loser_rank,
            update,
        })
    }

    /// The match `undo(position)` would retract, without changing anything
    pub fn preview_undo(&self, position: usize) -> Result<&MatchRecord> {
        self.ledger.from_end(position)
    }

    /// Retract the match at `position` (1 = most recent) and replay later matches
    pub fn commit_undo(&mut self, position: usize) -> Result<UndoOutcome> {
        if let Err(e) = self.preview_undo(position) {
            warn!("Undo at position {} rejected: {}", position, e);
            return Err(e);
        }

        // Unwind everything after the target, most recent first
        let mut redo_buffer = Vec::with_capacity(position - 1);
        for _ in 1..position {
            let record = self.pop_and_revert()?;
            redo_buffer.push(record);
        }

        let removed = self.pop_and_revert()?;
        info!("Undid match {} at position {}", removed, position);

        // Re-record later matches oldest first so ranks follow the corrected baseline
        let mut replayed = Vec::with_capacity(redo_buffer.len());
        for record in redo_buffer.into_iter().rev() {
            let result = self.apply_match(&record.winner_name, &record.loser_name)?;
            debug!(
                "Replayed match {}: {} -> {:.1}, {} -> {:.1}",
                result.record,
                result.record.winner_name,
                result.update.new_winner_rank,
                result.record.loser_name,
                result.update.new_loser_rank
            );
            replayed.push(result);
        }

        Ok(UndoOutcome { removed, replayed })
    }

    fn pop_and_revert(&mut self) -> Result<MatchRecord> {
        let record = self.ledger.pop().ok_or(MatbojError::NothingToUndo)?;
        self.store.revert_last_change(&record.winner_name)?;
        self.store.revert_last_change(&record.loser_name)?;
        Ok(record)
    }

    /// Current leaderboard, highest rank first
    pub fn ranking(&self) -> Vec<RankingEntry> {
        self.store.ranked_view()
    }

    /// All recorded matches, oldest first, with their undo position
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.ledger.entries()
    }

    pub fn lookup(&self, name: &str) -> Result<&Participant> {
        self.store.lookup(name)
    }

    pub fn store(&self) -> &ParticipantStore {
        &self.store
    }

    pub fn ledger(&self) -> &MatchLedger {
        &self.ledger
    }

    pub fn calculator(&self) -> &C {
        &self.calculator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing::Level;

    fn create_test_engine() -> RankEngine {
        RankEngine::with_roster(["A", "B", "C", "D"]).unwrap()
    }

    fn rank(engine: &RankEngine, name: &str) -> f64 {
        engine.lookup(name).unwrap().rank
    }

    #[test]
    fn test_record_match_applies_formula() {
        let mut engine = create_test_engine();
        let result = engine.record_match("a", "b").unwrap();

        assert_eq!(result.record, MatchRecord::new("A", "B"));
        assert_eq!(rank(&engine, "A"), 1100.0);
        assert_eq!(rank(&engine, "B"), 900.0);
        assert_eq!(engine.lookup("A").unwrap().rank_history, vec![1000.0]);
        assert_eq!(engine.ledger().len(), 1);
    }

    #[test]
    fn test_unknown_winner_reported_before_loser() {
        let mut engine = create_test_engine();
        match engine.record_match("Zz", "Yy") {
            Err(MatbojError::UnknownParticipant { name }) => assert_eq!(name, "Zz"),
            other => panic!("expected UnknownParticipant, got {:?}", other),
        }
        match engine.record_match("A", "Yy") {
            Err(MatbojError::UnknownParticipant { name }) => assert_eq!(name, "Yy"),
            other => panic!("expected UnknownParticipant, got {:?}", other),
        }
        assert!(engine.ledger().is_empty());
        assert_eq!(rank(&engine, "A"), 1000.0);
    }

    #[test]
    fn test_self_match_rejected_regardless_of_case() {
        let mut engine = create_test_engine();
        assert!(matches!(
            engine.record_match("A", "a"),
            Err(MatbojError::InvalidMatch { .. })
        ));
        assert!(engine.ledger().is_empty());
        assert!(engine.lookup("A").unwrap().rank_history.is_empty());
    }

    #[test]
    fn test_undo_most_recent_restores_previous_ranks() {
        let mut engine = create_test_engine();
        engine.record_match("A", "B").unwrap();
        engine.record_match("B", "C").unwrap();

        let outcome = engine.commit_undo(1).unwrap();
        assert_eq!(outcome.removed, MatchRecord::new("B", "C"));
        assert!(outcome.replayed.is_empty());
        assert_eq!(rank(&engine, "B"), 900.0);
        assert_eq!(rank(&engine, "C"), 1000.0);
        assert_eq!(engine.lookup("B").unwrap().rank_history.len(), 1);
        assert_eq!(engine.lookup("C").unwrap().rank_history.len(), 0);
    }

    #[test]
    fn test_mid_history_undo_replays_with_corrected_ranks() {
        let mut engine = create_test_engine();
        engine.record_match("A", "B").unwrap();
        engine.record_match("C", "D").unwrap();
        engine.record_match("A", "C").unwrap();

        assert_eq!(engine.preview_undo(2).unwrap(), &MatchRecord::new("C", "D"));
        let outcome = engine.commit_undo(2).unwrap();
        assert_eq!(outcome.removed, MatchRecord::new("C", "D"));
        assert_eq!(outcome.replayed.len(), 1);

        assert_eq!(
            engine.ledger().records(),
            &[MatchRecord::new("A", "B"), MatchRecord::new("A", "C")]
        );

        // A beats C is re-rated from A=1100, C=1000 instead of C=1100
        let expected_a = 1100.0 + 100.0 - (1100.0 - 1000.0) / 3.0;
        let expected_c = 1000.0 - 100.0 - (1000.0 - 1100.0) / 3.0;
        assert_eq!(rank(&engine, "A"), expected_a);
        assert_eq!(rank(&engine, "C"), expected_c);
        assert_eq!(rank(&engine, "B"), 900.0);
        assert_eq!(rank(&engine, "D"), 1000.0);
        assert!(engine.lookup("D").unwrap().rank_history.is_empty());
        assert_eq!(engine.lookup("A").unwrap().rank_history, vec![1000.0, 1100.0]);
    }

    #[test]
    fn test_undo_validation_leaves_state_untouched() {
        let mut engine = create_test_engine();
        assert!(matches!(engine.commit_undo(1), Err(MatbojError::NothingToUndo)));

        engine.record_match("A", "B").unwrap();
        assert!(matches!(
            engine.commit_undo(2),
            Err(MatbojError::PositionOutOfRange {
                requested: 2,
                available: 1
            })
        ));
        assert!(matches!(engine.commit_undo(0), Err(MatbojError::InvalidPosition)));
        assert_eq!(engine.ledger().len(), 1);
        assert_eq!(rank(&engine, "A"), 1100.0);
    }

    #[test]
    fn test_undo_everything_restores_initial_state() {
        let mut engine = create_test_engine();
        for (w, l) in [("A", "B"), ("C", "D"), ("B", "C"), ("D", "A"), ("A", "C")] {
            engine.record_match(w, l).unwrap();
        }
        while !engine.ledger().is_empty() {
            engine.commit_undo(1).unwrap();
        }
        for participant in engine.store().participants() {
            assert_eq!(participant.rank, 1000.0);
            assert!(participant.rank_history.is_empty());
        }
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture_logs(level: Level, f: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_replayed_matches_log_only_at_debug() {
        let mut engine = create_test_engine();
        engine.record_match("A", "B").unwrap();
        engine.record_match("C", "D").unwrap();
        engine.record_match("A", "C").unwrap();

        let mut info_engine = engine.clone();
        let info_logs = capture_logs(Level::INFO, || {
            info_engine.commit_undo(2).unwrap();
        });
        assert!(info_logs.contains("Undid match C:D"));
        assert!(!info_logs.contains("Recorded"));
        assert!(!info_logs.contains("Replayed"));

        let debug_logs = capture_logs(Level::DEBUG, || {
            engine.commit_undo(2).unwrap();
        });
        assert!(debug_logs.contains("Replayed match A:C"));
        assert!(!debug_logs.contains("Recorded"));
    }

    #[test]
    fn test_from_parts_rejects_inconsistent_history() {
        let participants = vec![
            Participant {
                name: "A".to_string(),
                rank: 1100.0,
                rank_history: vec![1000.0],
            },
            Participant::new("B", 900.0),
        ];
        let records = vec![MatchRecord::new("A", "B")];
        let result = RankEngine::from_parts(participants, records, MatbojFormula::default());
        assert!(matches!(result, Err(MatbojError::CorruptState { .. })));
    }

    #[test]
    fn test_from_parts_rejects_unknown_names() {
        let participants = vec![Participant::new("A", 1000.0)];
        let records = vec![MatchRecord::new("A", "Ghost")];
        let result = RankEngine::from_parts(participants, records, MatbojFormula::default());
        assert!(matches!(result, Err(MatbojError::CorruptState { .. })));
    }
}
