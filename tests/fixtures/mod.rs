//! Test fixtures and mock implementations for integration testing

#![allow(dead_code)]

use matboj::error::Result;
use matboj::storage::{GameState, StateStorage};
use matboj::RankEngine;
use mockall::mock;

/// Roster used throughout the integration tests
pub const ROSTER: [&str; 6] = ["Jana", "Petr", "Eva", "Ondra", "Marie", "Tomas"];

mock! {
    pub Storage {}

    impl StateStorage for Storage {
        fn save(&self, state: &GameState) -> Result<()>;
        fn load(&self) -> Result<Option<GameState>>;
        fn location(&self) -> String;
    }
}

/// Fresh engine over the test roster
pub fn create_engine() -> RankEngine {
    RankEngine::with_roster(ROSTER).unwrap()
}

/// Engine with the given matches already recorded
pub fn engine_with_matches(matches: &[(&str, &str)]) -> RankEngine {
    let mut engine = create_engine();
    for (winner, loser) in matches {
        engine.record_match(winner, loser).unwrap();
    }
    engine
}

/// Every participant's (name, rank, history), sorted by name
pub fn full_state(engine: &RankEngine) -> Vec<(String, f64, Vec<f64>)> {
    let mut state: Vec<(String, f64, Vec<f64>)> = engine
        .store()
        .participants()
        .iter()
        .map(|p| (p.name.clone(), p.rank, p.rank_history.clone()))
        .collect();
    state.sort_by(|a, b| a.0.cmp(&b.0));
    state
}
