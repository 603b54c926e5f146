//! Persisted game snapshots
//!
//! A snapshot is the plain-data image of a game handed to the storage
//! collaborator. On load it is only accepted for the current puzzle when the
//! full puzzle identity matches; anything else is discarded and a fresh game
//! begins, so a stale snapshot can never leak yesterday's target into today.

use crate::game::puzzle::PuzzleDefinition;
use crate::game::state::{Attempt, GameState, GameStatus};
use serde::{Deserialize, Serialize};

/// Plain-data record of one game, suitable for storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub puzzle_number: i64,
    pub calendar_date: String,
    pub required_length: usize,
    pub target_word: String,
    pub seed_key: String,
    pub is_practice: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practice_seed: Option<String>,
    pub max_guesses: usize,
    pub attempts: Vec<Attempt>,
    pub status: GameStatus,
}

impl GameSnapshot {
    /// Capture the full state of a game
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        Self {
            puzzle_number: state.puzzle.puzzle_number,
            calendar_date: state.puzzle.calendar_date.clone(),
            required_length: state.puzzle.required_length,
            target_word: state.puzzle.target_word.clone(),
            seed_key: state.puzzle.seed_key.clone(),
            is_practice: state.puzzle.is_practice,
            practice_seed: state.puzzle.practice_seed.clone(),
            max_guesses: state.max_guesses,
            attempts: state.attempts.clone(),
            status: state.status,
        }
    }

    /// Whether this snapshot belongs to the given puzzle
    ///
    /// Identity is the triple (puzzle number, calendar date, seed key); all
    /// three must match.
    #[must_use]
    pub fn matches(&self, puzzle: &PuzzleDefinition) -> bool {
        self.puzzle_number == puzzle.puzzle_number
            && self.calendar_date == puzzle.calendar_date
            && self.seed_key == puzzle.seed_key
    }

    /// Rebuild the game state for the current puzzle definition
    ///
    /// The snapshot's own guess budget wins; it reflects the budget the
    /// round was started with.
    #[must_use]
    pub fn restore(&self, puzzle: PuzzleDefinition) -> GameState {
        GameState {
            puzzle,
            max_guesses: self.max_guesses,
            attempts: self.attempts.clone(),
            status: self.status,
        }
    }
}

/// Storage key a puzzle's snapshot is filed under
#[must_use]
pub fn storage_key(puzzle: &PuzzleDefinition) -> String {
    if puzzle.is_practice {
        let seed = puzzle.practice_seed.as_deref().unwrap_or("default");
        format!("game:practice:{seed}")
    } else {
        format!("game:daily:{}", puzzle.calendar_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DictionaryModel;
    use crate::game::state::submit_guess;

    const TEST_WORDS: &[&str] = &["apple", "berry", "chase", "delta"];

    fn puzzle() -> PuzzleDefinition {
        PuzzleDefinition {
            puzzle_number: 55,
            calendar_date: "2026-02-25".to_string(),
            required_length: 5,
            target_word: "berry".to_string(),
            seed_key: "lexigap|2026-02-25|v2".to_string(),
            is_practice: false,
            practice_seed: None,
        }
    }

    #[test]
    fn capture_and_restore_round_trip() {
        let dictionary = DictionaryModel::build(TEST_WORDS, &[5]);
        let state = GameState::with_max_guesses(puzzle(), 6);
        let state = submit_guess(&state, "apple", &dictionary).state;

        let snapshot = GameSnapshot::capture(&state);
        assert!(snapshot.matches(&puzzle()));

        let restored = snapshot.restore(puzzle());
        assert_eq!(restored, state);
    }

    #[test]
    fn mismatched_identity_is_rejected() {
        let snapshot = GameSnapshot::capture(&GameState::with_max_guesses(puzzle(), 6));

        let mut other_day = puzzle();
        other_day.calendar_date = "2026-02-26".to_string();
        assert!(!snapshot.matches(&other_day));

        let mut other_number = puzzle();
        other_number.puzzle_number = 56;
        assert!(!snapshot.matches(&other_number));

        let mut other_seed = puzzle();
        other_seed.seed_key = "lexigap|2026-02-25|v3".to_string();
        assert!(!snapshot.matches(&other_seed));
    }

    #[test]
    fn storage_keys_separate_daily_and_practice() {
        assert_eq!(storage_key(&puzzle()), "game:daily:2026-02-25");

        let mut practice = puzzle();
        practice.is_practice = true;
        practice.practice_seed = Some("warmup".to_string());
        assert_eq!(storage_key(&practice), "game:practice:warmup");
    }

    #[test]
    fn snapshot_serializes_round_trip() {
        let dictionary = DictionaryModel::build(TEST_WORDS, &[5]);
        let state = GameState::with_max_guesses(puzzle(), 6);
        let state = submit_guess(&state, "chase", &dictionary).state;

        let snapshot = GameSnapshot::capture(&state);
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
