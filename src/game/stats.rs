//! Lifetime statistics
//!
//! Completed daily puzzles fold into one cumulative record. The fold is
//! idempotent per puzzle number so a reload or re-render can never
//! double-count a result. Practice puzzles are never folded; the play
//! command enforces that boundary.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Recorded outcome of one completed puzzle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleOutcome {
    pub puzzle_number: i64,
    pub date: String,
    pub won: bool,
    pub guess_count: usize,
    pub emoji_row: String,
}

/// Cumulative cross-puzzle statistics
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub total_played: u32,
    pub total_wins: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    pub wins_guess_total: u64,
    pub average_guesses_on_wins: f64,
    /// One entry per puzzle number, at most once
    pub history_by_puzzle: BTreeMap<i64, PuzzleOutcome>,
}

impl Stats {
    /// Win rate in `[0, 1]`; 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_played == 0 {
            0.0
        } else {
            f64::from(self.total_wins) / f64::from(self.total_played)
        }
    }
}

/// Fold one completed outcome into the stats
///
/// Returns a new record; the input is untouched. Reapplying an outcome for
/// an already-recorded puzzle number is a no-op.
#[must_use]
pub fn apply_outcome(stats: &Stats, outcome: &PuzzleOutcome) -> Stats {
    if stats.history_by_puzzle.contains_key(&outcome.puzzle_number) {
        return stats.clone();
    }

    let total_played = stats.total_played + 1;
    let total_wins = stats.total_wins + u32::from(outcome.won);
    let wins_guess_total =
        stats.wins_guess_total + if outcome.won { outcome.guess_count as u64 } else { 0 };
    let average_guesses_on_wins = if total_wins > 0 {
        wins_guess_total as f64 / f64::from(total_wins)
    } else {
        0.0
    };
    let current_streak = if outcome.won { stats.current_streak + 1 } else { 0 };
    let max_streak = stats.max_streak.max(current_streak);

    let mut history_by_puzzle = stats.history_by_puzzle.clone();
    history_by_puzzle.insert(outcome.puzzle_number, outcome.clone());

    Stats {
        total_played,
        total_wins,
        current_streak,
        max_streak,
        wins_guess_total,
        average_guesses_on_wins,
        history_by_puzzle,
    }
}
