//! Game state and guess evaluation
//!
//! A game is a sequence of scored attempts against one puzzle. Submitting a
//! guess never mutates the input state: the evaluator returns a fresh state
//! so callers can snapshot, persist, and replay freely. Invalid guesses are
//! reported as data and consume nothing.

use crate::core::{
    BucketId, DictionaryModel, Direction, distance_bucket, normalize_word, rank_distance,
};
use crate::game::puzzle::{MAX_GUESSES, PuzzleDefinition};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One scored guess, immutable once created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub guess: String,
    /// Absolute rank difference from the target
    pub distance: usize,
    pub direction: Direction,
    pub guess_rank: usize,
    pub target_rank: usize,
    pub bucket: BucketId,
}

/// Lifecycle of a game; `Won` and `Lost` are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// Full state of one game against one puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub puzzle: PuzzleDefinition,
    pub max_guesses: usize,
    /// Attempts in submission order; the index is the attempt number
    pub attempts: Vec<Attempt>,
    pub status: GameStatus,
}

impl GameState {
    /// Fresh game for a puzzle with the default guess budget
    #[must_use]
    pub fn new(puzzle: PuzzleDefinition) -> Self {
        Self::with_max_guesses(puzzle, MAX_GUESSES)
    }

    /// Fresh game with an explicit guess budget
    #[must_use]
    pub fn with_max_guesses(puzzle: PuzzleDefinition, max_guesses: usize) -> Self {
        Self {
            puzzle,
            max_guesses,
            attempts: Vec::new(),
            status: GameStatus::Playing,
        }
    }

    /// Guesses left before the game is lost
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses.saturating_sub(self.attempts.len())
    }

    /// Whether the game has reached a terminal status
    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.status, GameStatus::Playing)
    }

    /// Tightest rank interval the target is known to lie in
    ///
    /// The lower bound is the highest rank guessed with a Later hint; the
    /// upper bound is the lowest rank guessed with an Earlier hint. Bounds
    /// only ever tighten: Later attempts raise the floor, Earlier attempts
    /// lower the ceiling.
    #[must_use]
    pub fn known_bounds(&self) -> (Option<usize>, Option<usize>) {
        let mut lower: Option<usize> = None;
        let mut upper: Option<usize> = None;

        for attempt in &self.attempts {
            match attempt.direction {
                Direction::Later => {
                    if lower.is_none_or(|bound| attempt.guess_rank > bound) {
                        lower = Some(attempt.guess_rank);
                    }
                }
                Direction::Earlier => {
                    if upper.is_none_or(|bound| attempt.guess_rank < bound) {
                        upper = Some(attempt.guess_rank);
                    }
                }
                Direction::Correct => {}
            }
        }

        (lower, upper)
    }
}

/// Why a guess was rejected; recoverable, reported as a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessRejection {
    AlreadyComplete,
    EmptyGuess,
    NonAlphabetic,
    LengthMismatch { required: usize },
    BucketUnavailable { length: usize },
    UnknownWord,
    /// Guess ranks below the established floor; names the boundary word
    BelowLowerBound { bound_word: String },
    /// Guess ranks above the established ceiling; names the boundary word
    AboveUpperBound { bound_word: String },
}

impl fmt::Display for GuessRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyComplete => write!(f, "This puzzle is already complete."),
            Self::EmptyGuess => write!(f, "Enter a guess first."),
            Self::NonAlphabetic => write!(f, "Use alphabetic letters only."),
            Self::LengthMismatch { required } => {
                write!(f, "Use exactly {required} letters.")
            }
            Self::BucketUnavailable { length } => {
                write!(f, "No playable words of length {length} are available.")
            }
            Self::UnknownWord => write!(f, "Word is not in the LexiGap dictionary."),
            Self::BelowLowerBound { bound_word } => {
                write!(
                    f,
                    "Guess is outside your current range. Try a word after {}.",
                    bound_word.to_uppercase()
                )
            }
            Self::AboveUpperBound { bound_word } => {
                write!(
                    f,
                    "Guess is outside your current range. Try a word before {}.",
                    bound_word.to_uppercase()
                )
            }
        }
    }
}

/// Result of submitting a guess
///
/// Carries the next state in every case; on rejection it is the input state
/// unchanged and no attempt was consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub state: GameState,
    pub valid: bool,
    pub consumed_attempt: bool,
    pub attempt: Option<Attempt>,
    pub rejection: Option<GuessRejection>,
}

impl SubmitOutcome {
    fn rejected(state: GameState, rejection: GuessRejection) -> Self {
        Self {
            state,
            valid: false,
            consumed_attempt: false,
            attempt: None,
            rejection: Some(rejection),
        }
    }
}

/// Validate and score a raw guess against the current state
///
/// Validation runs in a fixed order and the first failing check wins:
/// terminal status, empty input, non-alphabetic input, length mismatch,
/// missing rank lookup, dictionary membership, then the narrowed range.
/// On success the attempt is appended and the status transitions: Won on
/// distance zero, Lost when the budget is exhausted, Playing otherwise.
#[must_use]
pub fn submit_guess(
    state: &GameState,
    raw_guess: &str,
    dictionary: &DictionaryModel,
) -> SubmitOutcome {
    if state.is_over() {
        return SubmitOutcome::rejected(state.clone(), GuessRejection::AlreadyComplete);
    }

    let trimmed = raw_guess.trim();
    if trimmed.is_empty() {
        return SubmitOutcome::rejected(state.clone(), GuessRejection::EmptyGuess);
    }

    // Checked before normalization so "a1ple" is malformed, not unknown.
    if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return SubmitOutcome::rejected(state.clone(), GuessRejection::NonAlphabetic);
    }

    let guess = normalize_word(trimmed);
    let required = state.puzzle.required_length;
    if guess.len() != required {
        return SubmitOutcome::rejected(state.clone(), GuessRejection::LengthMismatch { required });
    }

    if dictionary.bucket_len(required) == 0 {
        return SubmitOutcome::rejected(
            state.clone(),
            GuessRejection::BucketUnavailable { length: required },
        );
    }

    let Some(guess_rank) = dictionary.rank(required, &guess) else {
        return SubmitOutcome::rejected(state.clone(), GuessRejection::UnknownWord);
    };

    let Some(target_rank) = dictionary.rank(required, &state.puzzle.target_word) else {
        return SubmitOutcome::rejected(
            state.clone(),
            GuessRejection::BucketUnavailable { length: required },
        );
    };

    let (lower, upper) = state.known_bounds();

    if let Some(bound) = lower
        && guess_rank < bound
    {
        let bound_word = dictionary.word_at(required, bound).unwrap_or("?").to_string();
        return SubmitOutcome::rejected(state.clone(), GuessRejection::BelowLowerBound { bound_word });
    }

    if let Some(bound) = upper
        && guess_rank > bound
    {
        let bound_word = dictionary.word_at(required, bound).unwrap_or("?").to_string();
        return SubmitOutcome::rejected(state.clone(), GuessRejection::AboveUpperBound { bound_word });
    }

    let distance = rank_distance(guess_rank, target_rank);
    let attempt = Attempt {
        guess,
        distance,
        direction: Direction::of(guess_rank, target_rank),
        guess_rank,
        target_rank,
        bucket: distance_bucket(distance).id,
    };

    let mut attempts = state.attempts.clone();
    attempts.push(attempt.clone());

    let status = if distance == 0 {
        GameStatus::Won
    } else if attempts.len() >= state.max_guesses {
        GameStatus::Lost
    } else {
        GameStatus::Playing
    };

    SubmitOutcome {
        state: GameState {
            puzzle: state.puzzle.clone(),
            max_guesses: state.max_guesses,
            attempts,
            status,
        },
        valid: true,
        consumed_attempt: true,
        attempt: Some(attempt),
        rejection: None,
    }
}
