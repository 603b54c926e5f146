//! Puzzle selection
//!
//! Deterministically turns a calendar date (or a practice seed) plus a
//! dictionary snapshot into the day's puzzle. All randomness flows from the
//! versioned seed key, so every client computes the same puzzle offline.

use crate::core::{DEFAULT_WORD_LENGTHS, DictionaryModel, SeededRng, hash_seed, normalize_word};
use crate::wordlists::COMMON_TARGETS;
use chrono::NaiveDate;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Namespace prefix for every seed key
pub const SEED_NAMESPACE: &str = "lexigap";

/// Seed format version; bumping it invalidates all previously generated puzzles
pub const GAME_VERSION: &str = "v2";

/// Day zero for daily puzzle numbering
pub const PUZZLE_EPOCH: &str = "2026-01-01";

/// Default guess budget per puzzle
pub const MAX_GUESSES: usize = 10;

/// Default minimum eligible-subset size for a length to be preferred
pub const MIN_BUCKET_SIZE: usize = 50;

/// How a puzzle is keyed: by calendar date or by practice seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleMode {
    /// Daily puzzle for an externally resolved ISO calendar date
    Daily { calendar_date: String },
    /// Practice puzzle for an arbitrary caller-supplied seed
    Practice { seed: String },
}

impl PuzzleMode {
    /// Daily mode for an ISO date string
    pub fn daily(calendar_date: impl Into<String>) -> Self {
        Self::Daily {
            calendar_date: calendar_date.into(),
        }
    }

    /// Practice mode for a seed string; `None` if the trimmed seed is empty
    #[must_use]
    pub fn practice(seed: &str) -> Option<Self> {
        let trimmed = seed.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self::Practice {
                seed: trimmed.to_string(),
            })
        }
    }

    /// The exact versioned string this puzzle's randomness derives from
    #[must_use]
    pub fn seed_key(&self) -> String {
        match self {
            Self::Daily { calendar_date } => {
                format!("{SEED_NAMESPACE}|{calendar_date}|{GAME_VERSION}")
            }
            Self::Practice { seed } => {
                format!("{SEED_NAMESPACE}|practice|{seed}|{GAME_VERSION}")
            }
        }
    }
}

/// Tunable inputs to puzzle selection, with documented defaults
#[derive(Debug, Clone)]
pub struct PuzzleConfig {
    /// Word lengths the selector may choose from
    pub allowed_lengths: Vec<usize>,
    /// A length is preferred when its eligible subset reaches this size
    pub min_bucket_size: usize,
    /// Curated words eligible to be hidden answers
    pub common_targets: Vec<String>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            allowed_lengths: DEFAULT_WORD_LENGTHS.to_vec(),
            min_bucket_size: MIN_BUCKET_SIZE,
            common_targets: COMMON_TARGETS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl PuzzleConfig {
    /// Config with a custom common-target list and default lengths/threshold
    #[must_use]
    pub fn with_targets<I, S>(common_targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            common_targets: common_targets
                .into_iter()
                .map(|word| word.as_ref().to_string())
                .collect(),
            ..Self::default()
        }
    }
}

/// One playable puzzle instance; created once, never mutated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleDefinition {
    /// Day count since the epoch for daily puzzles, seed-derived for practice
    pub puzzle_number: i64,
    /// ISO date the puzzle was generated for; empty for practice puzzles
    pub calendar_date: String,
    /// Word length every guess must have
    pub required_length: usize,
    /// Hidden answer; always a member of the required-length bucket
    pub target_word: String,
    /// Versioned seed string this puzzle derives from
    pub seed_key: String,
    pub is_practice: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practice_seed: Option<String>,
}

/// Fatal puzzle-construction failures
///
/// These abort setup; they are never surfaced as in-game messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// No allowed length has a single common-target word
    NoEligibleTargets,
    /// The chosen length's eligible subset is empty
    EmptyTargetBucket(usize),
    /// A calendar date string failed to parse as an ISO date
    InvalidDate(String),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEligibleTargets => {
                write!(f, "No common target words available for the configured lengths")
            }
            Self::EmptyTargetBucket(length) => {
                write!(f, "No common target words available for length {length}")
            }
            Self::InvalidDate(date) => write!(f, "Invalid ISO date: {date}"),
        }
    }
}

impl std::error::Error for PuzzleError {}

/// Number of calendar days from the puzzle epoch to an ISO date
///
/// Negative for dates before the epoch.
///
/// # Errors
/// Returns `PuzzleError::InvalidDate` if the date does not parse.
pub fn days_from_epoch(calendar_date: &str) -> Result<i64, PuzzleError> {
    let date = parse_iso_date(calendar_date)?;
    let epoch = parse_iso_date(PUZZLE_EPOCH)?;
    Ok(date.signed_duration_since(epoch).num_days())
}

fn parse_iso_date(value: &str) -> Result<NaiveDate, PuzzleError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| PuzzleError::InvalidDate(value.to_string()))
}

/// Per-length subsets of the dictionary that are also common targets
fn build_target_subsets<'a>(
    dictionary: &'a DictionaryModel,
    config: &PuzzleConfig,
) -> BTreeMap<usize, Vec<&'a str>> {
    let target_set: FxHashSet<String> = config
        .common_targets
        .iter()
        .map(|word| normalize_word(word))
        .filter(|word| !word.is_empty())
        .collect();

    config
        .allowed_lengths
        .iter()
        .map(|&length| {
            let eligible: Vec<&str> = dictionary
                .bucket(length)
                .iter()
                .map(String::as_str)
                .filter(|word| target_set.contains(*word))
                .collect();
            (length, eligible)
        })
        .collect()
}

/// Choose the puzzle's word length
///
/// Lengths whose eligible subset reaches `min_bucket_size` are preferred,
/// uniformly. Otherwise the non-empty subsets tied for the largest size are
/// the candidates.
fn pick_length(
    subsets: &BTreeMap<usize, Vec<&str>>,
    min_bucket_size: usize,
    rng: &mut SeededRng,
) -> Result<usize, PuzzleError> {
    let preferred: Vec<usize> = subsets
        .iter()
        .filter(|(_, words)| words.len() >= min_bucket_size)
        .map(|(&length, _)| length)
        .collect();

    if !preferred.is_empty() {
        return Ok(preferred[rng.pick_index(preferred.len())]);
    }

    let largest = subsets
        .values()
        .map(Vec::len)
        .filter(|&len| len > 0)
        .max()
        .ok_or(PuzzleError::NoEligibleTargets)?;

    let fallback: Vec<usize> = subsets
        .iter()
        .filter(|(_, words)| words.len() == largest)
        .map(|(&length, _)| length)
        .collect();

    Ok(fallback[rng.pick_index(fallback.len())])
}

/// Deterministically select the puzzle for a date or practice seed
///
/// Calling this twice with equal inputs yields byte-identical definitions.
///
/// # Errors
/// Returns `PuzzleError` if no allowed length has an eligible target word,
/// or if a daily date fails to parse.
pub fn select_puzzle(
    dictionary: &DictionaryModel,
    config: &PuzzleConfig,
    mode: &PuzzleMode,
) -> Result<PuzzleDefinition, PuzzleError> {
    let seed_key = mode.seed_key();
    let mut rng = SeededRng::from_text(&seed_key);

    let subsets = build_target_subsets(dictionary, config);
    let required_length = pick_length(&subsets, config.min_bucket_size, &mut rng)?;

    let eligible = subsets
        .get(&required_length)
        .filter(|words| !words.is_empty())
        .ok_or(PuzzleError::EmptyTargetBucket(required_length))?;
    let target_word = eligible[rng.pick_index(eligible.len())].to_string();

    let (puzzle_number, calendar_date, is_practice, practice_seed) = match mode {
        PuzzleMode::Daily { calendar_date } => (
            days_from_epoch(calendar_date)?,
            calendar_date.clone(),
            false,
            None,
        ),
        PuzzleMode::Practice { seed } => (
            i64::from(hash_seed(&seed_key) % 1_000_000),
            String::new(),
            true,
            Some(seed.clone()),
        ),
    };

    Ok(PuzzleDefinition {
        puzzle_number,
        calendar_date,
        required_length,
        target_word,
        seed_key,
        is_practice,
        practice_seed,
    })
}
