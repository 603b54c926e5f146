//! Game logic: puzzle selection, guess evaluation, stats, sharing
//!
//! Every operation here returns fresh values instead of mutating inputs.
//! Holding a reference to a prior state is always safe; persistence and
//! replay build on that.

pub mod puzzle;
pub mod share;
pub mod snapshot;
pub mod state;
pub mod stats;

pub use puzzle::{
    GAME_VERSION, MAX_GUESSES, MIN_BUCKET_SIZE, PUZZLE_EPOCH, PuzzleConfig, PuzzleDefinition,
    PuzzleError, PuzzleMode, SEED_NAMESPACE, days_from_epoch, select_puzzle,
};
pub use share::{GAME_NAME, build_emoji_row, build_share_text};
pub use snapshot::{GameSnapshot, storage_key};
pub use state::{Attempt, GameState, GameStatus, GuessRejection, SubmitOutcome, submit_guess};
pub use stats::{PuzzleOutcome, Stats, apply_outcome};
