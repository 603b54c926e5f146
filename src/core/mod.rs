//! Core domain types for LexiGap
//!
//! Normalization, the dictionary rank model, the seeded generator, and
//! distance feedback. Everything here is pure and deterministic: identical
//! inputs always produce identical values, which is what lets every client
//! compute the same daily puzzle with no server.

mod dictionary;
mod feedback;
mod normalize;
mod seed;

pub use dictionary::{DEFAULT_WORD_LENGTHS, DictionaryModel};
pub use feedback::{
    BucketId, DISTANCE_BUCKETS, Direction, DistanceBucket, distance_bucket, rank_distance,
};
pub use normalize::{normalize_dictionary, normalize_word};
pub use seed::{SeededRng, hash_seed};
