//! Rank-distance feedback
//!
//! A guess is scored by how far its alphabetical rank sits from the target's
//! rank within the same length bucket. Direction tells the player which way
//! to move; the severity bucket drives colors and the emoji share row.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which way the target lies relative to a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Target ranks below the guess (alphabetically earlier)
    Earlier,
    /// Target ranks above the guess (alphabetically later)
    Later,
    /// Guess is the target
    Correct,
}

impl Direction {
    /// Direction of the target relative to a guess, by rank
    #[must_use]
    pub const fn of(guess_rank: usize, target_rank: usize) -> Self {
        if guess_rank == target_rank {
            Self::Correct
        } else if target_rank < guess_rank {
            Self::Earlier
        } else {
            Self::Later
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Earlier => write!(f, "earlier"),
            Self::Later => write!(f, "later"),
            Self::Correct => write!(f, "correct"),
        }
    }
}

/// Severity classification of a rank distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BucketId {
    Exact,
    VeryClose,
    Close,
    Far,
    VeryFar,
}

/// One row of the distance severity table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceBucket {
    pub id: BucketId,
    pub emoji: &'static str,
    pub label: &'static str,
    /// Inclusive lower distance bound
    pub min: usize,
    /// Inclusive upper distance bound; `None` is open-ended
    pub max: Option<usize>,
}

/// Distance severity table, ascending and non-overlapping
///
/// Every distance maps to exactly one bucket.
pub const DISTANCE_BUCKETS: &[DistanceBucket] = &[
    DistanceBucket {
        id: BucketId::Exact,
        emoji: "\u{1F7E9}",
        label: "correct",
        min: 0,
        max: Some(0),
    },
    DistanceBucket {
        id: BucketId::VeryClose,
        emoji: "\u{1F7E8}",
        label: "1-9 away",
        min: 1,
        max: Some(9),
    },
    DistanceBucket {
        id: BucketId::Close,
        emoji: "\u{1F7E7}",
        label: "10-49 away",
        min: 10,
        max: Some(49),
    },
    DistanceBucket {
        id: BucketId::Far,
        emoji: "\u{1F7E5}",
        label: "50-249 away",
        min: 50,
        max: Some(249),
    },
    DistanceBucket {
        id: BucketId::VeryFar,
        emoji: "\u{2B1B}",
        label: "250+ away",
        min: 250,
        max: None,
    },
];

/// Absolute rank distance between a guess and the target
#[inline]
#[must_use]
pub const fn rank_distance(guess_rank: usize, target_rank: usize) -> usize {
    guess_rank.abs_diff(target_rank)
}

/// Classify a distance into its severity bucket
#[must_use]
pub fn distance_bucket(distance: usize) -> &'static DistanceBucket {
    DISTANCE_BUCKETS
        .iter()
        .find(|bucket| {
            distance >= bucket.min && bucket.max.is_none_or(|max| distance <= max)
        })
        .unwrap_or(&DISTANCE_BUCKETS[DISTANCE_BUCKETS.len() - 1])
}

impl BucketId {
    /// Table row for this bucket id
    #[must_use]
    pub fn descriptor(self) -> &'static DistanceBucket {
        DISTANCE_BUCKETS
            .iter()
            .find(|bucket| bucket.id == self)
            .unwrap_or(&DISTANCE_BUCKETS[DISTANCE_BUCKETS.len() - 1])
    }

    /// Emoji glyph for this bucket
    #[inline]
    #[must_use]
    pub fn emoji(self) -> &'static str {
        self.descriptor().emoji
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_of_ranks() {
        assert_eq!(Direction::of(12, 4), Direction::Earlier);
        assert_eq!(Direction::of(4, 12), Direction::Later);
        assert_eq!(Direction::of(8, 8), Direction::Correct);
    }

    #[test]
    fn rank_distance_is_absolute() {
        assert_eq!(rank_distance(3, 8), 5);
        assert_eq!(rank_distance(8, 3), 5);
        assert_eq!(rank_distance(4, 4), 0);
    }

    #[test]
    fn bucket_boundaries_are_exact() {
        assert_eq!(distance_bucket(0).id, BucketId::Exact);
        assert_eq!(distance_bucket(1).id, BucketId::VeryClose);
        assert_eq!(distance_bucket(9).id, BucketId::VeryClose);
        assert_eq!(distance_bucket(10).id, BucketId::Close);
        assert_eq!(distance_bucket(49).id, BucketId::Close);
        assert_eq!(distance_bucket(50).id, BucketId::Far);
        assert_eq!(distance_bucket(249).id, BucketId::Far);
        assert_eq!(distance_bucket(250).id, BucketId::VeryFar);
        assert_eq!(distance_bucket(100_000).id, BucketId::VeryFar);
    }

    #[test]
    fn every_distance_maps_to_exactly_one_bucket() {
        for distance in 0..500 {
            let matching = DISTANCE_BUCKETS
                .iter()
                .filter(|bucket| {
                    distance >= bucket.min && bucket.max.is_none_or(|max| distance <= max)
                })
                .count();
            assert_eq!(matching, 1, "distance {distance} matched {matching} buckets");
        }
    }

    #[test]
    fn bucket_id_round_trips_through_descriptor() {
        for bucket in DISTANCE_BUCKETS {
            assert_eq!(bucket.id.descriptor().id, bucket.id);
            assert_eq!(bucket.id.emoji(), bucket.emoji);
        }
    }
}
