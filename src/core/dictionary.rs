//! Dictionary model
//!
//! Partitions the normalized dictionary into fixed-length buckets and builds
//! the word-to-rank lookups gameplay depends on. A word's rank is its
//! zero-based alphabetical position within its length bucket; ranks are
//! dense, unique, and stable for a given dictionary snapshot. The model is
//! built once and never mutated.

use crate::core::normalize::normalize_dictionary;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Word lengths playable by default
pub const DEFAULT_WORD_LENGTHS: &[usize] = &[4, 5, 6, 7];

/// Immutable dictionary snapshot: normalized words, length buckets, ranks
#[derive(Debug, Clone)]
pub struct DictionaryModel {
    normalized_words: Vec<String>,
    buckets: BTreeMap<usize, Vec<String>>,
    rank_lookups: BTreeMap<usize, FxHashMap<String, usize>>,
}

impl DictionaryModel {
    /// Build a model from raw words for the given allowed lengths
    ///
    /// Words whose length is not allowed remain in the normalized list but
    /// are unreachable for gameplay.
    #[must_use]
    pub fn build<I, S>(raw_words: I, allowed_lengths: &[usize]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized_words = normalize_dictionary(raw_words);

        let mut buckets: BTreeMap<usize, Vec<String>> = allowed_lengths
            .iter()
            .map(|&length| (length, Vec::new()))
            .collect();

        // Bucket order inherits the normalizer's sort, so ranks are alphabetical.
        for word in &normalized_words {
            if let Some(bucket) = buckets.get_mut(&word.len()) {
                bucket.push(word.clone());
            }
        }

        let rank_lookups = buckets
            .iter()
            .map(|(&length, words)| {
                let lookup: FxHashMap<String, usize> = words
                    .iter()
                    .enumerate()
                    .map(|(rank, word)| (word.clone(), rank))
                    .collect();
                (length, lookup)
            })
            .collect();

        Self {
            normalized_words,
            buckets,
            rank_lookups,
        }
    }

    /// All normalized words, sorted
    #[inline]
    #[must_use]
    pub fn normalized_words(&self) -> &[String] {
        &self.normalized_words
    }

    /// Alphabetical bucket for a length; empty if the length is not allowed
    #[must_use]
    pub fn bucket(&self, length: usize) -> &[String] {
        self.buckets.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Zero-based alphabetical rank of a word within its length bucket
    #[must_use]
    pub fn rank(&self, length: usize, word: &str) -> Option<usize> {
        self.rank_lookups.get(&length)?.get(word).copied()
    }

    /// Word at a given rank within a length bucket
    #[must_use]
    pub fn word_at(&self, length: usize, rank: usize) -> Option<&str> {
        self.bucket(length).get(rank).map(String::as_str)
    }

    /// Number of guessable words of a length
    #[must_use]
    pub fn bucket_len(&self, length: usize) -> usize {
        self.bucket(length).len()
    }

    /// Lengths this model was built for, ascending
    pub fn allowed_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> DictionaryModel {
        DictionaryModel::build(
            ["delta", "apple", "Berry", "chase", "tool", "idea", "freedom"],
            &[4, 5],
        )
    }

    #[test]
    fn buckets_are_alphabetical_subsequences() {
        let model = sample_model();
        assert_eq!(model.bucket(5), ["apple", "berry", "chase", "delta"]);
        assert_eq!(model.bucket(4), ["idea", "tool"]);
    }

    #[test]
    fn ranks_are_dense_and_match_bucket_positions() {
        let model = sample_model();
        for &length in &[4, 5] {
            for (index, word) in model.bucket(length).iter().enumerate() {
                assert_eq!(model.rank(length, word), Some(index));
            }
        }
    }

    #[test]
    fn non_allowed_lengths_are_unreachable() {
        let model = sample_model();
        // "freedom" survives normalization but has no bucket.
        assert!(model.normalized_words().contains(&"freedom".to_string()));
        assert!(model.bucket(7).is_empty());
        assert_eq!(model.rank(7, "freedom"), None);
    }

    #[test]
    fn rank_of_unknown_word_is_none() {
        let model = sample_model();
        assert_eq!(model.rank(5, "zzzzz"), None);
        assert_eq!(model.rank(9, "apple"), None);
    }

    #[test]
    fn word_at_inverts_rank() {
        let model = sample_model();
        assert_eq!(model.word_at(5, 0), Some("apple"));
        assert_eq!(model.word_at(5, 3), Some("delta"));
        assert_eq!(model.word_at(5, 4), None);
    }

    #[test]
    fn allowed_lengths_ascending() {
        let model = sample_model();
        let lengths: Vec<usize> = model.allowed_lengths().collect();
        assert_eq!(lengths, vec![4, 5]);
    }

    #[test]
    fn empty_dictionary_is_valid() {
        let model = DictionaryModel::build(Vec::<String>::new(), DEFAULT_WORD_LENGTHS);
        assert!(model.normalized_words().is_empty());
        assert_eq!(model.bucket_len(5), 0);
    }
}
