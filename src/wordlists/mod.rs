//! Word lists for LexiGap
//!
//! Provides the embedded dictionary and common-target lists compiled into
//! the binary, plus a loader for external lists.

mod embedded;
pub mod loader;

pub use embedded::{COMMON_TARGETS, COMMON_TARGETS_COUNT, WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_WORD_LENGTHS;
    use std::collections::HashSet;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn common_targets_count_matches_const() {
        assert_eq!(COMMON_TARGETS.len(), COMMON_TARGETS_COUNT);
    }

    #[test]
    fn words_are_normalized_and_playable_lengths() {
        for &word in WORDS {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
            assert!(
                DEFAULT_WORD_LENGTHS.contains(&word.len()),
                "Word '{word}' has unplayable length {}",
                word.len()
            );
        }
    }

    #[test]
    fn words_are_sorted_and_unique() {
        for pair in WORDS.windows(2) {
            assert!(pair[0] < pair[1], "'{}' >= '{}'", pair[0], pair[1]);
        }
    }

    #[test]
    fn common_targets_subset_of_words() {
        let words: HashSet<_> = WORDS.iter().collect();
        for target in COMMON_TARGETS {
            assert!(words.contains(target), "Target '{target}' not in word list");
        }
    }

    #[test]
    fn every_playable_length_has_common_targets() {
        for &length in DEFAULT_WORD_LENGTHS {
            let count = COMMON_TARGETS
                .iter()
                .filter(|word| word.len() == length)
                .count();
            assert!(count > 0, "No common targets of length {length}");
        }
    }
}
