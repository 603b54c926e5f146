//! Dictionary normalization
//!
//! Turns arbitrary raw word input into the canonical form the rest of the
//! game operates on: lowercase ASCII letters, deduplicated, sorted.

/// Normalize a single raw word
///
/// Lowercases the input and strips every character outside `a-z`. The result
/// may be empty if the input contained no letters.
///
/// # Examples
/// ```
/// use lexigap::core::normalize_word;
///
/// assert_eq!(normalize_word("Apple"), "apple");
/// assert_eq!(normalize_word("can't"), "cant");
/// assert_eq!(normalize_word("123"), "");
/// ```
#[must_use]
pub fn normalize_word(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// Normalize a raw word list into the canonical dictionary
///
/// Each entry is normalized, empty results are dropped, duplicates are
/// removed, and the remainder is sorted by codepoint. Arbitrary noisy input
/// is accepted; an empty result is valid and surfaces later as a
/// configuration error when no puzzle can be built from it.
#[must_use]
pub fn normalize_dictionary<I, S>(raw_words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words: Vec<String> = raw_words
        .into_iter()
        .map(|raw| normalize_word(raw.as_ref()))
        .filter(|word| !word.is_empty())
        .collect();

    words.sort_unstable();
    words.dedup();
    words
}
