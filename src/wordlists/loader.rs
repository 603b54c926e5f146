//! Word list loading utilities
//!
//! Reads external word lists for the `--wordlist` flag; the embedded lists
//! cover everything else.

use std::fs;
use std::io;
use std::path::Path;

/// Load raw words from a file, one per line
///
/// Lines are trimmed and blank lines skipped. Entries are returned raw;
/// normalization happens when the dictionary model is built.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect();

    Ok(words)
}
