//! Share text
//!
//! Renders a completed attempt sequence as a spoiler-free emoji summary:
//! one severity glyph per attempt, no words, no arrows, no distances.

use crate::game::state::Attempt;

/// Public game name used in the share header
pub const GAME_NAME: &str = "LexiGap";

/// One emoji per attempt, in submission order, no separators
#[must_use]
pub fn build_emoji_row(attempts: &[Attempt]) -> String {
    attempts
        .iter()
        .map(|attempt| attempt.bucket.emoji())
        .collect()
}

/// Two-line share text: header with puzzle number, then the emoji row
#[must_use]
pub fn build_share_text(puzzle_number: i64, attempts: &[Attempt]) -> String {
    format!("{GAME_NAME} #{puzzle_number}\n{}", build_emoji_row(attempts))
}
