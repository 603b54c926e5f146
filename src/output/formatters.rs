//! Formatting utilities for terminal output

use crate::core::{BucketId, Direction, DistanceBucket};
use crate::game::state::Attempt;
use colored::{ColoredString, Colorize};

/// Color a piece of text by severity bucket
#[must_use]
pub fn colorize_by_bucket(text: &str, bucket: BucketId) -> ColoredString {
    match bucket {
        BucketId::Exact => text.bright_green().bold(),
        BucketId::VeryClose => text.bright_yellow(),
        BucketId::Close => text.yellow(),
        BucketId::Far => text.bright_red(),
        BucketId::VeryFar => text.bright_black(),
    }
}

/// Human hint for a direction
#[must_use]
pub const fn direction_hint(direction: Direction) -> &'static str {
    match direction {
        Direction::Earlier => "target is earlier in the alphabet",
        Direction::Later => "target is later in the alphabet",
        Direction::Correct => "correct!",
    }
}

/// One rendered attempt row: number, word, glyph, severity, hint
#[must_use]
pub fn format_attempt_row(turn: usize, attempt: &Attempt) -> String {
    let bucket: &DistanceBucket = attempt.bucket.descriptor();
    format!(
        "{:>3}. {} {} {} {}",
        turn.to_string().bright_black(),
        attempt.guess.to_uppercase().bright_white().bold(),
        bucket.emoji,
        colorize_by_bucket(bucket.label, attempt.bucket),
        format!("({})", direction_hint(attempt.direction)).bright_black()
    )
}

/// Rendered feasible range, e.g. `between CHASE and PRIDE`
#[must_use]
pub fn format_range(lower_word: Option<&str>, upper_word: Option<&str>) -> String {
    match (lower_word, upper_word) {
        (Some(lower), Some(upper)) => format!(
            "between {} and {}",
            lower.to_uppercase().bright_cyan(),
            upper.to_uppercase().bright_cyan()
        ),
        (Some(lower), None) => format!("after {}", lower.to_uppercase().bright_cyan()),
        (None, Some(upper)) => format!("before {}", upper.to_uppercase().bright_cyan()),
        (None, None) => "anywhere in the bucket".to_string(),
    }
}
