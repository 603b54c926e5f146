//! Terminal output formatting

pub mod formatters;

pub use formatters::{colorize_by_bucket, direction_hint, format_attempt_row, format_range};
