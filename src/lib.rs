//! LexiGap
//!
//! Core of a daily word-guessing game scored by alphabetical rank distance.
//! Puzzle selection is a pure function of a versioned seed string, so every
//! client computes the same puzzle for the same day with no server.
//!
//! # Quick Start
//!
//! ```rust
//! use lexigap::core::DictionaryModel;
//! use lexigap::game::{GameState, PuzzleConfig, PuzzleMode, select_puzzle, submit_guess};
//!
//! let dictionary = DictionaryModel::build(["apple", "berry", "chase", "delta"], &[5]);
//! let mut config = PuzzleConfig::with_targets(["berry"]);
//! config.allowed_lengths = vec![5];
//! config.min_bucket_size = 1;
//!
//! let puzzle = select_puzzle(&dictionary, &config, &PuzzleMode::daily("2026-02-25")).unwrap();
//! assert_eq!(puzzle.target_word, "berry");
//!
//! let state = GameState::new(puzzle);
//! let outcome = submit_guess(&state, "apple", &dictionary);
//! assert!(outcome.valid);
//! ```

// Core domain types
pub mod core;

// Game logic
pub mod game;

// Persistence interface
pub mod storage;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
