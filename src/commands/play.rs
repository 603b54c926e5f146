//! Interactive play command
//!
//! Runs one puzzle (daily or practice) in the terminal: resumes a persisted
//! game when the stored snapshot matches the freshly computed puzzle,
//! scores guesses, persists after every accepted attempt, and on completion
//! folds daily results into the lifetime stats and prints the share text.

use crate::core::DictionaryModel;
use crate::game::puzzle::{PuzzleConfig, PuzzleMode, select_puzzle};
use crate::game::share::{GAME_NAME, build_emoji_row, build_share_text};
use crate::game::snapshot::{GameSnapshot, storage_key};
use crate::game::state::{GameState, GameStatus, submit_guess};
use crate::game::stats::{PuzzleOutcome, apply_outcome};
use crate::output::{format_attempt_row, format_range};
use crate::storage::Storage;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// Run one interactive game
///
/// # Errors
///
/// Returns an error if the puzzle cannot be constructed from the dictionary
/// (a configuration failure), or on an I/O failure reading input or
/// persisting state.
pub fn run_play<S: Storage>(
    dictionary: &DictionaryModel,
    puzzle_config: &PuzzleConfig,
    mode: &PuzzleMode,
    max_guesses: usize,
    store: &S,
) -> Result<()> {
    let puzzle = select_puzzle(dictionary, puzzle_config, mode)
        .context("failed to set up the puzzle")?;

    let key = storage_key(&puzzle);
    let mut state = match store.load_game(&key) {
        // A stored game only resumes when the full puzzle identity matches.
        Some(snapshot) if snapshot.matches(&puzzle) => snapshot.restore(puzzle),
        _ => GameState::with_max_guesses(puzzle, max_guesses),
    };

    print_intro(&state, dictionary);

    if !state.attempts.is_empty() {
        println!("Resuming your game:\n");
        for (index, attempt) in state.attempts.iter().enumerate() {
            println!("{}", format_attempt_row(index + 1, attempt));
        }
        println!();
    }

    while state.status == GameStatus::Playing {
        let prompt = format!(
            "Guess {}/{}",
            state.attempts.len() + 1,
            state.max_guesses
        );
        let Some(input) = read_input(&prompt)? else {
            // EOF: persist and leave quietly.
            store.save_game(&key, &GameSnapshot::capture(&state))?;
            return Ok(());
        };

        match input.as_str() {
            "quit" | "q" | "exit" => {
                store.save_game(&key, &GameSnapshot::capture(&state))?;
                println!("\nYour progress is saved. See you soon!\n");
                return Ok(());
            }
            "range" | "r" => {
                print_range(&state, dictionary);
                continue;
            }
            _ => {}
        }

        let outcome = submit_guess(&state, &input, dictionary);
        if let Some(rejection) = outcome.rejection {
            println!("  {}", rejection.to_string().bright_red());
            continue;
        }

        state = outcome.state;
        store.save_game(&key, &GameSnapshot::capture(&state))?;

        if let Some(attempt) = outcome.attempt {
            println!("{}", format_attempt_row(state.attempts.len(), &attempt));
            if state.status == GameStatus::Playing {
                print_range(&state, dictionary);
            }
        }
    }

    print_completion(&state);

    if !state.puzzle.is_practice {
        let stats = store.load_stats();
        let folded = apply_outcome(
            &stats,
            &PuzzleOutcome {
                puzzle_number: state.puzzle.puzzle_number,
                date: state.puzzle.calendar_date.clone(),
                won: state.status == GameStatus::Won,
                guess_count: state.attempts.len(),
                emoji_row: build_emoji_row(&state.attempts),
            },
        );
        store.save_stats(&folded)?;
    } else {
        println!("{}", "Practice games are not recorded in stats.".bright_black());
    }

    println!("\n{}", "Share your result:".bright_white().bold());
    println!(
        "{}\n",
        build_share_text(state.puzzle.puzzle_number, &state.attempts)
    );

    Ok(())
}

fn print_intro(state: &GameState, dictionary: &DictionaryModel) {
    let puzzle = &state.puzzle;
    let heading = if puzzle.is_practice {
        format!("{GAME_NAME} practice #{}", puzzle.puzzle_number)
    } else {
        format!("{GAME_NAME} #{} - {}", puzzle.puzzle_number, puzzle.calendar_date)
    };

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(" {} ", heading.bright_white().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\nFind the hidden {}-letter word. {} words of that length are playable.",
        puzzle.required_length.to_string().bright_yellow().bold(),
        dictionary
            .bucket_len(puzzle.required_length)
            .to_string()
            .bright_yellow()
    );
    println!(
        "Each guess tells you how far it ranks from the target alphabetically."
    );
    println!(
        "You have {} guesses. Type 'range' for your current bounds, 'quit' to save and exit.\n",
        state.max_guesses.to_string().bright_yellow().bold()
    );
}

fn print_range(state: &GameState, dictionary: &DictionaryModel) {
    let (lower, upper) = state.known_bounds();
    let length = state.puzzle.required_length;
    let lower_word = lower.and_then(|rank| dictionary.word_at(length, rank));
    let upper_word = upper.and_then(|rank| dictionary.word_at(length, rank));
    println!(
        "  {} {}\n",
        "The target is".bright_black(),
        format_range(lower_word, upper_word)
    );
}

fn print_completion(state: &GameState) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    if state.status == GameStatus::Won {
        let turns = state.attempts.len();
        println!(
            "{}",
            format!(
                " You got it in {turns} {}! ",
                if turns == 1 { "guess" } else { "guesses" }
            )
            .bright_green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                " Out of guesses. The word was {}. ",
                state.puzzle.target_word.to_uppercase()
            )
            .bright_red()
            .bold()
        );
    }
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Read one trimmed line; `None` on EOF
fn read_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("flushing prompt")?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .context("reading input")?;
    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
