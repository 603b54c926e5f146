//! LexiGap - CLI
//!
//! Daily word-guessing game scored by alphabetical rank distance.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use lexigap::{
    commands::{run_play, run_stats},
    core::{DEFAULT_WORD_LENGTHS, DictionaryModel},
    game::{MAX_GUESSES, PuzzleConfig, PuzzleMode},
    storage::JsonFileStore,
    wordlists::{WORDS, loader::load_from_file},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lexigap",
    about = "Daily word-guessing game: close the gap to the hidden word by alphabetical rank",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory game state and stats are stored under
    #[arg(long, global = true, default_value = ".lexigap")]
    data_dir: PathBuf,

    /// Path to a custom word list (one word per line); default: embedded list
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Guess budget per puzzle
    #[arg(short = 'g', long, global = true, default_value_t = MAX_GUESSES)]
    max_guesses: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Play today's daily puzzle (default)
    Play {
        /// Override the resolved calendar date (ISO, e.g. 2026-02-25)
        #[arg(long)]
        date: Option<String>,
    },

    /// Play a practice puzzle from a seed
    Practice {
        /// Seed string; a random seed is generated when omitted
        #[arg(short, long)]
        seed: Option<String>,
    },

    /// Show lifetime stats
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.wordlist.as_deref())?;
    let puzzle_config = PuzzleConfig::default();
    let store = JsonFileStore::new(&cli.data_dir);

    // Default to the daily puzzle when no command is given
    let command = cli.command.unwrap_or(Commands::Play { date: None });

    match command {
        Commands::Play { date } => {
            let calendar_date = date.unwrap_or_else(today_iso);
            let mode = PuzzleMode::daily(calendar_date);
            run_play(&dictionary, &puzzle_config, &mode, cli.max_guesses, &store)
        }
        Commands::Practice { seed } => {
            let seed = seed.unwrap_or_else(random_seed);
            let Some(mode) = PuzzleMode::practice(&seed) else {
                bail!("practice seed must not be empty");
            };
            println!("Practice seed: {seed}");
            run_play(&dictionary, &puzzle_config, &mode, cli.max_guesses, &store)
        }
        Commands::Stats => {
            run_stats(&store);
            Ok(())
        }
    }
}

/// Build the dictionary model from the embedded list or a custom file
fn load_dictionary(wordlist: Option<&std::path::Path>) -> Result<DictionaryModel> {
    let model = match wordlist {
        Some(path) => {
            let words = load_from_file(path)?;
            DictionaryModel::build(words, DEFAULT_WORD_LENGTHS)
        }
        None => DictionaryModel::build(WORDS.iter().copied(), DEFAULT_WORD_LENGTHS),
    };
    Ok(model)
}

/// Today's date as an ISO string in the local timezone
///
/// The core only ever sees the resolved string; date resolution stays at
/// this boundary.
fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Random 8-character alphanumeric practice seed
fn random_seed() -> String {
    use rand::Rng;
    use rand::distr::Alphanumeric;

    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect()
}
