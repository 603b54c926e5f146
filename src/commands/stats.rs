//! Stats display command

use crate::storage::Storage;
use colored::Colorize;

/// Render the lifetime stats record
pub fn run_stats<S: Storage>(store: &S) {
    let stats = store.load_stats();

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(" {} ", "LEXIGAP STATS".bright_cyan().bold());
    println!("{}", "═".repeat(60).bright_cyan());

    if stats.total_played == 0 {
        println!("\nNo completed puzzles yet. Play today's puzzle to get started!\n");
        return;
    }

    println!(
        "\n  Played:          {}",
        stats.total_played.to_string().bright_yellow().bold()
    );
    println!(
        "  Won:             {} ({:.0}%)",
        stats.total_wins.to_string().bright_green().bold(),
        stats.win_rate() * 100.0
    );
    println!(
        "  Current streak:  {}",
        stats.current_streak.to_string().bright_yellow()
    );
    println!(
        "  Max streak:      {}",
        stats.max_streak.to_string().bright_yellow()
    );
    if stats.total_wins > 0 {
        println!(
            "  Avg guesses/win: {:.2}",
            stats.average_guesses_on_wins
        );
    }

    println!("\n  {}", "Recent puzzles:".bright_white().bold());
    for outcome in stats.history_by_puzzle.values().rev().take(10) {
        let verdict = if outcome.won {
            format!("won in {}", outcome.guess_count).bright_green()
        } else {
            "lost".to_string().bright_red()
        };
        println!(
            "    #{:<6} {}  {}  {}",
            outcome.puzzle_number, outcome.date, verdict, outcome.emoji_row
        );
    }
    println!();
}
