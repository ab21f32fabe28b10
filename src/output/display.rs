//! Display functions for command results

use super::formatters::{letters_to_emoji, match_row};
use crate::commands::ScoreResult;
use colored::Colorize;

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Target: {}   Guess: {}",
        result.target.to_uppercase().bright_yellow().bold(),
        result.guess.to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n{}", match_row(&result.letters));
    println!("{}\n", letters_to_emoji(&result.letters));

    if result.solved {
        println!("{}", "✅ Solved!".green().bold());
    } else {
        println!("{}", "❌ Not solved".red().bold());
    }
}
