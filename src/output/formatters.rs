//! Formatting utilities for terminal output

use crate::core::{MatchClass, MatchedLetter};
use colored::{ColoredString, Colorize};

/// A guessed letter as a colored cell, e.g. ` R ` on yellow
#[must_use]
pub fn match_cell(letter: MatchedLetter) -> ColoredString {
    let text = format!(" {} ", letter.letter().to_ascii_uppercase());
    match letter.class() {
        MatchClass::ExactMatch => text.bright_white().bold().on_green(),
        MatchClass::WrongLocation => text.black().bold().on_yellow(),
        MatchClass::NoMatch => text.black().on_white(),
    }
}

/// One guess as a row of colored cells
#[must_use]
pub fn match_row(letters: &[MatchedLetter]) -> String {
    letters
        .iter()
        .map(|&m| match_cell(m).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format feedback as an emoji string
#[must_use]
pub fn letters_to_emoji(letters: &[MatchedLetter]) -> String {
    letters
        .iter()
        .map(|m| match m.class() {
            MatchClass::ExactMatch => '🟩',
            MatchClass::WrongLocation => '🟨',
            MatchClass::NoMatch => '⬜',
        })
        .collect()
}

/// `count` followed by the singular or plural noun
#[must_use]
pub fn count_noun(count: usize, singular: &str, plural: &str) -> String {
    format!("{count} {}", if count == 1 { singular } else { plural })
}
