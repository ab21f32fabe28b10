//! Line-oriented console boundary
//!
//! Everything the menus and game flow need from a terminal: printing lines
//! and banners, reading a line, and reading an optional integer.

use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use unicode_width::UnicodeWidthChar;

#[cfg(test)]
mod scripted;
#[cfg(test)]
pub(crate) use scripted::ScriptedConsole;

/// Input reached end-of-file while a prompt was waiting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input closed")]
pub struct InputClosed;

/// Blocking text console
pub trait Console {
    /// Print a line of text
    fn print_line(&mut self, text: &str);

    /// Print an emphasised, framed line of text
    fn print_banner(&mut self, text: &str);

    /// Show `prompt` and read one line, without its line ending
    ///
    /// # Errors
    /// Returns [`InputClosed`] at end of input, or an I/O error.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Show `prompt` and read an integer
    ///
    /// Returns `None` for blank or non-numeric input.
    ///
    /// # Errors
    /// Returns an error if input is closed or unreadable.
    fn read_integer(&mut self, prompt: &str) -> Result<Option<i64>> {
        let entry = self.read_line(prompt)?;
        Ok(entry.trim().parse().ok())
    }

    fn print_blank_line(&mut self) {
        self.print_line("");
    }
}

/// Implemented by anything that can lend out its console
pub trait HasConsole {
    fn console(&mut self) -> &mut dyn Console;
}

/// Console over the process's stdin and stdout
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn print_line(&mut self, text: &str) {
        println!("{text}");
    }

    fn print_banner(&mut self, text: &str) {
        println!("{}", frame(text));
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Err(InputClosed.into());
        }

        Ok(input.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Frame `text` in a single-line box
///
/// The frame width follows the visible text; colour codes are ignored when
/// measuring.
#[must_use]
pub fn frame(text: &str) -> String {
    let width = visible_width(text) + 2;
    let bar = "─".repeat(width);
    format!(
        "{}\n{} {} {}\n{}",
        format!("┌{bar}┐").bright_black(),
        "│".bright_black(),
        text,
        "│".bright_black(),
        format!("└{bar}┘").bright_black()
    )
}

/// Terminal cells taken by `text`, skipping ANSI escape sequences
fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for ch in text.chars() {
        match ch {
            '\u{1b}' => in_escape = true,
            'm' if in_escape => in_escape = false,
            _ if in_escape => {}
            _ => width += ch.width().unwrap_or(0),
        }
    }
    width
}
