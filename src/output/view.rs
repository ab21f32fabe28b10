//! User-facing messages and prompts for the game client

use super::formatters::{count_noun, match_row};
use super::stats_table::{rounds_table, summary_table};
use crate::console::Console;
use crate::core::MatchedLetter;
use crate::game::{GameRound, GameStatistics};
use crate::services::Credentials;
use anyhow::Result;
use colored::Colorize;

const WELCOME: &str = "Welcome to TErdle!";

/// Presents game output and collects input through a [`Console`]
pub struct View<C> {
    console: C,
}

impl<C: Console> View<C> {
    pub const fn new(console: C) -> Self {
        Self { console }
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn display_welcome(&mut self) {
        self.console
            .print_banner(&WELCOME.bright_green().bold().to_string());
        self.console.print_blank_line();
    }

    pub fn display_error(&mut self, message: &str) {
        self.console
            .print_banner(&message.bright_white().on_red().to_string());
        self.console.print_blank_line();
    }

    pub fn display_success(&mut self, message: &str) {
        self.console.print_line(&message.green().to_string());
        self.console.print_blank_line();
    }

    /// One row of colored cells per guess
    pub fn display_matches(&mut self, rows: &[Vec<MatchedLetter>]) {
        for row in rows {
            self.console.print_line(&match_row(row));
        }
        self.console.print_blank_line();
    }

    pub fn display_previous_play(&mut self, guesses: usize) {
        self.console.print_blank_line();
        self.console.print_line(&format!(
            "You have already played this game and made {}.",
            count_noun(guesses, "guess", "guesses")
        ));
    }

    pub fn display_statistics(&mut self, rounds: &[GameRound], stats: &GameStatistics) {
        for line in rounds_table(rounds) {
            self.console.print_line(&line);
        }
        self.console.print_blank_line();
        for line in summary_table(stats) {
            self.console.print_line(&line);
        }
        self.console.print_blank_line();
    }

    /// # Errors
    /// Returns an error if input is closed.
    pub fn prompt_for_credentials(&mut self) -> Result<Credentials> {
        self.console.print_line("Please login.");
        let username = self.console.read_line("Username: ")?;
        let password = self.console.read_line("Password: ")?;
        Ok(Credentials::new(username.trim(), password))
    }

    /// Read guess number `number`, lowercased
    ///
    /// # Errors
    /// Returns an error if input is closed.
    pub fn prompt_for_guess(&mut self, number: usize) -> Result<String> {
        let entry = self
            .console
            .read_line(&format!("Enter guess number {number}: "))?;
        Ok(entry.trim().to_lowercase())
    }
}
