//! Per-user statistics over played rounds

use super::round::{GameRound, MAX_GUESSES};

/// Summary of a user's rounds
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GameStatistics {
    pub started: usize,
    pub completed: usize,
    pub won: usize,
    /// Guesses summed over completed rounds only
    pub total_guesses_completed: usize,
}

impl GameStatistics {
    /// Tally a set of rounds
    ///
    /// A round counts as completed when it was solved or used every guess.
    #[must_use]
    pub fn from_rounds(rounds: &[GameRound]) -> Self {
        rounds.iter().fold(Self::default(), |mut stats, round| {
            stats.started += 1;
            let guesses = round.guess_count();
            if round.is_success() || guesses == MAX_GUESSES {
                stats.completed += 1;
                stats.total_guesses_completed += guesses;
            }
            if round.is_success() {
                stats.won += 1;
            }
            stats
        })
    }

    /// Won rounds as a percentage of completed rounds (0 when none completed)
    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        if self.completed == 0 {
            return 0.0;
        }
        self.won as f64 / self.completed as f64 * 100.0
    }

    /// Average guesses per completed round (0 when none completed)
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.completed == 0 {
            return 0.0;
        }
        self.total_guesses_completed as f64 / self.completed as f64
    }
}
