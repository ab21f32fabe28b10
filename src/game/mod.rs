//! Game rounds and statistics

mod round;
mod stats;

pub use round::{GameRound, MAX_GUESSES, RoundError, RoundType};
pub use stats::GameStatistics;
