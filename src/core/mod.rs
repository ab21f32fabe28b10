//! Core domain types for the guessing game
//!
//! Pure types with no I/O: validated words and the letter feedback scorer.

mod feedback;
mod word;

pub use feedback::{MatchClass, MatchedLetter, ScoreError, is_solved, score, score_words};
pub use word::{WORD_LENGTH, Word, WordError};
