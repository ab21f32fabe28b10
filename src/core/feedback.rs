//! Letter-by-letter guess feedback
//!
//! Each position of a guess is classified against the target word:
//! - `ExactMatch` (letter in the correct position)
//! - `WrongLocation` (letter in the word, elsewhere)
//! - `NoMatch` (letter not in the word, or all copies already credited)

use super::word::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Feedback category for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchClass {
    ExactMatch,
    WrongLocation,
    NoMatch,
}

/// A guessed letter paired with its feedback category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchedLetter {
    #[serde(rename = "char")]
    letter: char,
    #[serde(rename = "match")]
    class: MatchClass,
}

impl MatchedLetter {
    #[must_use]
    pub const fn new(letter: char, class: MatchClass) -> Self {
        Self { letter, class }
    }

    /// The guessed letter (lowercase)
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn class(self) -> MatchClass {
        self.class
    }
}

/// Error returned when a guess cannot be scored against a target
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("guess has {guess} letters but the target has {target}")]
    LengthMismatch { target: usize, guess: usize },
    #[error("words must have 5 letters, got {0}")]
    InvalidLength(usize),
}

/// Score `guess` against `target`, case-insensitively
///
/// # Algorithm
/// 1. First pass: mark exact matches; every unmatched target letter goes
///    into the pool of available letters
/// 2. Second pass: mark wrong-location letters from the remaining pool,
///    consuming one copy per credit
///
/// The result has one entry per guess letter, in guess order.
///
/// # Errors
/// Returns `ScoreError::LengthMismatch` if the two words differ in length,
/// or `ScoreError::InvalidLength` if they are not [`WORD_LENGTH`] letters.
///
/// # Examples
/// ```
/// use terdle::core::{MatchClass, score};
///
/// let feedback = score("train", "crate").unwrap();
/// let classes: Vec<MatchClass> = feedback.iter().map(|m| m.class()).collect();
/// assert_eq!(
///     classes,
///     [
///         MatchClass::NoMatch,
///         MatchClass::ExactMatch,
///         MatchClass::ExactMatch,
///         MatchClass::WrongLocation,
///         MatchClass::NoMatch,
///     ]
/// );
/// ```
pub fn score(target: &str, guess: &str) -> Result<Vec<MatchedLetter>, ScoreError> {
    let target: Vec<char> = target.chars().flat_map(char::to_lowercase).collect();
    let guess: Vec<char> = guess.chars().flat_map(char::to_lowercase).collect();

    if target.len() != guess.len() {
        return Err(ScoreError::LengthMismatch {
            target: target.len(),
            guess: guess.len(),
        });
    }
    if target.len() != WORD_LENGTH {
        return Err(ScoreError::InvalidLength(target.len()));
    }

    let mut letters = vec![MatchedLetter::new(' ', MatchClass::NoMatch); WORD_LENGTH];
    classify(&target, &guess, &mut letters);
    Ok(letters)
}

/// Score two validated words
#[must_use]
pub fn score_words(target: &Word, guess: &Word) -> [MatchedLetter; WORD_LENGTH] {
    let target: [char; WORD_LENGTH] = target.chars().map(char::from);
    let guess: [char; WORD_LENGTH] = guess.chars().map(char::from);

    let mut letters = [MatchedLetter::new(' ', MatchClass::NoMatch); WORD_LENGTH];
    classify(&target, &guess, &mut letters);
    letters
}

/// Two-pass classification into `out`; all three slices have equal length
fn classify(target: &[char], guess: &[char], out: &mut [MatchedLetter]) {
    let mut available: FxHashMap<char, u8> = FxHashMap::default();

    // First pass: exact matches claim their target letter
    for ((slot, &g), &t) in out.iter_mut().zip(guess).zip(target) {
        if g == t {
            *slot = MatchedLetter::new(g, MatchClass::ExactMatch);
        } else {
            *slot = MatchedLetter::new(g, MatchClass::NoMatch);
            *available.entry(t).or_insert(0) += 1;
        }
    }

    // Second pass: wrong-location credits come out of what is left
    for slot in out.iter_mut() {
        if slot.class() == MatchClass::ExactMatch {
            continue;
        }
        if let Some(count) = available.get_mut(&slot.letter()).filter(|c| **c > 0) {
            *count -= 1;
            *slot = MatchedLetter::new(slot.letter(), MatchClass::WrongLocation);
        }
    }
}

/// True if every letter is an exact match
#[must_use]
pub fn is_solved(letters: &[MatchedLetter]) -> bool {
    !letters.is_empty()
        && letters
            .iter()
            .all(|m| m.class() == MatchClass::ExactMatch)
}
