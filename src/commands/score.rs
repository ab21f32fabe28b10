//! Score command
//!
//! Scores one guess against a target word without a game server.

use crate::core::{MatchedLetter, Word, is_solved, score_words};
use anyhow::{Context, Result};

/// Result of scoring a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub target: String,
    pub guess: String,
    pub letters: Vec<MatchedLetter>,
    pub solved: bool,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is not 5 ASCII letters.
pub fn score_guess(target: &str, guess: &str) -> Result<ScoreResult> {
    let target = Word::new(target).with_context(|| format!("Invalid target '{target}'"))?;
    let guess = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;

    let letters = score_words(&target, &guess).to_vec();
    Ok(ScoreResult {
        target: target.text().to_string(),
        guess: guess.text().to_string(),
        solved: is_solved(&letters),
        letters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchClass;

    #[test]
    fn score_valid_guess() {
        let result = score_guess("Train", "crate").unwrap();

        assert_eq!(result.target, "train");
        assert_eq!(result.guess, "crate");
        assert!(!result.solved);
        let classes: Vec<MatchClass> = result.letters.iter().map(|m| m.class()).collect();
        assert_eq!(
            classes,
            [
                MatchClass::NoMatch,
                MatchClass::ExactMatch,
                MatchClass::ExactMatch,
                MatchClass::WrongLocation,
                MatchClass::NoMatch,
            ]
        );
    }

    #[test]
    fn score_winning_guess() {
        assert!(score_guess("train", "TRAIN").unwrap().solved);
    }

    #[test]
    fn score_invalid_words() {
        let err = score_guess("train", "trains").unwrap_err();
        assert!(err.to_string().contains("Invalid guess"));
        assert!(score_guess("tr4in", "crate").is_err());
    }
}
