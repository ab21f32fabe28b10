//! A single round of the guessing game
//!
//! Field names follow the game service's JSON so a round can be sent and
//! received as-is.

use crate::core::{MatchedLetter, ScoreError, is_solved, score};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum number of guesses in a round
pub const MAX_GUESSES: usize = 6;

/// How a round's target word was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundType {
    /// One shared word per calendar day
    Daily,
    /// A fresh word for every request
    Random,
}

impl fmt::Display for RoundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "DAILY"),
            Self::Random => write!(f, "RANDOM"),
        }
    }
}

/// Error type for round mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("round is already finished after {guesses} guesses")]
    Finished { guesses: usize },
    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// One user's play of a target word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRound {
    #[serde(rename = "gameId", default)]
    round_id: u32,
    #[serde(default)]
    user_id: u32,
    #[serde(default)]
    word: String,
    #[serde(default)]
    date: Option<NaiveDate>,
    #[serde(rename = "type")]
    round_type: RoundType,
    #[serde(default)]
    guesses: Vec<String>,
    #[serde(default)]
    success: bool,
}

impl GameRound {
    /// A round request: the service assigns the id and target word
    #[must_use]
    pub const fn new(user_id: u32, round_type: RoundType) -> Self {
        Self {
            round_id: 0,
            user_id,
            word: String::new(),
            date: None,
            round_type,
            guesses: Vec::new(),
            success: false,
        }
    }

    /// A round bound to a known target word
    #[must_use]
    pub fn with_target(
        round_id: u32,
        user_id: u32,
        word: impl Into<String>,
        date: Option<NaiveDate>,
        round_type: RoundType,
    ) -> Self {
        Self {
            round_id,
            word: word.into().to_lowercase(),
            date,
            ..Self::new(user_id, round_type)
        }
    }

    #[must_use]
    pub const fn round_id(&self) -> u32 {
        self.round_id
    }

    #[must_use]
    pub const fn user_id(&self) -> u32 {
        self.user_id
    }

    /// The target word (empty until the service assigns one)
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    #[must_use]
    pub const fn round_type(&self) -> RoundType {
        self.round_type
    }

    /// Guesses in submission order
    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn last_guess(&self) -> Option<&str> {
        self.guesses.last().map(String::as_str)
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Solved, or out of guesses
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.success || self.guesses.len() >= MAX_GUESSES
    }

    /// Append a guess without scoring it
    ///
    /// # Errors
    /// Returns `RoundError::Finished` if the round is solved or full; the
    /// round is left unchanged.
    pub fn push_guess(&mut self, guess: &str) -> Result<(), RoundError> {
        if self.is_finished() {
            return Err(RoundError::Finished {
                guesses: self.guesses.len(),
            });
        }
        self.guesses.push(guess.trim().to_lowercase());
        Ok(())
    }

    /// Append a guess, score it against the target and settle `success`
    ///
    /// # Errors
    /// Returns `RoundError::Finished` if the round is over, or
    /// `RoundError::Score` if the guess length differs from the target's.
    /// Either way the round is left unchanged.
    pub fn record_guess(&mut self, guess: &str) -> Result<Vec<MatchedLetter>, RoundError> {
        if self.is_finished() {
            return Err(RoundError::Finished {
                guesses: self.guesses.len(),
            });
        }
        let guess = guess.trim().to_lowercase();
        let letters = score(&self.word, &guess)?;
        self.guesses.push(guess);
        if is_solved(&letters) {
            self.success = true;
        }
        Ok(letters)
    }

    /// Score every guess so far, in submission order
    ///
    /// # Errors
    /// Returns `ScoreError` if a stored guess does not fit the target.
    pub fn matches(&self) -> Result<Vec<Vec<MatchedLetter>>, ScoreError> {
        self.guesses
            .iter()
            .map(|guess| score(&self.word, guess))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchClass;

    fn train_round() -> GameRound {
        GameRound::with_target(7, 1, "train", None, RoundType::Random)
    }

    #[test]
    fn new_round_is_empty() {
        let round = GameRound::new(3, RoundType::Daily);
        assert_eq!(round.user_id(), 3);
        assert_eq!(round.round_type(), RoundType::Daily);
        assert!(round.guesses().is_empty());
        assert!(round.word().is_empty());
        assert!(!round.is_success());
    }

    #[test]
    fn guesses_keep_submission_order() {
        let mut round = train_round();
        round.push_guess("about").unwrap();
        round.push_guess("Crate").unwrap();
        assert_eq!(round.guesses(), ["about", "crate"]);
        assert_eq!(round.last_guess(), Some("crate"));
    }

    #[test]
    fn record_guess_sets_success_on_all_exact() {
        let mut round = train_round();
        round.record_guess("crate").unwrap();
        assert!(!round.is_success());

        let letters = round.record_guess("TRAIN").unwrap();
        assert!(letters.iter().all(|m| m.class() == MatchClass::ExactMatch));
        assert!(round.is_success());
        assert_eq!(round.guess_count(), 2);
    }

    #[test]
    fn success_survives_further_appends() {
        let mut round = train_round();
        round.record_guess("train").unwrap();

        assert_eq!(
            round.push_guess("crate"),
            Err(RoundError::Finished { guesses: 1 })
        );
        assert!(matches!(
            round.record_guess("error"),
            Err(RoundError::Finished { .. })
        ));
        assert!(round.is_success());
        assert_eq!(round.guess_count(), 1);
    }

    #[test]
    fn guess_count_capped_at_max() {
        let mut round = train_round();
        for _ in 0..MAX_GUESSES {
            round.record_guess("crate").unwrap();
        }
        assert!(round.is_finished());
        assert!(!round.is_success());
        assert!(round.push_guess("train").is_err());
        assert_eq!(round.guess_count(), MAX_GUESSES);
    }

    #[test]
    fn wrong_length_guess_leaves_round_unchanged() {
        let mut round = train_round();
        assert!(matches!(
            round.record_guess("trains"),
            Err(RoundError::Score(_))
        ));
        assert!(round.guesses().is_empty());
    }

    #[test]
    fn matches_scores_every_guess() {
        let mut round = train_round();
        round.push_guess("crate").unwrap();
        round.push_guess("train").unwrap();
        let matches = round.matches().unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0][1].class(), MatchClass::ExactMatch);
        assert!(matches[1].iter().all(|m| m.class() == MatchClass::ExactMatch));
    }

    #[test]
    fn json_uses_service_field_names() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let round = GameRound::with_target(12, 4, "crate", Some(date), RoundType::Daily);
        let value = serde_json::to_value(&round).unwrap();
        assert_eq!(value["gameId"], 12);
        assert_eq!(value["userId"], 4);
        assert_eq!(value["type"], "DAILY");
        assert_eq!(value["date"], "2024-03-01");
    }

    #[test]
    fn json_tolerates_missing_and_extra_fields() {
        let json = r#"{"gameId":5,"userId":2,"word":"train","type":"RANDOM",
            "guesses":["crate"],"matches":[],"success":false}"#;
        let round: GameRound = serde_json::from_str(json).unwrap();
        assert_eq!(round.round_id(), 5);
        assert_eq!(round.guesses(), ["crate"]);
        assert_eq!(round.date(), None);
    }
}
