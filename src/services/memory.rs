//! In-process game server for offline play
//!
//! Keeps every game and round in memory for the life of the process. The
//! daily word is derived from the date, so every user gets the same one.

use super::{
    ADMIN_AUTHORITY, AuthService, AuthenticatedUser, Authority, Credentials, GameService, User,
};
use crate::core::Word;
use crate::game::{GameRound, RoundType};
use chrono::{Datelike, Local, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

/// A shared game: id, target word, date, type
#[derive(Debug, Clone)]
struct Game {
    id: u32,
    word: Word,
    date: Option<NaiveDate>,
    round_type: RoundType,
}

/// [`GameService`] that runs the game locally
pub struct InMemoryGameService {
    words: Vec<Word>,
    today: Option<NaiveDate>,
    rng: StdRng,
    token: Option<String>,
    next_id: u32,
    games: FxHashMap<u32, Game>,
    daily: FxHashMap<NaiveDate, u32>,
    rounds: FxHashMap<(u32, u32), GameRound>,
}

impl InMemoryGameService {
    /// Service drawing target words from `words`
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Service with a reproducible random word sequence
    #[must_use]
    pub fn with_seed(words: Vec<Word>, seed: u64) -> Self {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    fn with_rng(words: Vec<Word>, rng: StdRng) -> Self {
        Self {
            words,
            today: None,
            rng,
            token: None,
            next_id: 1,
            games: FxHashMap::default(),
            daily: FxHashMap::default(),
            rounds: FxHashMap::default(),
        }
    }

    /// Pin "today" to a fixed date instead of the local clock
    #[must_use]
    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.today = Some(date);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn authorized(&self, operation: &str) -> bool {
        if self.token.is_none() {
            warn!(operation, "request without an auth token");
            return false;
        }
        true
    }

    fn add_game(&mut self, word: Word, date: Option<NaiveDate>, round_type: RoundType) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.games.insert(
            id,
            Game {
                id,
                word,
                date,
                round_type,
            },
        );
        id
    }

    /// Id of today's daily game, creating it on first use
    fn daily_game(&mut self) -> Option<u32> {
        let today = self.today();
        if let Some(&id) = self.daily.get(&today) {
            return Some(id);
        }
        if self.words.is_empty() {
            return None;
        }
        let index = usize::try_from(today.num_days_from_ce()).unwrap_or(0) % self.words.len();
        let word = self.words[index].clone();
        let id = self.add_game(word, Some(today), RoundType::Daily);
        self.daily.insert(today, id);
        info!(%today, game_id = id, "created daily game");
        Some(id)
    }

    fn random_game(&mut self) -> Option<u32> {
        let word = self.words.choose(&mut self.rng)?.clone();
        let today = self.today();
        Some(self.add_game(word, Some(today), RoundType::Random))
    }

    fn round_for(game: &Game, user_id: u32) -> GameRound {
        GameRound::with_target(game.id, user_id, game.word.text(), game.date, game.round_type)
    }
}

impl GameService for InMemoryGameService {
    fn set_auth_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn todays_round(&self) -> Option<GameRound> {
        if !self.authorized("todays_round") {
            return None;
        }
        let id = self.daily.get(&self.today())?;
        self.games.get(id).map(|game| Self::round_for(game, 0))
    }

    fn create_round(&mut self, user_id: u32, round_type: RoundType) -> Option<GameRound> {
        if !self.authorized("create_round") {
            return None;
        }
        let game_id = match round_type {
            RoundType::Daily => self.daily_game(),
            RoundType::Random => self.random_game(),
        };
        let Some(game) = game_id.and_then(|id| self.games.get(&id)) else {
            warn!(?round_type, "no target words available");
            return None;
        };

        let round = self
            .rounds
            .entry((user_id, game.id))
            .or_insert_with(|| Self::round_for(game, user_id));
        debug!(user_id, game_id = game.id, "round ready");
        Some(round.clone())
    }

    fn submit_guess(&mut self, round: &GameRound) -> bool {
        if !self.authorized("submit_guess") {
            return false;
        }
        let key = (round.user_id(), round.round_id());
        let Some(stored) = self.rounds.get(&key) else {
            warn!(user_id = key.0, round_id = key.1, "guess for unknown round");
            return false;
        };

        let known = stored.guess_count();
        let submitted = round.guesses();
        if submitted.len() <= known || submitted[..known] != *stored.guesses() {
            warn!(round_id = key.1, "submitted guesses do not extend the stored round");
            return false;
        }

        let new_guesses = &submitted[known..];
        if let Some(bad) = new_guesses.iter().find(|g| Word::new(g.as_str()).is_err()) {
            debug!(guess = %bad, "rejected guess");
            return false;
        }

        let mut updated = stored.clone();
        for guess in new_guesses {
            if let Err(err) = updated.record_guess(guess) {
                debug!(error = %err, "rejected guess");
                return false;
            }
        }
        self.rounds.insert(key, updated);
        true
    }

    fn fetch_round(&self, user_id: u32, round_id: u32) -> Option<GameRound> {
        if !self.authorized("fetch_round") {
            return None;
        }
        self.rounds.get(&(user_id, round_id)).cloned()
    }

    fn list_rounds(&self, user_id: u32) -> Option<Vec<GameRound>> {
        if !self.authorized("list_rounds") {
            return None;
        }
        let mut rounds: Vec<GameRound> = self
            .rounds
            .values()
            .filter(|round| round.user_id() == user_id)
            .cloned()
            .collect();
        rounds.sort_by_key(GameRound::round_id);
        Some(rounds)
    }
}

/// [`AuthService`] with fixed local accounts
pub struct InMemoryAuthService {
    accounts: Vec<(Credentials, User)>,
}

impl InMemoryAuthService {
    #[must_use]
    pub const fn new(accounts: Vec<(Credentials, User)>) -> Self {
        Self { accounts }
    }
}

impl Default for InMemoryAuthService {
    /// `player`/`password` and `admin`/`admin`
    fn default() -> Self {
        let user = |id, name: &str, authorities: &[&str]| User {
            id,
            username: name.to_string(),
            authorities: authorities
                .iter()
                .map(|&authority| Authority {
                    name: authority.to_string(),
                })
                .collect(),
        };
        Self::new(vec![
            (
                Credentials::new("player", "password"),
                user(1, "player", &["ROLE_USER"]),
            ),
            (
                Credentials::new("admin", "admin"),
                user(2, "admin", &["ROLE_USER", ADMIN_AUTHORITY]),
            ),
        ])
    }
}

impl AuthService for InMemoryAuthService {
    fn login(&mut self, credentials: &Credentials) -> Option<AuthenticatedUser> {
        let found = self
            .accounts
            .iter()
            .find(|(known, _)| known == credentials)
            .map(|(_, user)| AuthenticatedUser {
                token: format!("local-{}-{}", user.id, user.username),
                user: user.clone(),
            });
        if found.is_none() {
            info!(username = %credentials.username, "login rejected");
        }
        found
    }
}
