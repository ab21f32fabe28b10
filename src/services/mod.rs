//! Game and authentication service boundary
//!
//! The client talks to the game server only through [`GameService`] and
//! [`AuthService`]. Failures are logged by the implementation and reported
//! as `None` or `false`.

pub mod http;
pub mod memory;

use crate::game::{GameRound, RoundType};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use http::{HttpAuthService, HttpGameService};
pub use memory::{InMemoryAuthService, InMemoryGameService};

/// Authority name that grants access to the admin menus
pub const ADMIN_AUTHORITY: &str = "ROLE_ADMIN";

/// Username and password, as typed at the login prompt
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authority {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    #[serde(default)]
    pub authorities: Vec<Authority>,
}

impl User {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.authorities.iter().any(|a| a.name == ADMIN_AUTHORITY)
    }
}

/// A logged-in user and the bearer token for later requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub token: String,
    pub user: User,
}

/// Rounds, guesses and history on the game server
pub trait GameService {
    /// Token sent with every later request; `None` after logout
    fn set_auth_token(&mut self, token: Option<String>);

    /// Today's shared daily game, if one has been created
    fn todays_round(&self) -> Option<GameRound>;

    /// Start a round for `user_id`
    ///
    /// Daily rounds reuse today's game; random rounds always get a new word.
    fn create_round(&mut self, user_id: u32, round_type: RoundType) -> Option<GameRound>;

    /// Save a round with a newly appended guess
    ///
    /// `false` means the guess was rejected and nothing changed.
    fn submit_guess(&mut self, round: &GameRound) -> bool;

    /// Current server state of a user's round
    fn fetch_round(&self, user_id: u32, round_id: u32) -> Option<GameRound>;

    /// Every round the user has started
    fn list_rounds(&self, user_id: u32) -> Option<Vec<GameRound>>;
}

/// Login against the game server
pub trait AuthService {
    fn login(&mut self, credentials: &Credentials) -> Option<AuthenticatedUser>;
}
