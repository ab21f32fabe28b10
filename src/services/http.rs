//! Blocking REST client for the game server
//!
//! One attempt per request. Transport errors and error statuses are logged
//! at `warn` and reported as `None` or `false`.

use super::{AuthService, AuthenticatedUser, Credentials, GameService};
use crate::game::{GameRound, RoundType};
use anyhow::Result;
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

fn build_client() -> Result<Client> {
    Ok(Client::builder().timeout(REQUEST_TIMEOUT).build()?)
}

/// Join a base URL and a relative path with exactly one slash
fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Send `request` and decode a JSON body
///
/// `404 Not Found` and `204 No Content` mean "nothing there" and are not
/// logged as failures.
fn fetch_json<R: DeserializeOwned>(request: RequestBuilder, what: &str) -> Option<R> {
    let response = match request.send() {
        Ok(response) => response,
        Err(err) => {
            warn!(error = %err, "{what}: request failed");
            return None;
        }
    };

    let status = response.status();
    if status == StatusCode::NOT_FOUND || status == StatusCode::NO_CONTENT {
        debug!(%status, "{what}: nothing found");
        return None;
    }
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        warn!(%status, body = %body, "{what}: server returned an error");
        return None;
    }

    match response.json() {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(error = %err, "{what}: response could not be decoded");
            None
        }
    }
}

/// [`GameService`] backed by the game server's REST API
pub struct HttpGameService {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpGameService {
    /// # Errors
    /// Returns an error if the HTTP client cannot be initialised.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            base_url: base_url.into(),
            token: None,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn round_path(user_id: u32, round_id: u32) -> String {
        format!("users/{user_id}/games/{round_id}")
    }
}

impl GameService for HttpGameService {
    fn set_auth_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn todays_round(&self) -> Option<GameRound> {
        let request = self.authorized(self.client.get(self.endpoint("games/today")));
        fetch_json(request, "fetch today's game")
    }

    fn create_round(&mut self, user_id: u32, round_type: RoundType) -> Option<GameRound> {
        let body = GameRound::new(user_id, round_type);
        let url = self.endpoint(&format!("users/{user_id}/games"));
        let request = self.authorized(self.client.post(url).json(&body));
        fetch_json(request, "create round")
    }

    fn submit_guess(&mut self, round: &GameRound) -> bool {
        let url = self.endpoint(&Self::round_path(round.user_id(), round.round_id()));
        let request = self.authorized(self.client.put(url).json(round));

        match request.send() {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                let status = response.status();
                let body = response.text().unwrap_or_default();
                warn!(%status, body = %body, round_id = round.round_id(), "guess rejected");
                false
            }
            Err(err) => {
                warn!(error = %err, round_id = round.round_id(), "submit guess: request failed");
                false
            }
        }
    }

    fn fetch_round(&self, user_id: u32, round_id: u32) -> Option<GameRound> {
        let url = self.endpoint(&Self::round_path(user_id, round_id));
        fetch_json(self.authorized(self.client.get(url)), "fetch round")
    }

    fn list_rounds(&self, user_id: u32) -> Option<Vec<GameRound>> {
        let url = self.endpoint(&format!("users/{user_id}/games"));
        fetch_json(self.authorized(self.client.get(url)), "list rounds")
    }
}

/// [`AuthService`] backed by the game server's login endpoint
pub struct HttpAuthService {
    client: Client,
    base_url: String,
}

impl HttpAuthService {
    /// # Errors
    /// Returns an error if the HTTP client cannot be initialised.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            base_url: base_url.into(),
        })
    }
}

impl AuthService for HttpAuthService {
    fn login(&mut self, credentials: &Credentials) -> Option<AuthenticatedUser> {
        let url = join_url(&self.base_url, "login");
        debug!(username = %credentials.username, "logging in");
        fetch_json(self.client.post(url).json(credentials), "login")
    }
}
