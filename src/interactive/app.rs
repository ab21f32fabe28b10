//! Interactive session state and game flow

use super::menus::{ADMIN_MAIN_MENU, LOGIN_MENU, MAIN_MENU, client_menus};
use crate::console::{Console, HasConsole, InputClosed};
use crate::game::{GameRound, GameStatistics, RoundType};
use crate::menu::{MenuSystem, Navigator};
use crate::output::View;
use crate::output::formatters::count_noun;
use crate::services::{AuthService, AuthenticatedUser, GameService};
use anyhow::{Result, anyhow};
use tracing::{debug, error, info};

const UNEXPECTED_ERROR: &str = "An unexpected error has occurred. See the log file for details.";

/// One client session: the services, the view, and who is logged in
pub struct App<G, A, C> {
    games: G,
    auth: A,
    view: View<C>,
    current_user: Option<AuthenticatedUser>,
}

impl<G: GameService, A: AuthService, C: Console> App<G, A, C> {
    pub const fn new(games: G, auth: A, console: C) -> Self {
        Self {
            games,
            auth,
            view: View::new(console),
            current_user: None,
        }
    }

    #[must_use]
    pub const fn current_user(&self) -> Option<&AuthenticatedUser> {
        self.current_user.as_ref()
    }

    #[must_use]
    pub const fn games(&self) -> &G {
        &self.games
    }

    pub fn games_mut(&mut self) -> &mut G {
        &mut self.games
    }

    pub fn console_mut(&mut self) -> &mut C {
        self.view.console_mut()
    }

    fn user_id(&self) -> Result<u32> {
        self.current_user
            .as_ref()
            .map(|current| current.user.id)
            .ok_or_else(|| anyhow!("no user is logged in"))
    }

    /// Prompt for credentials and, on success, enter the main menu
    ///
    /// Admins get the main menu with the admin entry.
    ///
    /// # Errors
    /// Returns an error if input is closed.
    pub fn login(&mut self, nav: &mut Navigator<Self>) -> Result<()> {
        let credentials = self.view.prompt_for_credentials()?;

        let Some(authenticated) = self.auth.login(&credentials) else {
            self.view.display_error("Login failed.");
            return Ok(());
        };

        self.view.display_success("Login successful.");
        self.games
            .set_auth_token(Some(authenticated.token.clone()));

        let menu = if authenticated.user.is_admin() {
            ADMIN_MAIN_MENU
        } else {
            MAIN_MENU
        };
        info!(
            user = %authenticated.user.username,
            admin = authenticated.user.is_admin(),
            "logged in"
        );
        self.current_user = Some(authenticated);
        nav.push_menu(menu)?;
        Ok(())
    }

    pub fn log_out(&mut self) {
        if let Some(previous) = self.current_user.take() {
            info!(user = %previous.user.username, "logged out");
        }
        self.games.set_auth_token(None);
    }

    /// Play today's shared word, resuming a round already started
    ///
    /// # Errors
    /// Returns an error if input is closed or a stored round cannot be
    /// scored.
    pub fn play_daily(&mut self) -> Result<()> {
        let user_id = self.user_id()?;
        let existing = self
            .games
            .todays_round()
            .and_then(|today| self.games.fetch_round(user_id, today.round_id()));

        let round = match existing {
            Some(round) => Some(round),
            None => self.games.create_round(user_id, RoundType::Daily),
        };
        self.start(round)
    }

    /// Play a fresh random word
    ///
    /// # Errors
    /// Returns an error if input is closed or a stored round cannot be
    /// scored.
    pub fn play_random(&mut self) -> Result<()> {
        let user_id = self.user_id()?;
        let round = self.games.create_round(user_id, RoundType::Random);
        self.start(round)
    }

    fn start(&mut self, round: Option<GameRound>) -> Result<()> {
        match round {
            Some(round) => self.play_round(round),
            None => {
                self.view
                    .display_error("Unable to start a game. Please try again later.");
                Ok(())
            }
        }
    }

    /// Prompt for guesses until the round is solved or out of guesses
    ///
    /// Each guess goes to the game service; the board is redrawn from the
    /// service's copy of the round afterwards.
    fn play_round(&mut self, mut round: GameRound) -> Result<()> {
        info!(
            round_id = round.round_id(),
            round_type = %round.round_type(),
            "playing round"
        );

        if round.guess_count() > 0 {
            self.view.display_previous_play(round.guess_count());
            self.display_board(&round)?;
        }

        while !round.is_finished() {
            let guess = self.view.prompt_for_guess(round.guess_count() + 1)?;

            let mut submission = round.clone();
            submission.push_guess(&guess)?;
            if self.games.submit_guess(&submission) {
                debug!(round_id = round.round_id(), %guess, "guess accepted");
            } else {
                self.view
                    .display_error(&format!("{guess} is not a valid 5 letter word!"));
            }

            let Some(latest) = self.games.fetch_round(round.user_id(), round.round_id()) else {
                self.view
                    .display_error("Unable to load the game. Please try again later.");
                return Ok(());
            };
            round = latest;
            self.display_board(&round)?;
        }

        if round.is_success() {
            self.view.display_success(&format!(
                "You got it in {}!",
                count_noun(round.guess_count(), "try", "tries")
            ));
        } else {
            self.view.display_error(&format!(
                "Sorry, you didn't get it.  The word you are looking for is {}.",
                round.word()
            ));
        }
        info!(
            round_id = round.round_id(),
            success = round.is_success(),
            guesses = round.guess_count(),
            "round finished"
        );
        Ok(())
    }

    fn display_board(&mut self, round: &GameRound) -> Result<()> {
        let rows = round.matches()?;
        self.view.display_matches(&rows);
        Ok(())
    }

    /// Show every round the user has played, with totals
    ///
    /// # Errors
    /// Returns an error if no user is logged in.
    pub fn show_statistics(&mut self) -> Result<()> {
        let user_id = self.user_id()?;
        let Some(rounds) = self.games.list_rounds(user_id) else {
            self.view
                .display_error("Unable to load game statistics. Please try again later.");
            return Ok(());
        };

        let stats = GameStatistics::from_rounds(&rounds);
        self.view.display_statistics(&rounds, &stats);
        Ok(())
    }
}

impl<G, A, C> App<G, A, C>
where
    G: GameService + 'static,
    A: AuthService + 'static,
    C: Console + 'static,
{
    /// Welcome the user and drive the menus until they exit
    ///
    /// Errors end the session: closed input quietly, anything else with a
    /// generic message on the console and the details in the log.
    pub fn run(&mut self) {
        self.view.display_welcome();

        match self.run_menus() {
            Ok(()) => info!("session ended"),
            Err(err) if err.is::<InputClosed>() => info!("input closed, ending session"),
            Err(err) => {
                error!("unexpected error: {err:#}");
                self.view.display_error(UNEXPECTED_ERROR);
            }
        }
    }

    fn run_menus(&mut self) -> Result<()> {
        let mut menus = MenuSystem::new(client_menus(), LOGIN_MENU)?;
        menus.run(self)
    }
}

impl<G, A, C: Console> HasConsole for App<G, A, C> {
    fn console(&mut self) -> &mut dyn Console {
        self.view.console_mut()
    }
}
