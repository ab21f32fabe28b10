//! The client's menu table

use super::app::App;
use crate::console::Console;
use crate::menu::{Menu, MenuBuilder};
use crate::services::{AuthService, GameService};

pub const LOGIN_MENU: &str = "LoginMenu";
pub const MAIN_MENU: &str = "MainMenu";
pub const ADMIN_MAIN_MENU: &str = "AdminMainMenu";
pub const ADMIN_MENU: &str = "AdminMenu";

/// Login, player and admin menus
///
/// The session starts on [`LOGIN_MENU`]; a successful login pushes the
/// player or admin main menu on top of it.
pub fn client_menus<G, A, C>() -> Vec<Menu<App<G, A, C>>>
where
    G: GameService + 'static,
    A: AuthService + 'static,
    C: Console + 'static,
{
    vec![
        MenuBuilder::new(LOGIN_MENU, "Login Menu")
            .item("Login", |app: &mut App<G, A, C>, nav| app.login(nav))
            .close("Exit")
            .build(),
        main_menu(MAIN_MENU, "Main Menu", false),
        main_menu(ADMIN_MAIN_MENU, "Main Menu", true),
        MenuBuilder::new(ADMIN_MENU, "Admin Menu")
            .close("Return to Main Menu")
            .build(),
    ]
}

fn main_menu<G, A, C>(name: &str, title: &str, with_admin: bool) -> Menu<App<G, A, C>>
where
    G: GameService + 'static,
    A: AuthService + 'static,
    C: Console + 'static,
{
    let mut builder = MenuBuilder::new(name, title)
        .item("Play Daily", |app: &mut App<G, A, C>, _| app.play_daily())
        .item("Play Random", |app: &mut App<G, A, C>, _| app.play_random())
        .item("Show Game Statistics", |app: &mut App<G, A, C>, _| {
            app.show_statistics()
        });

    if with_admin {
        builder = builder.item("Admin Menu", |_: &mut App<G, A, C>, nav| {
            nav.push_menu(ADMIN_MENU)?;
            Ok(())
        });
    }

    builder
        .item_then_close("Log Out", |app: &mut App<G, A, C>, _| {
            app.log_out();
            Ok(())
        })
        .build()
}
