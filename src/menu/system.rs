//! Stack-based menu navigation
//!
//! The menu on top of the stack is the one shown. Selecting an item runs its
//! action against the shared target; entering a submenu pushes it, leaving a
//! menu pops it. When the last menu is popped the system stops.

use super::model::Menu;
use crate::console::{Console, HasConsole};
use anyhow::Result;
use colored::Colorize;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

const SELECTION_PROMPT: &str = "Please select: ";

/// Configuration errors in a menu system
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("no menu named '{0}'")]
    UnknownMenuName(String),
    #[error("menu name '{0}' is used more than once")]
    DuplicateMenuName(String),
}

/// Whether the menu system still has a menu to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Stopped,
}

/// The registry of menus and the stack of active ones
///
/// Actions receive this to move between menus.
pub struct Navigator<T> {
    menus: FxHashMap<String, Arc<Menu<T>>>,
    stack: Vec<Arc<Menu<T>>>,
}

impl<T> Navigator<T> {
    /// Make the named menu current, on top of the existing stack
    ///
    /// # Errors
    /// Returns `MenuError::UnknownMenuName` if no menu has that name; the
    /// stack is left unchanged.
    pub fn push_menu(&mut self, name: &str) -> Result<(), MenuError> {
        let menu = self
            .menus
            .get(name)
            .ok_or_else(|| MenuError::UnknownMenuName(name.to_string()))?;
        self.stack.push(Arc::clone(menu));
        Ok(())
    }

    /// Leave the current menu, returning to the one below it
    pub fn pop_current_menu(&mut self) -> Option<Arc<Menu<T>>> {
        self.stack.pop()
    }

    #[must_use]
    pub fn current_menu(&self) -> Option<&Arc<Menu<T>>> {
        self.stack.last()
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        if self.stack.is_empty() {
            MenuState::Stopped
        } else {
            MenuState::Running
        }
    }

    /// Names on the stack, bottom first
    #[must_use]
    pub fn stack_names(&self) -> Vec<&str> {
        self.stack.iter().map(|menu| menu.name()).collect()
    }

    /// Remove `menu` if it still sits at stack position `depth`
    fn close(&mut self, depth: usize, menu: &Arc<Menu<T>>) {
        let Some(index) = depth.checked_sub(1) else {
            return;
        };
        if self
            .stack
            .get(index)
            .is_some_and(|entry| Arc::ptr_eq(entry, menu))
        {
            self.stack.remove(index);
        }
    }
}

/// A set of named menus driven from a stack
pub struct MenuSystem<T> {
    navigator: Navigator<T>,
}

impl<T> MenuSystem<T> {
    /// Register `menus` and push the start menu
    ///
    /// # Errors
    /// Returns `MenuError::DuplicateMenuName` if two menus share a name, or
    /// `MenuError::UnknownMenuName` if `start` is not one of them.
    pub fn new(menus: Vec<Menu<T>>, start: &str) -> Result<Self, MenuError> {
        let mut registry: FxHashMap<String, Arc<Menu<T>>> = FxHashMap::default();
        for menu in menus {
            let name = menu.name().to_string();
            if registry.contains_key(&name) {
                return Err(MenuError::DuplicateMenuName(name));
            }
            registry.insert(name, Arc::new(menu));
        }

        let mut navigator = Navigator {
            menus: registry,
            stack: Vec::new(),
        };
        navigator.push_menu(start)?;

        Ok(Self { navigator })
    }

    #[must_use]
    pub const fn navigator(&self) -> &Navigator<T> {
        &self.navigator
    }

    /// See [`Navigator::push_menu`]
    ///
    /// # Errors
    /// Returns `MenuError::UnknownMenuName` if no menu has that name.
    pub fn push_menu(&mut self, name: &str) -> Result<(), MenuError> {
        self.navigator.push_menu(name)
    }

    pub fn pop_current_menu(&mut self) -> Option<Arc<Menu<T>>> {
        self.navigator.pop_current_menu()
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.navigator.state()
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.navigator.depth()
    }
}

impl<T: HasConsole> MenuSystem<T> {
    /// Show menus and dispatch selections until the stack is empty
    ///
    /// # Errors
    /// Returns the first error raised by console input or by an action.
    pub fn run(&mut self, target: &mut T) -> Result<()> {
        while self.state() == MenuState::Running {
            self.step(target)?;
        }
        Ok(())
    }

    /// Show the current menu once and handle one selection
    ///
    /// Input that is blank, not a number, or out of range is ignored. After
    /// an item that does not continue its menu, the menu it was chosen from
    /// is closed, unless the action already closed it. Menus pushed by the
    /// action stay open.
    ///
    /// # Errors
    /// Returns the first error raised by console input or by the action.
    pub fn step(&mut self, target: &mut T) -> Result<()> {
        let Some(menu) = self.navigator.current_menu().cloned() else {
            return Ok(());
        };

        display(&*menu, target.console());
        let selection = target.console().read_integer(SELECTION_PROMPT)?;

        let Some(item) = selection.and_then(|number| menu.selection(number)) else {
            debug!(menu = menu.name(), ?selection, "ignoring menu selection");
            return Ok(());
        };

        let depth = self.navigator.depth();
        debug!(menu = menu.name(), item = item.label(), depth, "menu item selected");

        item.invoke(target, &mut self.navigator)?;

        if !item.continues_menu() {
            self.navigator.close(depth, &menu);
        }
        Ok(())
    }
}

fn display<T>(menu: &Menu<T>, console: &mut dyn Console) {
    console.print_blank_line();
    console.print_banner(&menu.title().bright_white().on_blue().to_string());
    for (i, item) in menu.items().iter().enumerate() {
        console.print_line(&format!("{}) {}", i + 1, item.label()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::menu::MenuBuilder;
    use anyhow::bail;

    struct Target {
        console: ScriptedConsole,
        log: Vec<&'static str>,
    }

    impl Target {
        fn new(input: &[&str]) -> Self {
            Self {
                console: ScriptedConsole::new(input.iter().copied()),
                log: Vec::new(),
            }
        }
    }

    impl HasConsole for Target {
        fn console(&mut self) -> &mut dyn Console {
            &mut self.console
        }
    }

    fn menus() -> Vec<Menu<Target>> {
        vec![
            MenuBuilder::new("Login", "Login Menu")
                .item("Login", |t: &mut Target, nav| {
                    t.log.push("login");
                    nav.push_menu("Main")?;
                    Ok(())
                })
                .close("Exit")
                .build(),
            MenuBuilder::new("Main", "Main Menu")
                .item("Admin Menu", |t: &mut Target, nav| {
                    t.log.push("admin");
                    nav.push_menu("Admin")?;
                    Ok(())
                })
                .item_then_close("Log Out", |t: &mut Target, _| {
                    t.log.push("logout");
                    Ok(())
                })
                .item_then_close("Switch", |_: &mut Target, nav| {
                    nav.push_menu("Admin")?;
                    Ok(())
                })
                .item_then_close("Leave", |_: &mut Target, nav| {
                    nav.pop_current_menu();
                    Ok(())
                })
                .item("Broken", |_: &mut Target, nav| {
                    nav.push_menu("Nowhere")?;
                    Ok(())
                })
                .item("Fail", |_: &mut Target, _| bail!("boom"))
                .build(),
            MenuBuilder::new("Admin", "Admin Menu")
                .close("Return to Main Menu")
                .build(),
        ]
    }

    fn system() -> MenuSystem<Target> {
        MenuSystem::new(menus(), "Login").unwrap()
    }

    #[test]
    fn starts_running_with_start_menu() {
        let system = system();
        assert_eq!(system.state(), MenuState::Running);
        assert_eq!(system.navigator().stack_names(), ["Login"]);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut menus = menus();
        menus.push(MenuBuilder::new("Main", "Other Main").build());
        assert_eq!(
            MenuSystem::new(menus, "Login").err(),
            Some(MenuError::DuplicateMenuName("Main".to_string()))
        );
    }

    #[test]
    fn unknown_start_menu_is_rejected() {
        assert_eq!(
            MenuSystem::new(menus(), "Missing").err(),
            Some(MenuError::UnknownMenuName("Missing".to_string()))
        );
    }

    #[test]
    fn push_unknown_leaves_stack_unchanged() {
        let mut system = system();
        assert!(system.push_menu("Nowhere").is_err());
        assert_eq!(system.depth(), 1);
    }

    #[test]
    fn push_then_pop_is_symmetric() {
        let mut system = system();
        system.push_menu("Main").unwrap();
        system.push_menu("Admin").unwrap();
        assert_eq!(system.navigator().stack_names(), ["Login", "Main", "Admin"]);

        system.pop_current_menu();
        system.pop_current_menu();
        assert_eq!(system.navigator().stack_names(), ["Login"]);
    }

    #[test]
    fn same_menu_may_be_pushed_twice() {
        let mut system = system();
        system.push_menu("Main").unwrap();
        system.push_menu("Main").unwrap();
        assert_eq!(system.navigator().stack_names(), ["Login", "Main", "Main"]);
    }

    #[test]
    fn popping_last_menu_stops() {
        let mut system = system();
        assert!(system.pop_current_menu().is_some());
        assert_eq!(system.state(), MenuState::Stopped);
        assert!(system.pop_current_menu().is_none());
    }

    #[test]
    fn invalid_selection_is_ignored() {
        let mut system = system();
        system.push_menu("Main").unwrap();
        let mut target = Target::new(&["9", "0", "", "abc", "-2"]);

        for _ in 0..5 {
            system.step(&mut target).unwrap();
            assert_eq!(system.navigator().stack_names(), ["Login", "Main"]);
        }
        assert!(target.log.is_empty());
        assert!(!target.console.transcript().contains("error"));
    }

    #[test]
    fn menu_is_displayed_with_numbered_items() {
        let mut system = system();
        let mut target = Target::new(&["7"]);
        system.step(&mut target).unwrap();

        let transcript = target.console.transcript();
        assert!(transcript.contains("Login Menu"));
        assert!(transcript.contains("1) Login"));
        assert!(transcript.contains("2) Exit"));
        assert_eq!(target.console.prompts, [SELECTION_PROMPT]);
    }

    #[test]
    fn full_navigation_round_trip() {
        let mut system = system();
        // login, admin menu, return, log out, exit
        let mut target = Target::new(&["1", "1", "1", "2", "2"]);

        system.run(&mut target).unwrap();

        assert_eq!(system.state(), MenuState::Stopped);
        assert_eq!(target.log, ["login", "admin", "logout"]);
        assert_eq!(target.console.remaining_input(), 0);
    }

    #[test]
    fn closing_item_that_pushes_keeps_the_pushed_menu() {
        let mut system = system();
        system.push_menu("Main").unwrap();
        let mut target = Target::new(&["3"]);

        system.step(&mut target).unwrap();

        assert_eq!(system.navigator().stack_names(), ["Login", "Admin"]);
    }

    #[test]
    fn closing_item_that_pops_itself_pops_once() {
        let mut system = system();
        system.push_menu("Main").unwrap();
        let mut target = Target::new(&["4"]);

        system.step(&mut target).unwrap();

        assert_eq!(system.navigator().stack_names(), ["Login"]);
    }

    #[test]
    fn closing_reentered_menu_closes_the_selected_copy() {
        let mut system = system();
        system.push_menu("Main").unwrap();
        system.push_menu("Main").unwrap();
        let mut target = Target::new(&["2"]);

        system.step(&mut target).unwrap();

        assert_eq!(system.navigator().stack_names(), ["Login", "Main"]);
    }

    #[test]
    fn unknown_menu_from_action_propagates() {
        let mut system = system();
        system.push_menu("Main").unwrap();
        let mut target = Target::new(&["5"]);

        let err = system.step(&mut target).unwrap_err();
        assert_eq!(
            err.downcast_ref::<MenuError>(),
            Some(&MenuError::UnknownMenuName("Nowhere".to_string()))
        );
        assert_eq!(system.navigator().stack_names(), ["Login", "Main"]);
    }

    #[test]
    fn action_error_stops_run() {
        let mut system = system();
        let mut target = Target::new(&["1", "6", "2"]);

        let err = system.run(&mut target).unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert_eq!(target.console.remaining_input(), 1);
    }

    #[test]
    fn closed_input_ends_run_with_error() {
        let mut system = system();
        let mut target = Target::new(&[]);
        assert!(system.run(&mut target).is_err());
    }
}
