//! Declarative menus
//!
//! A menu is a name, a title, and an ordered list of items. Each item binds
//! a label to an optional action run against the shared target, and says
//! whether the menu stays open afterwards. Menus never change once built.

use super::system::Navigator;
use anyhow::Result;
use std::fmt;

/// Behaviour bound to a menu item
///
/// Receives the shared target and the navigator, so it can push or pop menus.
pub type Action<T> = Box<dyn Fn(&mut T, &mut Navigator<T>) -> Result<()> + Send + Sync>;

/// One selectable entry of a menu
pub struct MenuItem<T> {
    label: String,
    action: Option<Action<T>>,
    continues_menu: bool,
}

impl<T> MenuItem<T> {
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the menu stays open after this item runs
    #[must_use]
    pub const fn continues_menu(&self) -> bool {
        self.continues_menu
    }

    /// Run the item's action, if it has one
    ///
    /// # Errors
    /// Propagates the action's error.
    pub fn invoke(&self, target: &mut T, navigator: &mut Navigator<T>) -> Result<()> {
        match &self.action {
            Some(action) => action(target, navigator),
            None => Ok(()),
        }
    }
}

impl<T> fmt::Debug for MenuItem<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("label", &self.label)
            .field("has_action", &self.action.is_some())
            .field("continues_menu", &self.continues_menu)
            .finish()
    }
}

/// A named, titled, immutable list of items
#[derive(Debug)]
pub struct Menu<T> {
    name: String,
    title: String,
    items: Vec<MenuItem<T>>,
}

impl<T> Menu<T> {
    /// Unique name used for navigation
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn items(&self) -> &[MenuItem<T>] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item by 1-based selection number, as shown to the user
    #[must_use]
    pub fn selection(&self, number: i64) -> Option<&MenuItem<T>> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.items.get(index)
    }
}

/// Builder for [`Menu`]
///
/// Items are shown in registration order.
///
/// # Examples
/// ```
/// use terdle::menu::MenuBuilder;
///
/// let menu = MenuBuilder::<u32>::new("Counter", "Counter Menu")
///     .item("Increment", |count, _| {
///         *count += 1;
///         Ok(())
///     })
///     .close("Exit")
///     .build();
///
/// assert_eq!(menu.len(), 2);
/// assert!(!menu.items()[1].continues_menu());
/// ```
pub struct MenuBuilder<T> {
    name: String,
    title: String,
    items: Vec<MenuItem<T>>,
}

impl<T> MenuBuilder<T> {
    #[must_use]
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Add an item that keeps the menu open after running
    #[must_use]
    pub fn item<F>(self, label: impl Into<String>, action: F) -> Self
    where
        F: Fn(&mut T, &mut Navigator<T>) -> Result<()> + Send + Sync + 'static,
    {
        self.item_with(label, action, true)
    }

    /// Add an item that closes the menu after running
    #[must_use]
    pub fn item_then_close<F>(self, label: impl Into<String>, action: F) -> Self
    where
        F: Fn(&mut T, &mut Navigator<T>) -> Result<()> + Send + Sync + 'static,
    {
        self.item_with(label, action, false)
    }

    /// Add an item with an explicit continue flag
    #[must_use]
    pub fn item_with<F>(mut self, label: impl Into<String>, action: F, continues_menu: bool) -> Self
    where
        F: Fn(&mut T, &mut Navigator<T>) -> Result<()> + Send + Sync + 'static,
    {
        self.items.push(MenuItem {
            label: label.into(),
            action: Some(Box::new(action)),
            continues_menu,
        });
        self
    }

    /// Add an item that only closes the menu
    #[must_use]
    pub fn close(mut self, label: impl Into<String>) -> Self {
        self.items.push(MenuItem {
            label: label.into(),
            action: None,
            continues_menu: false,
        });
        self
    }

    #[must_use]
    pub fn build(self) -> Menu<T> {
        Menu {
            name: self.name,
            title: self.title,
            items: self.items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Menu<Vec<&'static str>> {
        MenuBuilder::new("Main", "Main Menu")
            .item("Play", |log: &mut Vec<&'static str>, _| {
                log.push("play");
                Ok(())
            })
            .item("Play", |log: &mut Vec<&'static str>, _| {
                log.push("play again");
                Ok(())
            })
            .item_then_close("Log Out", |log: &mut Vec<&'static str>, _| {
                log.push("logout");
                Ok(())
            })
            .close("Exit")
            .build()
    }

    #[test]
    fn items_keep_registration_order() {
        let menu = sample();
        let labels: Vec<&str> = menu.items().iter().map(MenuItem::label).collect();
        assert_eq!(labels, ["Play", "Play", "Log Out", "Exit"]);
        assert_eq!(menu.name(), "Main");
        assert_eq!(menu.title(), "Main Menu");
    }

    #[test]
    fn continue_flags() {
        let menu = sample();
        let flags: Vec<bool> = menu.items().iter().map(MenuItem::continues_menu).collect();
        assert_eq!(flags, [true, true, false, false]);
    }

    #[test]
    fn selection_is_one_based_and_bounded() {
        let menu = sample();
        assert_eq!(menu.selection(1).map(MenuItem::label), Some("Play"));
        assert_eq!(menu.selection(4).map(MenuItem::label), Some("Exit"));
        assert!(menu.selection(0).is_none());
        assert!(menu.selection(5).is_none());
        assert!(menu.selection(-1).is_none());
    }

    #[test]
    fn menus_are_shareable_across_threads() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<Menu<Vec<&'static str>>>();
    }

    #[test]
    fn empty_menu() {
        let menu = MenuBuilder::<()>::new("Empty", "Nothing").build();
        assert!(menu.is_empty());
        assert!(menu.selection(1).is_none());
    }
}
