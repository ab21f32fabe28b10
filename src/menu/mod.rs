//! Hierarchical menus
//!
//! [`MenuBuilder`] assembles immutable [`Menu`]s; [`MenuSystem`] keeps them in
//! a registry and drives the active one from a stack.

mod model;
mod system;

pub use model::{Action, Menu, MenuBuilder, MenuItem};
pub use system::{MenuError, MenuState, MenuSystem, Navigator};
