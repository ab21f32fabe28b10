//! Menu-driven game client session

pub mod app;
pub mod menus;

pub use app::App;
