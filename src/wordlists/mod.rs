//! Word lists for offline play
//!
//! Provides the embedded target list compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
