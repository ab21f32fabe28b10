//! TErdle
//!
//! A console client for a five-letter word guessing game. Players log in,
//! play the daily or a random word against a game server, and review their
//! statistics through a stack of text menus.
//!
//! # Quick Start
//!
//! ```rust
//! use terdle::core::{MatchClass, score};
//!
//! let letters = score("train", "crate").unwrap();
//! assert_eq!(letters[1].class(), MatchClass::ExactMatch);
//! assert_eq!(letters[3].class(), MatchClass::WrongLocation);
//! ```

// Core domain types
pub mod core;

// Rounds and statistics
pub mod game;

// Menu navigation engine
pub mod menu;

// Line-oriented console
pub mod console;

// Terminal output formatting
pub mod output;

// Game server and login clients
pub mod services;

// Word lists
pub mod wordlists;

// Interactive session
pub mod interactive;

// Command implementations
pub mod commands;

// Client configuration
pub mod config;
