//! Wordle Game
//!
//! A Wordle-style guessing game: find the hidden 5-letter word in 6 tries,
//! with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::{SeedableRng, rngs::StdRng};
//! use wordle_game::core::Status;
//! use wordle_game::game::{GameEngine, GameState, Notification};
//!
//! let words = vec!["ABIDE".to_string(), "ALIVE".to_string()];
//! let mut engine = GameEngine::new(words, StdRng::seed_from_u64(1)).unwrap();
//! engine.add_observer(|engine: &GameEngine, n: Notification| {
//!     println!("{} ({} guesses)", n.message(), engine.num_attempts());
//! });
//!
//! engine.new_game_with("ABIDE");
//! engine.enter_guess("ALIVE");
//! assert_eq!(engine.cell(0, 0).unwrap().status(), Status::RightPos);
//! assert_eq!(engine.state(), GameState::Ongoing);
//! ```

// Core domain types
pub mod core;

// Game rules and observers
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
