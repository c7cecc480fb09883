//! Dictionary for the game
//!
//! Provides the embedded default word list compiled into the binary, plus a
//! loader for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
