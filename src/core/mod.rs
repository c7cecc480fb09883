//! Core domain types for the game board
//!
//! Pure value types with no I/O: grid cells, the used-letter multiset, and
//! the feedback computation.

mod cell;
mod feedback;
mod letters;

pub use cell::{LetterCell, Status};
pub use feedback::{evaluate, evaluate_row, is_full_match};
pub use letters::LetterBag;

/// Number of letters in every word
pub const WORD_SIZE: usize = 5;

/// Number of attempts a player gets before losing
pub const NUM_TRIES: usize = 6;
