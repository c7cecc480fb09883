//! Formatting utilities shared by the front ends

use crate::core::{LetterCell, Status};
use crate::game::GameEngine;

/// On-screen keyboard, alphabetical, ten keys per row
pub const KEYBOARD_ROWS: [&str; 3] = ["ABCDEFGHIJ", "KLMNOPQRST", "UVWXYZ"];

/// What the board has revealed about a keyboard letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyHint {
    /// Not typed in this game
    Unused,
    /// Typed, but never marked present
    Used,
    /// Marked present somewhere
    Present,
    /// Marked in the right position somewhere
    Correct,
}

/// Best hint the engine's board gives for `ch`
#[must_use]
pub fn key_hint(engine: &GameEngine, ch: char) -> KeyHint {
    let best = engine
        .rows()
        .iter()
        .flatten()
        .filter(|cell| cell.char() == Some(ch))
        .map(|cell| match cell.status() {
            Status::RightPos => KeyHint::Correct,
            Status::WrongPos => KeyHint::Present,
            Status::Empty => KeyHint::Unused,
        })
        .max()
        .unwrap_or(KeyHint::Unused);

    if best == KeyHint::Unused && engine.used_letter(ch) {
        KeyHint::Used
    } else {
        best
    }
}

/// Format feedback as emoji string
#[must_use]
pub fn statuses_to_emoji(statuses: &[Status]) -> String {
    statuses.iter().copied().map(Status::as_emoji).collect()
}

/// Format an evaluated row as emoji string
#[must_use]
pub fn row_to_emoji(row: &[LetterCell]) -> String {
    row.iter().map(|cell| cell.status().as_emoji()).collect()
}

/// Letters of a row, with `_` for empty slots
#[must_use]
pub fn row_letters(row: &[LetterCell]) -> String {
    row.iter().map(|cell| cell.char().unwrap_or('_')).collect()
}

/// The status line: attempt count followed by the latest message
#[must_use]
pub fn status_line(engine: &GameEngine, message: &str) -> String {
    format!("Number of guesses: {}\t{message}", engine.num_attempts())
}
