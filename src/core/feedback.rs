//! Letter feedback for a confirmed guess
//!
//! Feedback is computed in two passes over the row:
//! 1. Any letter that occurs anywhere in the secret is marked `WrongPos`
//! 2. Any letter equal to the secret's letter at the same position is
//!    upgraded to `RightPos`
//!
//! Cells matching neither stay `Empty`. Secret letters are not consumed, so a
//! guess that repeats a letter gets `WrongPos` on every copy as long as the
//! secret contains that letter at least once. This differs from the official
//! game, which only colours as many copies as the answer holds.

use super::{LetterCell, Status};

/// Evaluate a row of guessed cells against the secret, in place
///
/// Cells without a letter are left alone. The secret may be any length; a
/// position past its end can never be `RightPos`.
pub fn evaluate_row(row: &mut [LetterCell], secret: &[char]) {
    // Pass 1: present anywhere in the secret
    for cell in row.iter_mut() {
        if let Some(ch) = cell.char()
            && secret.contains(&ch)
        {
            cell.set_status(Status::WrongPos);
        }
    }

    // Pass 2: exact position match overrides pass 1
    for (pos, cell) in row.iter_mut().enumerate() {
        if let Some(ch) = cell.char()
            && secret.get(pos) == Some(&ch)
        {
            cell.set_status(Status::RightPos);
        }
    }
}

/// Compute the feedback `guess` would receive against `secret`
///
/// # Examples
/// ```
/// use wordle_game::core::{evaluate, Status};
///
/// let feedback = evaluate("ALIVE", "ABIDE");
/// assert_eq!(
///     feedback,
///     vec![
///         Status::RightPos,
///         Status::Empty,
///         Status::WrongPos,
///         Status::Empty,
///         Status::RightPos,
///     ]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &str, secret: &str) -> Vec<Status> {
    let secret: Vec<char> = secret.chars().collect();
    let mut row: Vec<LetterCell> = guess
        .chars()
        .map(|ch| {
            let mut cell = LetterCell::new();
            cell.set_char(ch);
            cell
        })
        .collect();

    evaluate_row(&mut row, &secret);
    row.iter().map(LetterCell::status).collect()
}

/// True if every cell in the row is `RightPos`
#[must_use]
pub fn is_full_match(row: &[LetterCell]) -> bool {
    row.iter().all(|cell| cell.status() == Status::RightPos)
}
