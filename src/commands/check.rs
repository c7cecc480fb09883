//! One-shot feedback check
//!
//! Shows the feedback a guess would receive against a given secret, without
//! playing a game.

use crate::core::{Status, WORD_SIZE, evaluate};

/// Result of checking one guess
pub struct CheckResult {
    pub guess: String,
    pub secret: String,
    pub statuses: Vec<Status>,
}

impl CheckResult {
    /// True if every letter is in its right position
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.statuses.iter().all(|&s| s == Status::RightPos)
    }
}

fn normalize(label: &str, word: &str) -> Result<String, String> {
    let word = word.trim().to_uppercase();
    let len = word.chars().count();
    if len == WORD_SIZE {
        Ok(word)
    } else {
        Err(format!("{label} must be exactly {WORD_SIZE} letters, got {len}"))
    }
}

/// Evaluate `guess` against `secret`
///
/// Both words are uppercased. Dictionary membership is not checked.
///
/// # Errors
///
/// Returns an error if either word does not have exactly five letters.
pub fn check_word(guess: &str, secret: &str) -> Result<CheckResult, String> {
    let guess = normalize("Guess", guess)?;
    let secret = normalize("Secret", secret)?;
    let statuses = evaluate(&guess, &secret);

    Ok(CheckResult {
        guess,
        secret,
        statuses,
    })
}
