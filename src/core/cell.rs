//! A single square of the guess grid
//!
//! A `LetterCell` holds the letter typed into one grid position and the
//! feedback that position received once its attempt was evaluated.

/// Feedback for one guessed letter
///
/// There is no separate "absent" variant: a letter that is not in the secret
/// keeps `Empty` after evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// Not evaluated yet, or evaluated and absent from the secret
    #[default]
    Empty,
    /// Letter is in the secret and in this exact position
    RightPos,
    /// Letter occurs somewhere in the secret, but not here
    WrongPos,
}

impl Status {
    /// Emoji square for this status (🟩 / 🟨 / ⬜)
    #[inline]
    #[must_use]
    pub const fn as_emoji(self) -> char {
        match self {
            Self::RightPos => '🟩',
            Self::WrongPos => '🟨',
            Self::Empty => '⬜',
        }
    }
}

/// One grid position: a letter (or nothing yet) plus its feedback status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterCell {
    ch: Option<char>,
    status: Status,
}

impl LetterCell {
    /// A fresh cell: no letter, `Status::Empty`
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ch: None,
            status: Status::Empty,
        }
    }

    /// The letter in this cell, or `None` if nothing has been entered
    #[inline]
    #[must_use]
    pub const fn char(&self) -> Option<char> {
        self.ch
    }

    /// Overwrite the letter unconditionally
    #[inline]
    pub const fn set_char(&mut self, ch: char) {
        self.ch = Some(ch);
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub const fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// True if no letter has been entered
    #[inline]
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        self.ch.is_none()
    }
}
