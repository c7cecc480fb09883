//! Game states and the notifications sent to observers

use std::fmt;

/// Resting state of a game between operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Accepting letters and guesses
    #[default]
    Ongoing,
    /// A legal guess matched the secret
    Won,
    /// The last attempt was used without a match
    Lost,
}

impl GameState {
    /// True for `Won` and `Lost`
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Why a guess was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IllegalReason {
    /// Confirmed before the row was full
    Incomplete,
    /// Whole-word entry with the wrong number of letters
    WrongLength,
    /// Full row, but the word is not in the dictionary
    NotInDictionary,
}

/// Event broadcast to observers after the engine changes
///
/// A rejected word is reported as `IllegalWord` but never becomes the
/// engine's state; the game stays `Ongoing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    Ongoing,
    Won,
    Lost,
    IllegalWord(IllegalReason),
}

impl Notification {
    /// Fixed status message for this event
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Ongoing => "Make a guess!",
            Self::Won => "You won!",
            Self::Lost => "You lost.",
            Self::IllegalWord(_) => "Illegal word.",
        }
    }

    #[must_use]
    pub const fn is_illegal(self) -> bool {
        matches!(self, Self::IllegalWord(_))
    }
}

impl From<GameState> for Notification {
    fn from(state: GameState) -> Self {
        match state {
            GameState::Ongoing => Self::Ongoing,
            GameState::Won => Self::Won,
            GameState::Lost => Self::Lost,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
