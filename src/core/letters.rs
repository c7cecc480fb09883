//! Multiset of letters placed on the board
//!
//! Tracks how many times each letter has been typed by entries that are still
//! on the grid, so a front end can grey out keys already tried.

use rustc_hash::FxHashMap;

/// Counted bag of characters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterBag {
    counts: FxHashMap<char, usize>,
}

impl LetterBag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one instance of `ch`
    #[inline]
    pub fn add(&mut self, ch: char) {
        *self.counts.entry(ch).or_insert(0) += 1;
    }

    /// Remove a single instance of `ch`
    ///
    /// Returns `false` if the letter was not in the bag.
    pub fn remove_one(&mut self, ch: char) -> bool {
        let Some(count) = self.counts.get_mut(&ch) else {
            return false;
        };

        *count -= 1;
        if *count == 0 {
            self.counts.remove(&ch);
        }
        true
    }

    /// True if at least one instance of `ch` is present
    #[inline]
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.counts.contains_key(&ch)
    }

    /// Number of instances of `ch`
    #[inline]
    #[must_use]
    pub fn count(&self, ch: char) -> usize {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    /// Total number of letters, counting duplicates
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }
}
