//! The hidden answer of a game

use super::{Feedback, Word};
use crate::error::Result;
use crate::wordlists::WordLists;
use std::fmt;

/// A word known (or later checked) to belong to the allowed solutions
///
/// Construction only checks shape, so a solution can be parsed before the
/// wordlists are loaded; [`Solution::validate`] checks membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Solution(Word);

impl Solution {
    /// Parse a solution from text
    ///
    /// # Errors
    /// Same as [`Word::new`].
    pub fn new(text: &str) -> Result<Self> {
        Word::new(text).map(Self)
    }

    /// Check the word is still well formed and is an allowed solution
    ///
    /// # Errors
    /// [`crate::Error::InvalidCharacter`] for malformed bytes,
    /// [`crate::Error::NotInWordlist`] if absent from the solutions list.
    pub fn validate(&self, lists: &WordLists) -> Result<()> {
        Word::from_bytes(*self.0.chars())?;
        self.0.validate_in(lists.solutions())
    }

    /// The underlying word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.0
    }

    /// Score a guess against this solution
    #[must_use]
    pub fn check_guess(&self, guess: &Word) -> Feedback {
        Feedback::score(&self.0, guess)
    }
}

impl From<Word> for Solution {
    fn from(word: Word) -> Self {
        Self(word)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
