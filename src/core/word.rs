//! Wordle word representation
//!
//! A Word stores exactly five lowercase ASCII letters as bytes. Parsing checks
//! shape only; membership in an allowed set is a separate step.

use crate::error::{Error, Result};
use crate::wordlists::Wordlist;
use std::fmt;
use std::str::FromStr;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A validated 5-letter Wordle word
///
/// Cheap to copy; equality and hashing are byte-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Parse a word from text
    ///
    /// No case folding is done: `"Crane"` is rejected.
    ///
    /// # Errors
    /// - [`Error::InvalidLength`] if the text is not exactly 5 characters
    /// - [`Error::InvalidCharacter`] on the first character outside `a..=z`
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.as_str(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self> {
        let actual = text.chars().count();
        if actual != WORD_LENGTH {
            return Err(Error::InvalidLength {
                expected: WORD_LENGTH,
                actual,
            });
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (position, ch) in text.chars().enumerate() {
            if !ch.is_ascii_lowercase() {
                return Err(Error::InvalidCharacter { ch, position });
            }
            letters[position] = ch as u8;
        }

        Ok(Self(letters))
    }

    /// Build a word from raw bytes, re-checking the alphabet
    ///
    /// # Errors
    /// Returns [`Error::InvalidCharacter`] if any byte is not `b'a'..=b'z'`.
    pub fn from_bytes(bytes: [u8; WORD_LENGTH]) -> Result<Self> {
        if let Some(position) = bytes.iter().position(|b| !b.is_ascii_lowercase()) {
            return Err(Error::InvalidCharacter {
                ch: char::from(bytes[position]),
                position,
            });
        }
        Ok(Self(bytes))
    }

    /// Get the word as a string slice
    ///
    /// # Panics
    /// Will not panic - every constructor guarantees ASCII bytes.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).expect("word bytes are ASCII")
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    /// Check membership in an allowed set
    ///
    /// # Errors
    /// Returns [`Error::NotInWordlist`] naming the list's kind.
    pub fn validate_in(&self, list: &Wordlist) -> Result<()> {
        if list.contains(self) {
            Ok(())
        } else {
            Err(Error::NotInWordlist {
                word: self.to_string(),
                kind: list.kind(),
            })
        }
    }
}

impl FromStr for Word {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
