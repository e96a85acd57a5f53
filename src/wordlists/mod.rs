//! Word lists for the game engine
//!
//! The two allowed sets are loaded once and then shared read-only by every
//! game. [`WordLists`] is the explicit context object carrying both.

pub mod loader;

use crate::core::Word;
pub use crate::error::WordlistKind;
use rustc_hash::FxHashSet;

/// An ordered, duplicate-free list of words with O(1) membership checks
#[derive(Debug, Clone)]
pub struct Wordlist {
    kind: WordlistKind,
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Wordlist {
    /// Build a list, keeping the first occurrence of each word in order
    pub fn from_words(kind: WordlistKind, words: impl IntoIterator<Item = Word>) -> Self {
        let mut index = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|word| index.insert(*word))
            .collect();

        Self { kind, words, index }
    }

    /// Which allowed set this is
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> WordlistKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn extend(&mut self, words: impl IntoIterator<Item = Word>) {
        for word in words {
            if self.index.insert(word) {
                self.words.push(word);
            }
        }
    }
}

/// The allowed solutions and allowed guesses, immutable once built
///
/// Build one per process and share it by reference (or `Arc`) across games.
#[derive(Debug, Clone)]
pub struct WordLists {
    solutions: Wordlist,
    guesses: Wordlist,
}

impl WordLists {
    /// Build the context from both lists
    ///
    /// Any solution missing from `guesses` is appended to it, so every
    /// solution is also a legal guess.
    pub fn new(
        solutions: impl IntoIterator<Item = Word>,
        guesses: impl IntoIterator<Item = Word>,
    ) -> Self {
        let solutions = Wordlist::from_words(WordlistKind::Solutions, solutions);
        let mut guesses = Wordlist::from_words(WordlistKind::Guesses, guesses);
        guesses.extend(solutions.words().iter().copied());

        Self { solutions, guesses }
    }

    /// Universe the shortlist is drawn from
    #[inline]
    #[must_use]
    pub const fn solutions(&self) -> &Wordlist {
        &self.solutions
    }

    /// Universe submitted guesses must belong to
    #[inline]
    #[must_use]
    pub const fn guesses(&self) -> &Wordlist {
        &self.guesses
    }
}
