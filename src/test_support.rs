//! Shared fixtures for unit tests

use crate::core::Word;
use crate::wordlists::WordLists;

/// Small allowed-solutions list with plenty of overlapping letters
pub const FIXTURE_SOLUTIONS: &[&str] = &[
    "aback", "abase", "asses", "blame", "brace", "clout", "crane", "crate", "flame", "frame",
    "grace", "grate", "irate", "plane", "raise", "scare", "shame", "share", "snare", "spare",
    "stare", "trace", "waves",
];

/// Guess-only words (solutions are folded in by `WordLists::new`)
pub const FIXTURE_GUESSES: &[&str] = &["aahed", "adieu", "chant", "salet", "sassy", "slate"];

pub fn words(texts: &[&str]) -> Vec<Word> {
    texts.iter().map(|s| Word::new(s).unwrap()).collect()
}

pub fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

pub fn fixture_lists() -> WordLists {
    WordLists::new(words(FIXTURE_SOLUTIONS), words(FIXTURE_GUESSES))
}
