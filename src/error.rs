//! Error types for the game engine
//!
//! Every fallible operation in the library returns [`Error`]. Parsing and
//! validation never produce partially populated values.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which of the two allowed sets a membership check ran against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordlistKind {
    Solutions,
    Guesses,
}

impl fmt::Display for WordlistKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solutions => write!(f, "allowed solutions"),
            Self::Guesses => write!(f, "allowed guesses"),
        }
    }
}

/// Top-level error type for the engine
#[derive(Debug, Error)]
pub enum Error {
    /// Text is not exactly five characters where a word is expected
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Character outside `a..=z`
    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    /// Feedback text outside the `G/Y/-/X` alphabet or of the wrong length
    #[error("invalid feedback {0:?}: expected 5 of G, Y, - or X")]
    InvalidFeedback(String),

    /// Well-formed word absent from the relevant allowed set
    #[error("{word:?} not in {kind}")]
    NotInWordlist { word: String, kind: WordlistKind },

    /// A guess was played on a game whose true solution is not known
    #[error("game has no known solution; replay turns with explicit feedback instead")]
    UnknownSolution,

    /// A wordlist that must contain words is empty
    #[error("{0} wordlist is empty")]
    EmptyWordlist(WordlistKind),

    /// Malformed line in a wordlist file
    #[error("{}:{line}: {source}", .path.display())]
    WordlistEntry {
        path: PathBuf,
        line: usize,
        #[source]
        source: Box<Error>,
    },

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
