//! Word list loading utilities
//!
//! Loads the allowed sets from plain text files, one word per line.

use super::{WordLists, WordlistKind};
use crate::core::Word;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// File holding the allowed solutions inside a data directory
pub const SOLUTIONS_FILE: &str = "allowed_solutions.txt";

/// File holding the allowed guesses inside a data directory
pub const GUESSES_FILE: &str = "allowed_guesses.txt";

/// Load words from a file
///
/// Blank lines and lines starting with `#` are skipped; surrounding
/// whitespace is trimmed. Every other line must be a valid word.
///
/// # Errors
///
/// - [`Error::Io`] if the file cannot be read
/// - [`Error::WordlistEntry`] for the first malformed line (1-based)
///
/// # Examples
/// ```no_run
/// use wordle_engine::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/allowed_solutions.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Some((idx + 1, trimmed))
            }
        })
        .map(|(line, text)| {
            Word::new(text).map_err(|source| Error::WordlistEntry {
                path: path.to_path_buf(),
                line,
                source: Box::new(source),
            })
        })
        .collect()
}

/// Load both allowed sets from a data directory
///
/// Reads [`SOLUTIONS_FILE`] and [`GUESSES_FILE`].
///
/// # Errors
///
/// Any error from [`load_from_file`], or [`Error::EmptyWordlist`] if no
/// solutions were found.
pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<WordLists> {
    let dir = dir.as_ref();
    let solutions = load_from_file(dir.join(SOLUTIONS_FILE))?;
    let guesses = load_from_file(dir.join(GUESSES_FILE))?;

    if solutions.is_empty() {
        return Err(Error::EmptyWordlist(WordlistKind::Solutions));
    }

    let lists = WordLists::new(solutions, guesses);
    tracing::info!(
        dir = %dir.display(),
        solutions = lists.solutions().len(),
        guesses = lists.guesses().len(),
        "loaded wordlists"
    );

    Ok(lists)
}

/// Convert a string slice to words, failing on the first invalid entry
///
/// # Errors
///
/// The parse error of the first malformed entry.
///
/// # Examples
/// ```
/// use wordle_engine::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "slate"]).unwrap();
/// assert_eq!(words.len(), 2);
/// assert!(words_from_slice(&["crane", "abc"]).is_err());
/// ```
pub fn words_from_slice(slice: &[&str]) -> Result<Vec<Word>> {
    slice.iter().map(|s| Word::new(s)).collect()
}
