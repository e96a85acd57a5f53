//! Wordle Engine
//!
//! Scores guesses against a hidden five-letter solution and keeps, turn by
//! turn, the shortlist of solutions still consistent with every feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::{Solution, Word};
//! use wordle_engine::game::Game;
//! use wordle_engine::wordlists::WordLists;
//!
//! let solutions: Vec<Word> = ["crane", "trace", "slate"]
//!     .iter()
//!     .map(|s| Word::new(s).unwrap())
//!     .collect();
//! let lists = WordLists::new(solutions.clone(), solutions);
//!
//! let mut game = Game::new(Solution::new("crane").unwrap(), &lists);
//! let feedback = game.play_guess(Word::new("trace").unwrap()).unwrap();
//!
//! assert_eq!(feedback.to_string(), "-GGYG");
//! assert_eq!(game.shortlist_size(), 1);
//! assert!(!game.won());
//! ```

// Errors shared by every module
pub mod error;

// Core domain types
pub mod core;

// Game state and shortlist filtering
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{Error, Result};
