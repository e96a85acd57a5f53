//! Core domain types for Wordle
//!
//! Words, solutions and feedback. All types here are plain values with no
//! shared state.

mod feedback;
mod solution;
mod word;

pub use feedback::{Feedback, TileColor};
pub use solution::Solution;
pub use word::{WORD_LENGTH, Word};
