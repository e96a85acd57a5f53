//! Game state and shortlist maintenance
//!
//! A [`Game`] records turns and keeps the shortlist of solutions consistent
//! with every feedback seen so far.

mod shortlist;
mod state;

pub use shortlist::{FilterMode, is_consistent, recompute_shortlist};
pub use state::{Game, GameStatus, MAX_GUESSES};
