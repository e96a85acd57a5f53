//! Shortlist filtering
//!
//! Narrows a candidate list to the words consistent with every recorded
//! (guess, feedback) pair. The pass is an embarrassingly parallel filter over
//! read-only history, run on the rayon pool unless sequential mode is chosen.

use crate::core::{Feedback, Word};
use rayon::prelude::*;

/// Minimum candidates handed to a rayon task at once
const PARALLEL_MIN_LEN: usize = 64;

/// How a shortlist pass is executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Plain iterator on the calling thread
    Sequential,
    /// Indexed parallel iterator on the rayon pool (default)
    #[default]
    Parallel,
}

/// Check a candidate solution against the full history
///
/// True iff scoring every recorded guess against `candidate` reproduces the
/// recorded feedback for that guess.
#[must_use]
pub fn is_consistent(candidate: &Word, guesses: &[Word], feedbacks: &[Feedback]) -> bool {
    debug_assert_eq!(guesses.len(), feedbacks.len());

    guesses
        .iter()
        .zip(feedbacks)
        .all(|(guess, &observed)| Feedback::score(candidate, guess) == observed)
}

/// Filter `prior` down to the candidates consistent with the history
///
/// Every candidate is evaluated exactly once and the full result is collected
/// before returning. Survivors keep their relative order from `prior` in both
/// modes, so the two modes return identical vectors.
///
/// # Examples
/// ```
/// use wordle_engine::core::{Feedback, Word};
/// use wordle_engine::game::{FilterMode, recompute_shortlist};
///
/// let prior: Vec<Word> = ["crane", "trace", "brace"]
///     .iter()
///     .map(|s| Word::new(s).unwrap())
///     .collect();
/// let guesses = [Word::new("trace").unwrap()];
/// let feedbacks = [Feedback::parse("-GGYG").unwrap()];
///
/// let next = recompute_shortlist(&prior, &guesses, &feedbacks, FilterMode::Parallel);
/// assert_eq!(next, [Word::new("crane").unwrap()]);
/// ```
#[must_use]
pub fn recompute_shortlist(
    prior: &[Word],
    guesses: &[Word],
    feedbacks: &[Feedback],
    mode: FilterMode,
) -> Vec<Word> {
    if prior.is_empty() {
        return Vec::new();
    }

    match mode {
        FilterMode::Sequential => prior
            .iter()
            .filter(|candidate| is_consistent(candidate, guesses, feedbacks))
            .copied()
            .collect(),
        FilterMode::Parallel => prior
            .par_iter()
            .with_min_len(PARALLEL_MIN_LEN)
            .filter(|candidate| is_consistent(candidate, guesses, feedbacks))
            .copied()
            .collect(),
    }
}
