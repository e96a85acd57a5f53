//! Evaluate command
//!
//! Validates a reported game (solution, past turns, optional proposed guess),
//! rebuilds it and reports the status and how much the proposed guess narrows
//! the shortlist.

use crate::core::{Feedback, Solution, Word};
use crate::error::Result;
use crate::game::{FilterMode, Game, GameStatus};
use crate::wordlists::WordLists;
use std::str::FromStr;

/// A past turn as reported by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnInput {
    pub guess: String,
    pub feedback: String,
}

impl FromStr for TurnInput {
    type Err = String;

    /// Parse `guess:feedback`, e.g. `slate:--G-G`
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (guess, feedback) = s
            .split_once(':')
            .ok_or_else(|| format!("expected guess:feedback, got {s:?}"))?;

        Ok(Self {
            guess: guess.to_string(),
            feedback: feedback.to_string(),
        })
    }
}

/// Everything needed to evaluate a game
#[derive(Debug, Clone, Default)]
pub struct EvaluateRequest {
    pub solution: String,
    pub turns: Vec<TurnInput>,
    pub proposed_guess: Option<String>,
}

/// Result of evaluating a game
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub status: GameStatus,
    pub turn_valid: bool,
    pub shortlist_before: usize,
    pub shortlist_after: usize,
    /// Fraction of the shortlist removed by the proposed guess
    pub reduction_ratio: f64,
    /// Feedback for the proposed guess, if one was given
    pub feedback: Option<Feedback>,
}

/// Validate and evaluate a reported game
///
/// Validation order: solution, proposed guess, then each past turn. Past
/// feedback is replayed as given.
///
/// # Errors
///
/// The first validation failure, unchanged.
pub fn evaluate(
    lists: &WordLists,
    request: &EvaluateRequest,
    mode: FilterMode,
) -> Result<Evaluation> {
    let solution = Solution::new(&request.solution)?;
    solution.validate(lists)?;

    let proposed = request
        .proposed_guess
        .as_deref()
        .filter(|text| !text.is_empty())
        .map(|text| parse_guess(lists, text))
        .transpose()?;

    let turns = request
        .turns
        .iter()
        .map(|turn| -> Result<(Word, Feedback)> {
            Ok((parse_guess(lists, &turn.guess)?, Feedback::parse(&turn.feedback)?))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut game = Game::new(solution, lists).with_filter_mode(mode);
    for (guess, feedback) in turns {
        game.replay_turn(guess, feedback);
    }

    let shortlist_before = game.shortlist_size();
    let feedback = proposed.map(|guess| game.play_guess(guess)).transpose()?;
    let shortlist_after = game.shortlist_size();

    let reduction_ratio = if shortlist_before == 0 {
        0.0
    } else {
        1.0 - shortlist_after as f64 / shortlist_before as f64
    };

    Ok(Evaluation {
        status: game.status(),
        turn_valid: true,
        shortlist_before,
        shortlist_after,
        reduction_ratio,
        feedback,
    })
}

fn parse_guess(lists: &WordLists, text: &str) -> Result<Word> {
    let guess = Word::new(text)?;
    guess.validate_in(lists.guesses())?;
    Ok(guess)
}

impl Evaluation {
    /// Feedback text for the proposed guess, empty when there was none
    #[must_use]
    pub fn feedback_text(&self) -> String {
        self.feedback.map(|f| f.to_string()).unwrap_or_default()
    }
}
