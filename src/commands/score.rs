//! Score command
//!
//! Scores one guess against one solution, without any wordlist checks.

use crate::core::{Feedback, Word};
use crate::error::Result;

/// Result of scoring a single guess
pub struct ScoreResult {
    pub solution: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Parse both words and score `guess` against `solution`
///
/// # Errors
///
/// Returns an error if either word is malformed.
pub fn score_guess(solution: &str, guess: &str) -> Result<ScoreResult> {
    let solution = Word::new(solution)?;
    let guess = Word::new(guess)?;

    Ok(ScoreResult {
        solution,
        guess,
        feedback: Feedback::score(&solution, &guess),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn scores_valid_words() {
        let result = score_guess("asses", "sassy").unwrap();
        assert_eq!(result.feedback.to_string(), "YYGY-");
        assert_eq!(result.guess.as_str(), "sassy");
    }

    #[test]
    fn rejects_malformed_words() {
        assert!(matches!(
            score_guess("abc", "crane"),
            Err(Error::InvalidLength { .. })
        ));
        assert!(matches!(
            score_guess("crane", "CRANE"),
            Err(Error::InvalidCharacter { .. })
        ));
    }
}
