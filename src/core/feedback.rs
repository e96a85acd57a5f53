//! Wordle feedback calculation and representation
//!
//! Feedback is one tile colour per guess position:
//! - Grey (letter not in the solution, or all copies already credited)
//! - Yellow (letter in the solution, wrong position)
//! - Green (letter in the correct position)
//!
//! The textual form is `G`/`Y`/`-`, e.g. `"--G-G"`.

use super::word::{WORD_LENGTH, Word};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Outcome for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileColor {
    Grey,
    Yellow,
    Green,
}

impl TileColor {
    /// Character used in the textual encoding
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Grey => '-',
        }
    }

    /// Emoji square for terminal display
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Grey => '⬜',
        }
    }

    const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' => Some(Self::Green),
            'Y' | 'y' => Some(Self::Yellow),
            '-' | 'X' | 'x' => Some(Self::Grey),
            _ => None,
        }
    }
}

/// Feedback for one guess: a tile colour per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([TileColor; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([TileColor::Green; WORD_LENGTH]);

    /// Score `guess` against `solution`
    ///
    /// # Algorithm
    /// 1. Green pass: exact position matches, consuming that solution index
    /// 2. Yellow pass: for each non-green position, the first unconsumed
    ///    solution index holding the same letter (scanning left to right) is
    ///    consumed and the tile turns yellow; otherwise it stays grey
    ///
    /// A repeated guess letter is therefore credited at most as many times as
    /// it appears in the solution, and greens always win over yellows.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Feedback, Word};
    ///
    /// let solution = Word::new("asses").unwrap();
    /// let guess = Word::new("sassy").unwrap();
    ///
    /// assert_eq!(Feedback::score(&solution, &guess).to_string(), "YYGY-");
    /// ```
    #[must_use]
    pub fn score(solution: &Word, guess: &Word) -> Self {
        let solution = solution.chars();
        let guess = guess.chars();
        let mut tiles = [TileColor::Grey; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        // Allow: Index needed to compare guess[i] and solution[i] and set two arrays
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == solution[i] {
                tiles[i] = TileColor::Green;
                consumed[i] = true;
            }
        }

        for i in 0..WORD_LENGTH {
            if tiles[i] == TileColor::Green {
                continue;
            }
            if let Some(j) = (0..WORD_LENGTH).find(|&j| !consumed[j] && solution[j] == guess[i]) {
                tiles[i] = TileColor::Yellow;
                consumed[j] = true;
            }
        }

        Self(tiles)
    }

    /// Parse feedback text such as `"--G-G"`
    ///
    /// Accepts, case-insensitively:
    /// - 'G' for green
    /// - 'Y' for yellow
    /// - '-' or 'X' for grey
    ///
    /// # Errors
    /// Returns [`Error::InvalidFeedback`] on any other character or when the
    /// text is not exactly 5 characters.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Feedback;
    ///
    /// let a = Feedback::parse("XyGx-").unwrap();
    /// let b = Feedback::parse("-YG--").unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || Error::InvalidFeedback(text.to_string());

        if text.chars().count() != WORD_LENGTH {
            return Err(invalid());
        }

        let mut tiles = [TileColor::Grey; WORD_LENGTH];
        for (tile, ch) in tiles.iter_mut().zip(text.chars()) {
            *tile = TileColor::from_symbol(ch).ok_or_else(invalid)?;
        }

        Ok(Self(tiles))
    }

    /// The tiles, in guess order
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[TileColor; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|tile| tile.emoji()).collect()
    }
}

impl FromStr for Feedback {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.0 {
            write!(f, "{}", tile.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::TileColor::{Green, Grey, Yellow};
    use proptest::prelude::*;

    fn score(solution: &str, guess: &str) -> Feedback {
        Feedback::score(&Word::new(solution).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn score_all_grey() {
        assert_eq!(score("raise", "clout"), Feedback([Grey; 5]));
    }

    #[test]
    fn score_all_green() {
        assert_eq!(score("raise", "raise"), Feedback::PERFECT);
        assert!(score("raise", "raise").is_perfect());
    }

    #[test]
    fn score_repeated_letters_credited_once_per_solution_copy() {
        assert_eq!(
            score("asses", "sassy"),
            Feedback([Yellow, Yellow, Green, Yellow, Grey])
        );
    }

    #[test]
    fn score_surplus_repeats_are_grey() {
        assert_eq!(
            score("waves", "sassy"),
            Feedback([Yellow, Green, Grey, Grey, Grey])
        );
    }

    #[test]
    fn score_green_takes_priority_over_earlier_yellow() {
        // FLOOR has two O's; the green O at position 3 must not be stolen by
        // the O at position 1 of ROBOT
        assert_eq!(
            score("floor", "robot"),
            Feedback([Yellow, Yellow, Grey, Green, Grey])
        );
        // SPEED vs ERASE: both E's yellow, S yellow
        assert_eq!(
            score("erase", "speed"),
            Feedback([Yellow, Grey, Yellow, Yellow, Grey])
        );
    }

    #[test]
    fn score_slate_against_crane() {
        assert_eq!(score("crane", "slate").to_string(), "--G-G");
        assert_eq!(score("crane", "trace").to_string(), "-GGYG");
    }

    #[test]
    fn parse_valid() {
        let cases = [
            ("-G---", [Grey, Green, Grey, Grey, Grey]),
            ("GGGGG", [Green; 5]),
            ("-----", [Grey; 5]),
            ("GYGYG", [Green, Yellow, Green, Yellow, Green]),
            ("gy-gy", [Green, Yellow, Grey, Green, Yellow]),
            ("XyGx-", [Grey, Yellow, Green, Grey, Grey]),
        ];

        for (input, tiles) in cases {
            assert_eq!(Feedback::parse(input).unwrap(), Feedback(tiles), "{input}");
        }
    }

    #[test]
    fn parse_invalid() {
        for input in ["--", "-------", "-G-!-", "", "GYGGYX", "GBGGY", "🟩🟨⬜🟩🟨"] {
            assert!(
                matches!(Feedback::parse(input), Err(Error::InvalidFeedback(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn display_uses_canonical_symbols() {
        let feedback = Feedback::parse("xYg-X").unwrap();
        assert_eq!(feedback.to_string(), "-YG--");
    }

    #[test]
    fn to_emoji() {
        let feedback = Feedback::parse("GY-GY").unwrap();
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
    }

    fn any_feedback() -> impl Strategy<Value = Feedback> {
        let tile = prop_oneof![Just(Grey), Just(Yellow), Just(Green)];
        prop::array::uniform5(tile).prop_map(Feedback)
    }

    proptest! {
        #[test]
        fn greens_match_positional_equality(solution in "[a-z]{5}", guess in "[a-z]{5}") {
            let feedback = score(&solution, &guess);
            for (i, (a, b)) in solution.bytes().zip(guess.bytes()).enumerate() {
                prop_assert_eq!(feedback.tiles()[i] == Green, a == b);
            }
        }

        #[test]
        fn scoring_self_is_perfect(word in "[a-z]{5}") {
            prop_assert!(score(&word, &word).is_perfect());
        }

        #[test]
        fn scoring_is_deterministic(solution in "[a-z]{5}", guess in "[a-z]{5}") {
            prop_assert_eq!(score(&solution, &guess), score(&solution, &guess));
        }

        #[test]
        fn feedback_text_round_trip(feedback in any_feedback()) {
            prop_assert_eq!(Feedback::parse(&feedback.to_string()).unwrap(), feedback);
        }

        #[test]
        fn parse_rejects_foreign_characters(text in "[GgYy\\-Xx]{2}[a-fh-wzA-FH-WZ0-9!?][GgYy\\-Xx]{2}") {
            prop_assert!(Feedback::parse(&text).is_err());
        }
    }
}
