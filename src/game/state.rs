//! Turn sequencing for a single game

use super::shortlist::{FilterMode, recompute_shortlist};
use crate::core::{Feedback, Solution, Word};
use crate::error::{Error, Result, WordlistKind};
use crate::wordlists::WordLists;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Turns allowed before a game is lost
pub const MAX_GUESSES: usize = 6;

/// Outcome of a game so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Lowercase name, as reported by the evaluate command
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "ongoing",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }
}

/// One game: the hidden solution, the turn history and the shortlist
///
/// Mutation takes `&mut self`; share a game across threads only behind the
/// caller's own lock.
///
/// The six-turn limit is not enforced: turns recorded after the game is
/// over are accepted (and logged), leaving that decision to the caller.
#[derive(Debug, Clone)]
pub struct Game {
    solution: Option<Solution>,
    guesses: Vec<Word>,
    feedbacks: Vec<Feedback>,
    shortlist: Vec<Word>,
    filter_mode: FilterMode,
}

impl Game {
    /// Start a game against a known solution
    ///
    /// The shortlist starts as a copy of every allowed solution.
    #[must_use]
    pub fn new(solution: Solution, lists: &WordLists) -> Self {
        Self::with_shortlist(Some(solution), lists.solutions().words().to_vec())
    }

    /// Start a game whose solution is unknown, for replaying reported turns
    #[must_use]
    pub fn for_replay(lists: &WordLists) -> Self {
        Self::with_shortlist(None, lists.solutions().words().to_vec())
    }

    /// Start a game against a uniformly random allowed solution
    ///
    /// # Errors
    /// [`Error::EmptyWordlist`] if there are no allowed solutions.
    pub fn random<R: Rng + ?Sized>(lists: &WordLists, rng: &mut R) -> Result<Self> {
        let word = lists
            .solutions()
            .words()
            .choose(rng)
            .ok_or(Error::EmptyWordlist(WordlistKind::Solutions))?;

        Ok(Self::new(Solution::from(*word), lists))
    }

    /// Start a game from an explicit, possibly pre-filtered shortlist
    #[must_use]
    pub const fn with_shortlist(solution: Option<Solution>, shortlist: Vec<Word>) -> Self {
        Self {
            solution,
            guesses: Vec::new(),
            feedbacks: Vec::new(),
            shortlist,
            filter_mode: FilterMode::Parallel,
        }
    }

    /// Choose how shortlist passes run
    #[must_use]
    pub const fn with_filter_mode(mut self, mode: FilterMode) -> Self {
        self.filter_mode = mode;
        self
    }

    /// Score `guess` against the solution, record the turn and refilter
    ///
    /// Returns the feedback for the guess.
    ///
    /// # Errors
    /// [`Error::UnknownSolution`] for games built with [`Game::for_replay`].
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Solution, Word};
    /// use wordle_engine::game::Game;
    /// use wordle_engine::wordlists::WordLists;
    ///
    /// let words: Vec<Word> = ["crane", "frame", "flame"]
    ///     .iter()
    ///     .map(|s| Word::new(s).unwrap())
    ///     .collect();
    /// let lists = WordLists::new(words.clone(), words);
    ///
    /// let mut game = Game::new(Solution::new("crane").unwrap(), &lists);
    /// let feedback = game.play_guess(Word::new("frame").unwrap()).unwrap();
    ///
    /// assert_eq!(feedback.to_string(), "-GG-G");
    /// assert_eq!(game.shortlist_size(), 1);
    /// ```
    pub fn play_guess(&mut self, guess: Word) -> Result<Feedback> {
        let solution = self.solution.ok_or(Error::UnknownSolution)?;
        let feedback = solution.check_guess(&guess);
        self.record_turn(guess, feedback);
        Ok(feedback)
    }

    /// Record a turn with caller-supplied feedback and refilter
    ///
    /// The feedback is taken as given, even when the solution is known.
    pub fn replay_turn(&mut self, guess: Word, feedback: Feedback) {
        self.record_turn(guess, feedback);
    }

    fn record_turn(&mut self, guess: Word, feedback: Feedback) {
        if self.is_over() {
            tracing::warn!(
                %guess,
                turns = self.turn_count(),
                status = self.status().as_str(),
                "recording turn on a finished game"
            );
        }

        self.guesses.push(guess);
        self.feedbacks.push(feedback);

        let before = self.shortlist.len();
        self.shortlist = recompute_shortlist(
            &self.shortlist,
            &self.guesses,
            &self.feedbacks,
            self.filter_mode,
        );

        tracing::debug!(
            turn = self.turn_count(),
            %guess,
            %feedback,
            before,
            after = self.shortlist.len(),
            "shortlist recomputed"
        );
    }

    /// Most recent feedback, if any turn was played
    #[must_use]
    pub fn last_feedback(&self) -> Option<Feedback> {
        self.feedbacks.last().copied()
    }

    /// True iff the last feedback is all green
    #[must_use]
    pub fn won(&self) -> bool {
        self.last_feedback().is_some_and(Feedback::is_perfect)
    }

    /// True once the turn limit is reached without a win
    #[must_use]
    pub fn lost(&self) -> bool {
        !self.won() && self.turn_count() >= MAX_GUESSES
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.won() {
            GameStatus::Won
        } else if self.lost() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status() != GameStatus::InProgress
    }

    /// Number of candidate solutions still consistent with the history
    #[must_use]
    pub fn shortlist_size(&self) -> usize {
        self.shortlist.len()
    }

    #[must_use]
    pub fn shortlist(&self) -> &[Word] {
        &self.shortlist
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn feedbacks(&self) -> &[Feedback] {
        &self.feedbacks
    }

    /// Recorded (guess, feedback) pairs in play order
    pub fn turns(&self) -> impl Iterator<Item = (Word, Feedback)> + '_ {
        self.guesses.iter().copied().zip(self.feedbacks.iter().copied())
    }

    #[must_use]
    pub fn turn_count(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn remaining_turns(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.turn_count())
    }

    #[must_use]
    pub const fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    #[must_use]
    pub const fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::shortlist::is_consistent;
    use crate::test_support::{FIXTURE_SOLUTIONS, fixture_lists, word, words};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn crane_game() -> Game {
        Game::new(Solution::new("crane").unwrap(), &fixture_lists())
    }

    #[test]
    fn new_game_starts_in_progress() {
        let game = crane_game();

        assert_eq!(game.solution(), Some(&Solution::new("crane").unwrap()));
        assert_eq!(game.turn_count(), 0);
        assert!(game.guesses().is_empty());
        assert!(game.feedbacks().is_empty());
        assert_eq!(game.shortlist_size(), FIXTURE_SOLUTIONS.len());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.remaining_turns(), MAX_GUESSES);
        assert_eq!(game.filter_mode(), FilterMode::Parallel);
    }

    #[test]
    fn play_guess_records_turn() {
        let mut game = crane_game();
        let feedback = game.play_guess(word("slate")).unwrap();

        assert_eq!(feedback.to_string(), "--G-G");
        assert_eq!(game.guesses(), [word("slate")]);
        assert_eq!(game.feedbacks(), [feedback]);
        assert_eq!(game.last_feedback(), Some(feedback));
    }

    #[test]
    fn play_guess_needs_solution() {
        let mut game = Game::for_replay(&fixture_lists());

        assert!(matches!(
            game.play_guess(word("slate")),
            Err(Error::UnknownSolution)
        ));
        assert_eq!(game.turn_count(), 0);
    }

    #[test]
    fn last_feedback_tracks_latest_turn() {
        let mut game = crane_game();
        assert_eq!(game.last_feedback(), None);

        game.play_guess(word("slate")).unwrap();
        game.play_guess(word("crane")).unwrap();
        assert_eq!(game.last_feedback(), Some(Feedback::PERFECT));
    }

    #[test]
    fn won_only_after_correct_guess() {
        let mut game = crane_game();
        assert!(!game.won());

        game.play_guess(word("slate")).unwrap();
        assert!(!game.won());
        assert_eq!(game.last_feedback().unwrap().to_string(), "--G-G");

        game.play_guess(word("trace")).unwrap();
        assert!(!game.won());
        let trace = game.last_feedback().unwrap();
        assert_eq!(trace, Feedback::score(&word("crane"), &word("trace")));

        game.play_guess(word("crane")).unwrap();
        assert!(game.won());
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.turn_count(), 3);
    }

    #[test]
    fn correct_first_guess_wins() {
        let mut game = crane_game();
        game.play_guess(word("crane")).unwrap();

        assert!(game.won());
        assert_eq!(game.shortlist(), [word("crane")]);
    }

    #[test]
    fn six_misses_lose() {
        let mut game = crane_game();
        for guess in ["slate", "trace", "grace", "brace", "frame", "plane"] {
            game.play_guess(word(guess)).unwrap();
        }

        assert!(game.lost());
        assert!(!game.won());
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.remaining_turns(), 0);
    }

    #[test]
    fn win_on_sixth_turn_is_not_a_loss() {
        let mut game = crane_game();
        for guess in ["slate", "trace", "grace", "brace", "frame", "crane"] {
            game.play_guess(word(guess)).unwrap();
        }

        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn finished_games_still_accept_turns() {
        let mut game = crane_game();
        game.play_guess(word("crane")).unwrap();
        game.play_guess(word("slate")).unwrap();

        assert_eq!(game.turn_count(), 2);
        assert!(!game.won());
    }

    #[test]
    fn shortlist_shrinks_monotonically() {
        let mut game = crane_game();
        let mut previous = game.shortlist_size();

        for guess in ["adieu", "slate", "trace", "crane"] {
            game.play_guess(word(guess)).unwrap();
            assert!(game.shortlist_size() <= previous, "grew after {guess}");
            previous = game.shortlist_size();
        }
        assert_eq!(game.shortlist(), [word("crane")]);
    }

    #[test]
    fn unhelpful_guess_still_reduces_large_list() {
        let mut game = crane_game();
        let before = game.shortlist_size();
        game.play_guess(word("aahed")).unwrap();

        assert!(game.shortlist_size() < before);
    }

    #[test]
    fn shortlist_reproduces_history() {
        let lists = fixture_lists();
        let mut game = crane_game();
        game.play_guess(word("slate")).unwrap();
        game.play_guess(word("trace")).unwrap();

        for candidate in lists.solutions().words() {
            assert_eq!(
                game.shortlist().contains(candidate),
                is_consistent(candidate, game.guesses(), game.feedbacks()),
                "{candidate}"
            );
        }
    }

    #[test]
    fn replay_turn_takes_feedback_as_given() {
        let mut game = crane_game();
        let feedback = Feedback::parse("--G-G").unwrap();
        game.replay_turn(word("slate"), feedback);

        assert_eq!(game.guesses(), [word("slate")]);
        assert_eq!(game.feedbacks(), [feedback]);
        assert!(game.shortlist_size() < FIXTURE_SOLUTIONS.len());
        assert!(game.shortlist().contains(&word("crane")));
    }

    #[test]
    fn replay_then_play_leaves_solution() {
        let mut game = crane_game();
        game.replay_turn(word("slate"), Feedback::parse("--G-G").unwrap());
        game.play_guess(word("crane")).unwrap();

        assert_eq!(game.shortlist_size(), 1);
        assert_eq!(game.shortlist(), [word("crane")]);
    }

    #[test]
    fn replay_is_not_cross_checked() {
        let mut game = crane_game();
        // Wrong for crane, accepted anyway
        game.replay_turn(word("crane"), Feedback::parse("-----").unwrap());

        assert_eq!(game.turn_count(), 1);
        assert!(!game.shortlist().contains(&word("crane")));
    }

    #[test]
    fn replay_without_solution() {
        let mut game = Game::for_replay(&fixture_lists());
        game.replay_turn(word("slate"), Feedback::parse("--G-G").unwrap());
        game.replay_turn(word("crane"), Feedback::PERFECT);

        assert_eq!(game.solution(), None);
        assert!(game.won());
        assert_eq!(
            game.turns().collect::<Vec<_>>(),
            [
                (word("slate"), Feedback::parse("--G-G").unwrap()),
                (word("crane"), Feedback::PERFECT)
            ]
        );
    }

    #[test]
    fn pre_filtered_shortlist_smoke() {
        let mut game = Game::with_shortlist(
            Some(Solution::new("spare").unwrap()),
            words(&["scare", "share", "snare", "spare", "stare"]),
        );
        game.replay_turn(word("scare"), Feedback::parse("G-GGG").unwrap());
        let feedback = game.play_guess(word("chant")).unwrap();

        assert_eq!(feedback.to_string(), "--G--");
        assert_eq!(game.shortlist(), [word("spare")]);
    }

    #[test]
    fn filter_modes_agree() {
        let lists = fixture_lists();
        let mut parallel = Game::new(Solution::new("grate").unwrap(), &lists);
        let mut sequential = parallel.clone().with_filter_mode(FilterMode::Sequential);

        for guess in ["slate", "crane"] {
            parallel.play_guess(word(guess)).unwrap();
            sequential.play_guess(word(guess)).unwrap();
            assert_eq!(parallel.shortlist(), sequential.shortlist());
        }
    }

    #[test]
    fn random_game_picks_allowed_solution() {
        let lists = fixture_lists();
        let mut rng = StdRng::seed_from_u64(7);
        let game = Game::random(&lists, &mut rng).unwrap();

        let solution = game.solution().unwrap();
        assert!(solution.validate(&lists).is_ok());
    }

    #[test]
    fn random_game_needs_solutions() {
        let lists = WordLists::new(Vec::new(), words(&["crane"]));
        let mut rng = StdRng::seed_from_u64(7);

        assert!(matches!(
            Game::random(&lists, &mut rng),
            Err(Error::EmptyWordlist(WordlistKind::Solutions))
        ));
    }

    mod turn_sequences {
        use super::*;
        use crate::test_support::FIXTURE_GUESSES;
        use proptest::prelude::{Strategy, prop, prop_assert, prop_assert_eq, proptest};

        /// A turn either scored against the solution or replayed with given feedback
        fn any_turn() -> impl Strategy<Value = (String, Option<String>)> {
            let guess = prop::sample::select([FIXTURE_SOLUTIONS, FIXTURE_GUESSES].concat());
            let replayed = prop::option::of("[GY-]{5}");
            (guess, replayed).prop_map(|(guess, feedback)| (guess.to_string(), feedback))
        }

        proptest! {
            #[test]
            fn shortlist_tracks_history_after_every_turn(
                solution in prop::sample::select(FIXTURE_SOLUTIONS),
                turns in prop::collection::vec(any_turn(), 1..=8),
                sequential in proptest::bool::ANY,
            ) {
                let lists = fixture_lists();
                let mode = if sequential { FilterMode::Sequential } else { FilterMode::Parallel };
                let mut game = Game::new(Solution::new(solution).unwrap(), &lists).with_filter_mode(mode);

                for (guess, feedback) in &turns {
                    let before = game.shortlist_size();
                    match feedback {
                        Some(text) => game.replay_turn(word(guess), Feedback::parse(text).unwrap()),
                        None => {
                            game.play_guess(word(guess)).unwrap();
                        }
                    }

                    prop_assert!(game.shortlist_size() <= before, "grew after {}", guess);
                    let from_scratch = recompute_shortlist(
                        lists.solutions().words(),
                        game.guesses(),
                        game.feedbacks(),
                        FilterMode::Sequential,
                    );
                    prop_assert_eq!(game.shortlist(), from_scratch.as_slice());
                }
            }
        }
    }
}
