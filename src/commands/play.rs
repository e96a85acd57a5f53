//! Interactive play mode
//!
//! Text-based game loop: the player types guesses, the engine answers with
//! feedback and the number of solutions still possible.

use crate::core::Word;
use crate::error::{Error, Result};
use crate::game::{Game, GameStatus};
use crate::output::formatters::colored_guess;
use crate::wordlists::WordLists;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Shortlists at or below this size are listed when `show_shortlist` is on
const SHOW_SHORTLIST_MAX: usize = 10;

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Won { turns: usize },
    Lost,
    Quit,
}

/// Run the interactive game loop until the game ends or the player quits
///
/// Malformed guesses and guesses outside the allowed list are reported and
/// do not use up a turn.
///
/// # Errors
///
/// Returns an error on I/O failure reading input or writing output, or if the
/// game has no known solution.
pub fn run_play<R: BufRead, W: Write>(
    game: &mut Game,
    lists: &WordLists,
    show_shortlist: bool,
    input: &mut R,
    output: &mut W,
) -> Result<PlayOutcome> {
    let solution = *game.solution().ok_or(Error::UnknownSolution)?;

    writeln!(output, "\n{}", "═".repeat(60).cyan())?;
    writeln!(output, " {} ", "WORDLE".bright_cyan().bold())?;
    writeln!(output, "{}", "═".repeat(60).cyan())?;
    writeln!(
        output,
        "Guess the 5-letter word in {} tries. Type 'quit' to give up.\n",
        game.remaining_turns()
    )?;

    while game.status() == GameStatus::InProgress {
        write!(
            output,
            "Guess {}/{} ({} possible): ",
            game.turn_count() + 1,
            game.turn_count() + game.remaining_turns(),
            game.shortlist_size()
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(PlayOutcome::Quit);
        }
        let text = line.trim();

        if matches!(text, "quit" | "q" | "exit") {
            writeln!(output, "The word was {}.", solution.to_string().bold())?;
            return Ok(PlayOutcome::Quit);
        }

        let guess = match Word::new(text).and_then(|w| w.validate_in(lists.guesses()).map(|()| w)) {
            Ok(guess) => guess,
            Err(err) => {
                writeln!(output, "{} {err}", "✗".red())?;
                continue;
            }
        };

        let feedback = game.play_guess(guess)?;
        writeln!(
            output,
            "  {}  {}  {} remaining",
            colored_guess(&guess, feedback),
            feedback.to_emoji(),
            game.shortlist_size()
        )?;

        if show_shortlist && !game.won() && game.shortlist_size() <= SHOW_SHORTLIST_MAX {
            let words: Vec<&str> = game.shortlist().iter().map(Word::as_str).collect();
            writeln!(output, "  Possible: {}", words.join(", "))?;
        }
    }

    if game.won() {
        writeln!(
            output,
            "\n{}",
            format!("✅ Solved in {} guesses!", game.turn_count())
                .green()
                .bold()
        )?;
        Ok(PlayOutcome::Won {
            turns: game.turn_count(),
        })
    } else {
        writeln!(
            output,
            "\n{} The word was {}.",
            "❌ Out of guesses.".red().bold(),
            solution.to_string().bold()
        )?;
        Ok(PlayOutcome::Lost)
    }
}
