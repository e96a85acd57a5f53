//! Sweep command
//!
//! Plays a fixed opening sequence against every allowed solution and reports
//! how far each opener narrows the shortlist.

use crate::core::Word;
use crate::error::Result;
use crate::game::{FilterMode, Game};
use crate::wordlists::WordLists;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Shortlist sizes after one opener, across all swept solutions
#[derive(Debug, Clone)]
pub struct StepStatistics {
    pub guess: Word,
    pub average_remaining: f64,
    /// Largest remaining shortlist and the first solution that produced it,
    /// `None` when no solutions were swept
    pub worst: Option<(Word, usize)>,
    /// Solutions left with a single candidate (or already guessed)
    pub pinned: usize,
    /// Remaining shortlist size -> number of solutions
    pub distribution: BTreeMap<usize, usize>,
}

/// Statistics from sweeping all solutions
#[derive(Debug, Clone)]
pub struct SweepStatistics {
    pub total_solutions: usize,
    pub steps: Vec<StepStatistics>,
    pub duration: Duration,
}

/// Sweep `openers` over the allowed solutions (or the first `limit`)
///
/// Solutions are swept in parallel; each game filters sequentially on its
/// worker.
///
/// # Errors
///
/// Returns an error if any opener is malformed or not an allowed guess.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_sweep(
    lists: &WordLists,
    openers: &[&str],
    limit: Option<usize>,
    show_progress: bool,
) -> Result<SweepStatistics> {
    let openers = openers
        .iter()
        .map(|text| -> Result<Word> {
            let word = Word::new(text)?;
            word.validate_in(lists.guesses())?;
            Ok(word)
        })
        .collect::<Result<Vec<_>>>()?;

    let solutions = lists.solutions().words();
    let targets = &solutions[..limit.unwrap_or(solutions.len()).min(solutions.len())];

    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    // sizes[i][step] = shortlist size for targets[i] after openers[..=step]
    let sizes = targets
        .par_iter()
        .map(|&target| -> Result<Vec<usize>> {
            let mut game = Game::new(target.into(), lists).with_filter_mode(FilterMode::Sequential);
            let mut sizes = Vec::with_capacity(openers.len());
            for &opener in &openers {
                game.play_guess(opener)?;
                sizes.push(game.shortlist_size());
            }
            pb.inc(1);
            Ok(sizes)
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_with_message("Complete!");

    let steps = openers
        .iter()
        .enumerate()
        .map(|(step, &guess)| summarize_step(guess, targets, &sizes, step))
        .collect();

    let statistics = SweepStatistics {
        total_solutions: targets.len(),
        steps,
        duration: start.elapsed(),
    };

    tracing::info!(
        solutions = statistics.total_solutions,
        openers = statistics.steps.len(),
        elapsed_ms = statistics.duration.as_millis() as u64,
        "sweep finished"
    );

    Ok(statistics)
}

fn summarize_step(guess: Word, targets: &[Word], sizes: &[Vec<usize>], step: usize) -> StepStatistics {
    let mut distribution = BTreeMap::new();
    let mut total = 0;
    let mut worst: Option<(Word, usize)> = None;

    for (target, sizes) in targets.iter().zip(sizes) {
        let remaining = sizes[step];
        total += remaining;
        *distribution.entry(remaining).or_insert(0) += 1;
        if worst.is_none_or(|(_, most)| remaining > most) {
            worst = Some((*target, remaining));
        }
    }

    let average_remaining = if targets.is_empty() {
        0.0
    } else {
        total as f64 / targets.len() as f64
    };

    StepStatistics {
        guess,
        average_remaining,
        worst,
        pinned: distribution.get(&1).copied().unwrap_or(0),
        distribution,
    }
}
