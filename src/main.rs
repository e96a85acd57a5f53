//! Wordle Engine - CLI
//!
//! Score guesses, evaluate reported games, play interactively, or sweep an
//! opening sequence over every allowed solution.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wordle_engine::{
    commands::{EvaluateRequest, PlayOutcome, TurnInput, evaluate, run_play, run_sweep, score_guess},
    core::Solution,
    game::{FilterMode, Game},
    output::{print_evaluation, print_score_result, print_sweep_statistics},
    wordlists::{WordLists, loader::load_dir},
};

/// Log filter used when `RUST_LOG` is unset, empty or unparsable
const DEFAULT_LOG_FILTER: &str = "wordle_engine=info";

#[derive(Parser)]
#[command(
    name = "wordle_engine",
    about = "Wordle game engine: scoring, shortlist filtering and turn sequencing",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding allowed_solutions.txt and allowed_guesses.txt
    #[arg(short, long, global = true, env = "WORDLE_DATA", default_value = "data")]
    data: PathBuf,

    /// Worker threads for shortlist filtering
    #[arg(short = 'j', long, global = true, default_value = "16")]
    workers: usize,

    /// Filter the shortlist on the calling thread only
    #[arg(long, global = true)]
    sequential: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a guess against a solution (no wordlist needed)
    Score {
        /// The hidden solution
        solution: String,
        /// The guess to score
        guess: String,
    },

    /// Validate and evaluate a reported game
    Evaluate {
        /// The hidden solution
        solution: String,

        /// Past turn as guess:feedback, e.g. slate:--G-G (repeatable)
        #[arg(short, long = "turn")]
        turns: Vec<TurnInput>,

        /// Proposed next guess
        #[arg(short, long)]
        guess: Option<String>,
    },

    /// Play a game interactively
    Play {
        /// Play against this solution instead of a random one
        #[arg(short, long)]
        solution: Option<String>,

        /// List the remaining candidates once there are few left
        #[arg(long)]
        show: bool,
    },

    /// Play an opening sequence against every allowed solution
    Sweep {
        /// Opening guesses, in order
        #[arg(required = true)]
        openers: Vec<String>,

        /// Limit number of solutions swept
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(log_filter(directives.as_deref()))
        .init();

    let cli = Cli::parse();

    rayon::ThreadPoolBuilder::new()
        .num_threads(cli.workers)
        .build_global()
        .context("failed to start worker pool")?;

    let mode = if cli.sequential {
        FilterMode::Sequential
    } else {
        FilterMode::Parallel
    };

    match cli.command {
        Commands::Score { solution, guess } => {
            let result = score_guess(&solution, &guess)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Evaluate {
            solution,
            turns,
            guess,
        } => {
            let lists = load_wordlists(&cli.data)?;
            let request = EvaluateRequest {
                solution,
                turns,
                proposed_guess: guess,
            };
            let eval = evaluate(&lists, &request, mode)?;
            print_evaluation(&eval);
            Ok(())
        }
        Commands::Play { solution, show } => {
            let lists = load_wordlists(&cli.data)?;
            run_play_command(&lists, solution.as_deref(), show, mode)
        }
        Commands::Sweep { openers, limit } => {
            let lists = load_wordlists(&cli.data)?;
            let openers: Vec<&str> = openers.iter().map(String::as_str).collect();
            let stats = run_sweep(&lists, &openers, limit, true)?;
            print_sweep_statistics(&stats);
            Ok(())
        }
    }
}

fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn load_wordlists(dir: &Path) -> Result<WordLists> {
    load_dir(dir).with_context(|| format!("failed to load wordlists from {}", dir.display()))
}

fn run_play_command(
    lists: &WordLists,
    solution: Option<&str>,
    show: bool,
    mode: FilterMode,
) -> Result<()> {
    let game = match solution {
        Some(text) => {
            let solution = Solution::new(text)?;
            solution.validate(lists)?;
            Game::new(solution, lists)
        }
        None => Game::random(lists, &mut rand::rng())?,
    };
    let mut game = game.with_filter_mode(mode);

    let stdin = io::stdin();
    let outcome = run_play(&mut game, lists, show, &mut stdin.lock(), &mut io::stdout())?;

    tracing::debug!(?outcome, turns = game.turn_count(), "game finished");
    if outcome == PlayOutcome::Quit {
        println!("\n👋 Thanks for playing!\n");
    }
    Ok(())
}
