//! Command implementations

pub mod evaluate;
pub mod play;
pub mod score;
pub mod sweep;

pub use evaluate::{EvaluateRequest, Evaluation, TurnInput, evaluate};
pub use play::{PlayOutcome, run_play};
pub use score::{ScoreResult, score_guess};
pub use sweep::{StepStatistics, SweepStatistics, run_sweep};
