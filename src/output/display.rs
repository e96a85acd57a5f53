//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar};
use crate::commands::{Evaluation, ScoreResult, SweepStatistics};
use crate::game::GameStatus;
use colored::Colorize;

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "{}  {}  {}",
        colored_guess(&result.guess, result.feedback),
        result.feedback.to_emoji(),
        result.feedback.to_string().bold()
    );
}

/// Print the result of evaluating a game
pub fn print_evaluation(eval: &Evaluation) {
    let status = match eval.status {
        GameStatus::InProgress => eval.status.as_str().yellow(),
        GameStatus::Won => eval.status.as_str().green(),
        GameStatus::Lost => eval.status.as_str().red(),
    };

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GAME EVALUATION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("   Status:        {}", status.bold());
    println!("   Turn valid:    {}", eval.turn_valid);
    if let Some(feedback) = eval.feedback {
        println!("   Feedback:      {} {}", feedback, feedback.to_emoji());
    }
    println!(
        "   Shortlist:     {} → {}",
        eval.shortlist_before,
        format!("{}", eval.shortlist_after).bright_yellow().bold()
    );
    println!(
        "   Reduction:     [{}] {:.1}%",
        create_progress_bar(eval.reduction_ratio, 1.0, 30).green(),
        eval.reduction_ratio * 100.0
    );
}

/// Print sweep statistics
pub fn print_sweep_statistics(stats: &SweepStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Sweep Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overview".bright_cyan().bold());
    println!("  Solutions swept:     {}", stats.total_solutions);
    println!(
        "  Total time:          {:.2}s",
        stats.duration.as_secs_f64()
    );

    for (i, step) in stats.steps.iter().enumerate() {
        println!(
            "\n🎯 {} {}",
            format!("Turn {}:", i + 1).bright_cyan().bold(),
            step.guess.as_str().to_uppercase().bright_white().bold()
        );
        println!(
            "  Average remaining:   {}",
            format!("{:.2}", step.average_remaining)
                .bright_yellow()
                .bold()
        );
        if let Some((solution, size)) = step.worst {
            println!(
                "  Worst case:          {} ({})",
                size,
                solution.as_str().to_uppercase().yellow()
            );
        }
        if stats.total_solutions > 0 {
            println!(
                "  Pinned to one:       {} ({:.1}%)",
                step.pinned,
                step.pinned as f64 / stats.total_solutions as f64 * 100.0
            );
        }

        let max_count = step.distribution.values().copied().max().unwrap_or(1);
        for (remaining, count) in step.distribution.iter().take(8) {
            let bar = create_progress_bar(*count as f64, max_count as f64, 30);
            println!("  {remaining:>4} left: {} {count:5}", bar.green());
        }
        if step.distribution.len() > 8 {
            println!(
                "  {}",
                format!("… {} more sizes", step.distribution.len() - 8).bright_black()
            );
        }
    }
}
