//! Formatting utilities for terminal output

use crate::core::{Feedback, TileColor, Word};
use colored::Colorize;

/// Render a guess with each letter on its tile colour
#[must_use]
pub fn colored_guess(guess: &Word, feedback: Feedback) -> String {
    guess
        .as_str()
        .chars()
        .zip(feedback.tiles())
        .map(|(letter, tile)| {
            let letter = format!(" {} ", letter.to_ascii_uppercase()).black().bold();
            match tile {
                TileColor::Green => letter.on_green().to_string(),
                TileColor::Yellow => letter.on_yellow().to_string(),
                TileColor::Grey => letter.on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
