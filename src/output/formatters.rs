//! Formatting utilities for terminal output

use crate::core::{Feedback, Tile, WORD_LENGTH, Word};
use colored::{ColoredString, Colorize};

/// Upper bound on the entropy of a single guess: log2(3^5) bits
#[must_use]
pub fn max_entropy() -> f64 {
    3_f64.powi(WORD_LENGTH as i32).log2()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy as a bar scaled to the single-guess maximum
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    create_progress_bar(entropy, max_entropy(), width)
}

/// One letter on a colored tile background
#[must_use]
pub fn colored_tile(letter: char, tile: Tile) -> ColoredString {
    let cell = format!(" {} ", letter.to_ascii_uppercase());
    match tile {
        Tile::Hit => cell.black().on_green().bold(),
        Tile::Present => cell.black().on_yellow().bold(),
        Tile::Miss => cell.white().on_bright_black(),
    }
}

/// A guess rendered as colored tiles
#[must_use]
pub fn colored_guess(word: &Word, feedback: Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.tiles())
        .map(|(letter, &tile)| colored_tile(letter, tile).to_string())
        .collect()
}
