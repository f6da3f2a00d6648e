//! Core domain types for Wordle-style feedback
//!
//! Pure value types with no I/O: words, per-letter tiles, feedback sequences,
//! and the validation errors raised when building them from user input.

mod error;
mod feedback;
mod word;

pub use error::ValidationError;
pub use feedback::{Feedback, Tile};
pub use word::Word;

/// Number of letters in every word and every feedback sequence
pub const WORD_LENGTH: usize = 5;

/// Maximum number of guesses in one game
pub const MAX_TURNS: usize = 6;
