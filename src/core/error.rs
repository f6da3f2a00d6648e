//! Boundary validation errors

use thiserror::Error;

/// Rejected input for a word or a feedback sequence
///
/// Raised only where text enters the crate (CLI, TUI, word list files).
/// The feedback, filtering and scoring functions take already-validated
/// types and are total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("expected exactly 5 letters, got {0}")]
    InvalidWordLength(usize),

    #[error("'{0}' is not a letter a-z")]
    InvalidCharacter(char),

    #[error("'{0}' is not a feedback symbol (use G/Y/- or 🟩🟨⬛)")]
    InvalidFeedbackSymbol(char),
}
