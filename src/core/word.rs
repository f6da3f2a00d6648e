//! Five-letter word representation

use super::{ValidationError, WORD_LENGTH};
use std::fmt;

/// A 5-letter lowercase word
///
/// Keeps both the text (for display and lookups) and the raw bytes
/// (for feedback computation).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation, so `"CRANE"` and `"crane"`
    /// produce the same word.
    ///
    /// # Errors
    /// - `InvalidWordLength` if the input is not exactly 5 characters
    /// - `InvalidCharacter` on the first character outside a-z
    ///
    /// # Examples
    /// ```
    /// use wordle_recommender::core::{ValidationError, Word};
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert_eq!(Word::new("too long"), Err(ValidationError::InvalidWordLength(8)));
    /// assert_eq!(Word::new("sh0rt"), Err(ValidationError::InvalidCharacter('0')));
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = text.as_ref();

        // judge the input as typed; some letters grow when lowercased
        let len = raw.chars().count();
        if len != WORD_LENGTH {
            return Err(ValidationError::InvalidWordLength(len));
        }

        if let Some(bad) = raw.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidCharacter(bad));
        }

        let text = raw.to_ascii_lowercase();
        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
