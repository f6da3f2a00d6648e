//! Word lists for guess recommendation
//!
//! Two immutable lists loaded once and shared by reference with every session:
//! the words that may be guessed and the words that may be the answer.

pub mod loader;

use crate::core::{ValidationError, Word};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the allowed-guesses list
pub const DEFAULT_GUESSES_PATH: &str = "data/possible_guesses.txt";

/// Default location of the possible-answers list
pub const DEFAULT_ANSWERS_PATH: &str = "data/past_answers.txt";

#[derive(Debug, Error)]
pub enum WordListError {
    #[error(
        "word list {} not found; pass --guesses/--answers or set WORDLE_GUESSES/WORDLE_ANSWERS",
        path.display()
    )]
    Missing { path: PathBuf },

    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{name} line {line}: invalid word '{word}'")]
    InvalidEntry {
        name: String,
        line: usize,
        word: String,
        #[source]
        source: ValidationError,
    },

    #[error("{name} contains no words")]
    Empty { name: String },
}

/// Allowed guesses and possible answers
#[derive(Debug, Clone)]
pub struct WordLists {
    allowed_guesses: Vec<Word>,
    possible_answers: Vec<Word>,
}

impl WordLists {
    /// Build from already-parsed lists
    ///
    /// # Errors
    /// `Empty` if either list has no words.
    pub fn new(
        allowed_guesses: Vec<Word>,
        possible_answers: Vec<Word>,
    ) -> Result<Self, WordListError> {
        if allowed_guesses.is_empty() {
            return Err(WordListError::Empty {
                name: "allowed guesses".to_string(),
            });
        }
        if possible_answers.is_empty() {
            return Err(WordListError::Empty {
                name: "possible answers".to_string(),
            });
        }

        Ok(Self {
            allowed_guesses,
            possible_answers,
        })
    }

    /// Use the answers as the guess pool as well
    ///
    /// # Errors
    /// `Empty` if the list has no words.
    pub fn answers_only(possible_answers: Vec<Word>) -> Result<Self, WordListError> {
        Self::new(possible_answers.clone(), possible_answers)
    }

    /// Parse both lists from newline-separated text
    ///
    /// # Errors
    /// `InvalidEntry` on the first malformed line, `Empty` for an empty list.
    ///
    /// # Examples
    /// ```
    /// use wordle_recommender::wordlists::WordLists;
    ///
    /// let lists = WordLists::from_strs("crane\nslate\nirate\n", "slate\nirate\n").unwrap();
    /// assert_eq!(lists.allowed_guesses().len(), 3);
    /// assert_eq!(lists.possible_answers().len(), 2);
    /// ```
    pub fn from_strs(guesses: &str, answers: &str) -> Result<Self, WordListError> {
        Self::new(
            loader::parse_words("allowed guesses", guesses)?,
            loader::parse_words("possible answers", answers)?,
        )
    }

    /// Load both lists from files
    ///
    /// # Errors
    /// `Io` if a file cannot be read, otherwise as [`WordLists::from_strs`].
    pub fn from_files(
        guesses_path: impl AsRef<Path>,
        answers_path: impl AsRef<Path>,
    ) -> Result<Self, WordListError> {
        Self::new(
            loader::load_from_file(guesses_path)?,
            loader::load_from_file(answers_path)?,
        )
    }

    #[must_use]
    pub fn allowed_guesses(&self) -> &[Word] {
        &self.allowed_guesses
    }

    #[must_use]
    pub fn possible_answers(&self) -> &[Word] {
        &self.possible_answers
    }

    /// Check whether a word may be guessed
    #[must_use]
    pub fn is_allowed(&self, word: &Word) -> bool {
        self.allowed_guesses.contains(word)
    }

    /// Check whether a word may be the answer
    #[must_use]
    pub fn is_answer(&self, word: &Word) -> bool {
        self.possible_answers.contains(word)
    }
}
