//! Word list parsing and loading
//!
//! Lists are plain text, one lowercase 5-letter word per line. Blank lines
//! and surrounding whitespace are ignored, repeated words are kept once.

use super::WordListError;
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Parse a newline-separated word list
///
/// Preserves first-occurrence order, which is also the tie-break order
/// when the list is used as a guess pool.
///
/// # Errors
/// `InvalidEntry` naming the first line that is not a valid word.
///
/// # Examples
/// ```
/// use wordle_recommender::wordlists::loader::parse_words;
///
/// let words = parse_words("answers", "crane\n\n Slate \ncrane\n").unwrap();
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["crane", "slate"]);
/// ```
pub fn parse_words(name: &str, content: &str) -> Result<Vec<Word>, WordListError> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let word = Word::new(trimmed).map_err(|source| WordListError::InvalidEntry {
            name: name.to_string(),
            line: index + 1,
            word: trimmed.to_string(),
            source,
        })?;

        if seen.insert(word.clone()) {
            words.push(word);
        }
    }

    Ok(words)
}

/// Load words from a file
///
/// # Errors
/// `Missing` if the file does not exist, `Io` if it cannot be read,
/// `InvalidEntry` for a malformed line.
///
/// # Examples
/// ```no_run
/// use wordle_recommender::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/past_answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => WordListError::Missing {
            path: path.to_path_buf(),
        },
        _ => WordListError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    parse_words(&path.display().to_string(), &content)
}
