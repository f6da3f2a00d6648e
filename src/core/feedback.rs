//! Per-letter feedback for a guess
//!
//! A `Feedback` is the five-tile answer a Wordle-style game gives for a guess:
//! - `Hit`: letter correct and in the correct position (green)
//! - `Present`: letter in the target at another position (yellow)
//! - `Miss`: letter not in the target at this multiplicity (gray)

use super::{ValidationError, WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tile {
    Miss,
    Present,
    Hit,
}

impl Tile {
    /// Next tile in the click cycle: Miss → Present → Hit → Miss
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Miss => Self::Present,
            Self::Present => Self::Hit,
            Self::Hit => Self::Miss,
        }
    }

    /// Parse one feedback symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/'2'/🟩 for hit
    /// - 'Y'/'y'/'1'/🟨 for present
    /// - '-'/'_'/'.'/'B'/'b'/'X'/'x'/'0'/⬛/⬜ for miss
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '2' | '🟩' => Some(Self::Hit),
            'Y' | 'y' | '1' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | 'B' | 'b' | 'X' | 'x' | '0' | '⬛' | '⬜' => Some(Self::Miss),
            _ => None,
        }
    }

    /// Single ASCII letter used in text output
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Hit => 'G',
            Self::Present => 'Y',
            Self::Miss => '-',
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Hit => '🟩',
            Self::Present => '🟨',
            Self::Miss => '⬛',
        }
    }
}

/// Five-tile feedback sequence for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Tile; WORD_LENGTH]);

impl Feedback {
    /// All hits (the guess was the target)
    pub const ALL_HIT: Self = Self([Tile::Hit; WORD_LENGTH]);

    /// All misses (also the blank state of an unedited row)
    pub const ALL_MISS: Self = Self([Tile::Miss; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(tiles: [Tile; WORD_LENGTH]) -> Self {
        Self(tiles)
    }

    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LENGTH] {
        &self.0
    }

    /// Compute the feedback a game would give when `guess` is played against `target`
    ///
    /// Two passes so repeated letters are handled like the real game:
    /// 1. Exact matches become `Hit` and consume that target position.
    /// 2. Every remaining guess letter takes the leftmost unconsumed target
    ///    position holding the same letter (`Present`), or is a `Miss`.
    ///
    /// A letter is therefore marked `Hit`/`Present` at most as many times as it
    /// occurs in the target, and hits are allocated before presents.
    ///
    /// # Examples
    /// ```
    /// use wordle_recommender::core::{Feedback, Tile::*, Word};
    ///
    /// let guess = Word::new("sheep").unwrap();
    /// let target = Word::new("epees").unwrap();
    ///
    /// assert_eq!(
    ///     Feedback::compute(&guess, &target),
    ///     Feedback::new([Present, Miss, Hit, Hit, Present])
    /// );
    /// ```
    #[must_use]
    pub fn compute(guess: &Word, target: &Word) -> Self {
        let guess = guess.chars();
        let target = target.chars();
        let mut tiles = [Tile::Miss; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        // Index needed to read guess[i]/target[i] and write tiles[i]/consumed[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == target[i] {
                tiles[i] = Tile::Hit;
                consumed[i] = true;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if tiles[i] == Tile::Hit {
                continue;
            }
            if let Some(j) = (0..WORD_LENGTH).find(|&j| !consumed[j] && target[j] == guess[i]) {
                tiles[i] = Tile::Present;
                consumed[j] = true;
            }
        }

        Self(tiles)
    }

    /// Check if every tile is a hit
    #[inline]
    #[must_use]
    pub fn is_all_hit(self) -> bool {
        self == Self::ALL_HIT
    }

    /// Count the tiles of one kind
    #[must_use]
    pub fn count(self, tile: Tile) -> usize {
        self.0.iter().filter(|&&t| t == tile).count()
    }

    /// Return a copy with the tile at `position` advanced one step in the click cycle
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub const fn cycle_at(self, position: usize) -> Self {
        let mut tiles = self.0;
        tiles[position] = tiles[position].cycle();
        Self(tiles)
    }

    /// Render as emoji tiles, e.g. "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|t| t.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.0 {
            write!(f, "{}", tile.to_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = ValidationError;

    /// Parse a pattern like "GY-GY" or "🟩🟨⬛🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_recommender::core::Feedback;
    ///
    /// let p1: Feedback = "GY-GY".parse().unwrap();
    /// let p2: Feedback = "🟩🟨⬜🟩🟨".parse().unwrap();
    /// assert_eq!(p1, p2);
    /// assert!("GYGGYX".parse::<Feedback>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(ValidationError::InvalidWordLength(symbols.len()));
        }

        let mut tiles = [Tile::Miss; WORD_LENGTH];
        for (tile, &ch) in tiles.iter_mut().zip(&symbols) {
            *tile = Tile::from_char(ch).ok_or(ValidationError::InvalidFeedbackSymbol(ch))?;
        }

        Ok(Self(tiles))
    }
}
