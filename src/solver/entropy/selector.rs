//! Entropy-maximizing guess selection
//!
//! Scores every word in a guess pool and picks the one with the highest
//! entropy. Ties go to the word that comes first in the pool, whether the
//! scan runs serially or on the rayon pool.

use super::calculator::score_entropy;
use crate::core::Word;
use rayon::prelude::*;
use std::cmp::Ordering;

/// How to run a scan over the guess pool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scan {
    /// Score guesses on the rayon thread pool
    #[default]
    Parallel,
    /// Score guesses one after another on the calling thread
    Serial,
}

/// Pool index, word, entropy
type Scored<'a> = (usize, &'a Word, f64);

/// Higher entropy wins; equal entropy goes to the lower pool index
///
/// Associative and commutative, so any rayon reduction order gives the same answer.
fn prefer<'a>(a: Scored<'a>, b: Scored<'a>) -> Scored<'a> {
    match a.2.total_cmp(&b.2) {
        Ordering::Greater => a,
        Ordering::Less => b,
        Ordering::Equal => {
            if a.0 <= b.0 {
                a
            } else {
                b
            }
        }
    }
}

/// Select the guess with maximum entropy against the candidates
///
/// Returns the word and its entropy, or `None` if the guess pool is empty.
///
/// # Examples
/// ```
/// use wordle_recommender::core::Word;
/// use wordle_recommender::solver::entropy::{Scan, select_best_guess};
///
/// let guesses = vec![Word::new("aaaaa").unwrap(), Word::new("aeros").unwrap()];
/// let candidates = vec![Word::new("slate").unwrap(), Word::new("irate").unwrap()];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let (best, entropy) = select_best_guess(&guesses, &candidate_refs, Scan::Parallel).unwrap();
/// assert_eq!(best.text(), "aeros");
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [Word],
    candidates: &[&Word],
    scan: Scan,
) -> Option<(&'a Word, f64)> {
    let score = |(index, guess): (usize, &'a Word)| (index, guess, score_entropy(guess, candidates));

    let best = match scan {
        Scan::Parallel => guess_pool
            .par_iter()
            .enumerate()
            .map(score)
            .reduce_with(prefer),
        Scan::Serial => guess_pool.iter().enumerate().map(score).reduce(prefer),
    };

    best.map(|(_, word, entropy)| (word, entropy))
}

/// Rank the guess pool by entropy, best first
///
/// Equal scores keep pool order. Returns at most `top_n` entries.
#[must_use]
pub fn rank_guesses<'a>(
    guess_pool: &'a [Word],
    candidates: &[&Word],
    top_n: usize,
    scan: Scan,
) -> Vec<(&'a Word, f64)> {
    let mut scored: Vec<(&'a Word, f64)> = match scan {
        Scan::Parallel => guess_pool
            .par_iter()
            .map(|guess| (guess, score_entropy(guess, candidates)))
            .collect(),
        Scan::Serial => guess_pool
            .iter()
            .map(|guess| (guess, score_entropy(guess, candidates)))
            .collect(),
    };

    // stable sort: ties stay in pool order
    scored.sort_by(|(_, e1), (_, e2)| e2.total_cmp(e1));
    scored.truncate(top_n);
    scored
}
