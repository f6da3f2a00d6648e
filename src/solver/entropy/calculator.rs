//! Shannon entropy of feedback partitions
//!
//! Given a guess and the current candidate set, computes the expected
//! information gain of playing that guess.

use crate::core::{Feedback, Word};
use rustc_hash::FxHashMap;

/// Summary of how a guess partitions the candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Largest feedback group (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Score a guess by the entropy of the feedback it would produce
///
/// Every candidate is treated as equally likely to be the target.
/// Returns 0.0 for an empty candidate set and for a single candidate.
///
/// # Formula
/// H = -Σ (c/n) * log₂(c/n)
///
/// where c is the size of each feedback group and n the number of candidates.
///
/// # Examples
/// ```
/// use wordle_recommender::core::Word;
/// use wordle_recommender::solver::entropy::score_entropy;
///
/// let guess = Word::new("slate").unwrap();
/// let candidates = vec![Word::new("slate").unwrap(), Word::new("zzzzz").unwrap()];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// // two equally likely, distinguishable outcomes = 1 bit
/// assert!((score_entropy(&guess, &candidate_refs) - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn score_entropy(guess: &Word, candidates: &[&Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&group_by_feedback(guess, candidates))
}

/// Count candidates per feedback the guess would produce against them
fn group_by_feedback(guess: &Word, candidates: &[&Word]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        *counts.entry(Feedback::compute(guess, candidate)).or_insert(0) += 1;
    }

    counts
}

/// Shannon entropy (base 2) of a feedback distribution given as counts
///
/// - 0.0 for a single outcome or an empty distribution
/// - maximal for a uniform distribution, at most log₂(number of groups)
#[must_use]
pub fn shannon_entropy<S>(counts: &std::collections::HashMap<Feedback, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let mut sizes: Vec<usize> = counts.values().copied().filter(|&count| count > 0).collect();
    // sum in size order: equal partition shapes give bit-identical entropy
    sizes.sort_unstable();

    let total = sizes.iter().sum::<usize>() as f64;
    if total == 0.0 {
        return 0.0;
    }

    sizes
        .iter()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>()
        // every term is >= 0; a single group sums to -0.0
        .abs()
}

/// Entropy together with expected and worst-case remaining candidates
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[&Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let groups = group_by_feedback(guess, candidates);
    let total = candidates.len() as f64;

    let squares: usize = groups.values().map(|&count| count * count).sum();
    let expected_remaining = squares as f64 / total;

    GuessMetrics {
        entropy: shannon_entropy(&groups),
        expected_remaining,
        max_partition: groups.values().copied().max().unwrap_or(0),
    }
}
