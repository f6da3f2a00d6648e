//! Word analysis command
//!
//! Scores one word against the full answer list and shows where it ranks.

use crate::core::Word;
use crate::solver::entropy::{Scan, calculate_metrics, rank_guesses};
use crate::wordlists::WordLists;
use anyhow::{Context, Result, bail};

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub total_candidates: usize,
    /// Best guesses against the same candidates, best first
    pub top: Vec<(String, f64)>,
}

/// Analyze the entropy of a word against all possible answers
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters a-z)
/// - The word is not in the allowed guesses list
pub fn analyze_word(word: &str, lists: &WordLists, top_n: usize, scan: Scan) -> Result<AnalysisResult> {
    let word = Word::new(word).with_context(|| format!("invalid word '{word}'"))?;

    if !lists.is_allowed(&word) {
        bail!("'{word}' is not in the allowed guesses list");
    }

    let candidates: Vec<&Word> = lists.possible_answers().iter().collect();
    let metrics = calculate_metrics(&word, &candidates);

    let top = rank_guesses(lists.allowed_guesses(), &candidates, top_n, scan)
        .into_iter()
        .map(|(w, e)| (w.text().to_string(), e))
        .collect();

    Ok(AnalysisResult {
        word: word.text().to_string(),
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        total_candidates: candidates.len(),
        top,
    })
}
