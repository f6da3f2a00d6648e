//! Opening word check
//!
//! The session opens with a fixed word instead of scanning the whole guess
//! pool on every reset. This command does the scan once for the loaded lists
//! and reports how the configured opening word compares.

use crate::core::Word;
use crate::solver::entropy::{Scan, rank_guesses, score_entropy};
use crate::wordlists::WordLists;

/// Result of re-deriving the opening word
#[derive(Debug, Clone)]
pub struct OpenerReport {
    pub configured: String,
    pub configured_entropy: f64,
    /// 1-based rank of the configured word in the guess pool, if it is in it
    pub configured_rank: Option<usize>,
    pub best: String,
    pub best_entropy: f64,
    pub top: Vec<(String, f64)>,
    pub total_candidates: usize,
}

impl OpenerReport {
    /// Whether the configured word scores as high as the best word
    #[must_use]
    pub fn configured_is_best(&self) -> bool {
        self.configured_entropy >= self.best_entropy
    }
}

/// Rank every allowed guess against the full answer list
#[must_use]
pub fn derive_opener(lists: &WordLists, configured: &Word, top_n: usize, scan: Scan) -> OpenerReport {
    let candidates: Vec<&Word> = lists.possible_answers().iter().collect();
    let pool = lists.allowed_guesses();

    let ranked = rank_guesses(pool, &candidates, pool.len(), scan);
    let configured_entropy = score_entropy(configured, &candidates);
    let configured_rank = ranked
        .iter()
        .position(|(w, _)| *w == configured)
        .map(|i| i + 1);

    // the pool is never empty
    let (best, best_entropy) = ranked
        .first()
        .map_or((configured, configured_entropy), |&(w, e)| (w, e));

    OpenerReport {
        configured: configured.text().to_string(),
        configured_entropy,
        configured_rank,
        best: best.text().to_string(),
        best_entropy,
        top: ranked
            .iter()
            .take(top_n)
            .map(|(w, e)| (w.text().to_string(), *e))
            .collect(),
        total_candidates: candidates.len(),
    }
}
