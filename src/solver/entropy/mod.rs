//! Entropy-based guess scoring
//!
//! Shannon entropy of the feedback distribution a guess would produce over the
//! current candidates, and selection of the guess that maximizes it.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_metrics, score_entropy, shannon_entropy};
pub use selector::{Scan, rank_guesses, select_best_guess};
