//! Word solving command
//!
//! Plays a session against a known target and records the solution path.

use crate::core::{Feedback, Word};
use crate::solver::Session;
use crate::solver::entropy::calculate_metrics;
use anyhow::{Context, Result, bail};

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve a specific word, starting from a fresh session
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters a-z)
/// - The target is not in the possible answers list
pub fn solve_word(session: &mut Session, target: &str) -> Result<SolveResult> {
    let target_word =
        Word::new(target).with_context(|| format!("invalid target word '{target}'"))?;

    if !session.lists().is_answer(&target_word) {
        bail!("'{target_word}' is not in the possible answers list");
    }

    play_out(session, &target_word, None)
}

/// Play suggestions against `target` until the session finishes
///
/// `first` replaces the opening suggestion on turn one.
///
/// # Errors
/// Propagates session errors; with a target from the answers list none occur.
pub fn play_out(session: &mut Session, target: &Word, first: Option<&Word>) -> Result<SolveResult> {
    session.reset();
    let mut guesses: Vec<GuessStep> = Vec::new();

    while !session.is_finished() {
        let guess = match (guesses.is_empty(), first, session.suggestion()) {
            (true, Some(forced), _) => forced.clone(),
            (_, _, Some(suggested)) => suggested.clone(),
            (_, _, None) => break,
        };

        let candidates_before = session.candidates().len();
        let (entropy, expected_remaining) = if candidates_before > 1 {
            let metrics = calculate_metrics(&guess, session.candidates());
            (Some(metrics.entropy), Some(metrics.expected_remaining))
        } else {
            (None, None)
        };

        let feedback = Feedback::compute(&guess, target);
        let result = session
            .submit_feedback(guess.clone(), feedback)
            .with_context(|| format!("solving '{target}'"))?;

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            candidates_before,
            candidates_after: result.remaining_candidates,
            entropy,
            expected_remaining,
        });
    }

    Ok(SolveResult {
        success: session.is_solved(),
        guesses,
        target: target.text().to_string(),
    })
}
