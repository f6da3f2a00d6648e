//! Verbose diagnostics on stderr
//!
//! Silent unless enabled with `--verbose`, so stdout stays clean for results.

use crate::core::{Feedback, Word};
use crate::solver::Session;
use crate::solver::entropy::rank_guesses;
use colored::Colorize;

/// Number of ranked guesses listed after each submission
pub const TOP_RANKED: usize = 5;

#[derive(Debug, Clone, Copy, Default)]
pub struct Diagnostics {
    enabled: bool,
}

impl Diagnostics {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[must_use]
    pub const fn enabled(self) -> bool {
        self.enabled
    }

    fn line(self, message: &str) {
        if self.enabled {
            eprintln!("{} {}", "[diag]".bright_black(), message.dimmed());
        }
    }

    /// Feedback was accepted for `guess`
    pub fn submitted(self, guess: &Word, feedback: Feedback, remaining: usize) {
        self.line(&format!(
            "{guess} {feedback} ({}) → {remaining} candidates remain",
            feedback.to_emoji()
        ));
    }

    /// Best guesses for the session's current candidates
    ///
    /// Ranking scans the whole guess pool again, so it only runs when enabled.
    pub fn ranked(self, session: &Session) {
        if !self.enabled || session.candidates().len() < 2 {
            return;
        }

        let ranked = rank_guesses(
            session.lists().allowed_guesses(),
            session.candidates(),
            TOP_RANKED,
            session.scan(),
        );
        let listing: Vec<String> = ranked
            .iter()
            .map(|(word, entropy)| format!("{word} {entropy:.3}"))
            .collect();
        self.line(&format!("top entropy: {}", listing.join(", ")));
    }

    pub fn suggestion(self, suggestion: Option<&Word>) {
        match suggestion {
            Some(word) => self.line(&format!("next suggestion: {word}")),
            None => self.line("session finished"),
        }
    }

    pub fn rejected(self, reason: &str) {
        self.line(&format!("rejected: {reason}"));
    }
}
