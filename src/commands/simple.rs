//! Simple interactive CLI mode
//!
//! Text-based interactive recommender without TUI

use crate::core::{Feedback, Word};
use crate::output::Diagnostics;
use crate::output::formatters::colored_guess;
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Session, SessionError};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// A line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Quit,
    New,
    Undo,
    /// Feedback for the suggested guess
    Feedback(Feedback),
    /// Feedback for a word the user played instead of the suggestion
    Played(String, Feedback),
    Invalid(String),
}

impl Input {
    /// Interpret one line: a command, a pattern, or "word pattern"
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Self::Quit,
            "new" | "n" => return Self::New,
            "undo" | "u" => return Self::Undo,
            "win" | "correct" | "yes" | "solved" => return Self::Feedback(Feedback::ALL_HIT),
            _ => {}
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [pattern] => pattern
                .parse()
                .map_or_else(|e| Self::Invalid(format!("{e}")), Self::Feedback),
            [word, pattern] => match pattern.parse() {
                Ok(feedback) => Self::Played((*word).to_string(), feedback),
                Err(e) => Self::Invalid(format!("{e}")),
            },
            _ => Self::Invalid("expected a pattern, or a word and a pattern".to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(session: &mut Session, diagnostics: Diagnostics) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Wordle Recommender - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest the guess that tells us the most about the answer.");
    println!("After each guess, enter the feedback pattern:\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use -/_/⬛ for gray (not in word)");
    println!("  - Prefix a word if you played something else: 'crane GY---'");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    session.reset();

    loop {
        if session.is_finished() {
            show_outcome(session);
            let again = get_user_input("Play again? (yes/no)")?.to_lowercase();
            if matches!(again.as_str(), "yes" | "y") {
                session.reset();
                println!("\n🔄 New game started!\n");
                continue;
            }
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        let Some(suggestion) = session.suggestion().cloned() else {
            return Ok(());
        };
        show_turn(session, &suggestion);

        let input = get_user_input("Enter feedback (G/Y/-, 'win', or command)")?;
        let submitted = match Input::parse(&input) {
            Input::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Input::New => {
                session.reset();
                println!("\n🔄 New game started!\n");
                continue;
            }
            Input::Undo => {
                match session.undo() {
                    Ok(_) => println!("✓ Undone! Back to turn {}\n", session.turn()),
                    Err(e) => println!("{e}\n"),
                }
                continue;
            }
            Input::Invalid(reason) => {
                println!("❌ Invalid input: {reason}. Use G/Y/-, 'win', or '🟩🟨⬛🟩🟨'\n");
                continue;
            }
            Input::Feedback(feedback) => (Ok(suggestion), feedback),
            Input::Played(word, feedback) => (Word::new(&word), feedback),
        };

        let (guess, feedback) = match submitted {
            (Ok(guess), feedback) => (guess, feedback),
            (Err(e), _) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        match session.submit_feedback(guess.clone(), feedback) {
            Ok(result) => {
                diagnostics.submitted(&guess, feedback, result.remaining_candidates);
                diagnostics.ranked(session);
                diagnostics.suggestion(result.next_suggestion.as_ref());
                println!("{}\n", colored_guess(&guess, feedback));
            }
            Err(e @ SessionError::EmptyCandidateSet { .. }) => {
                diagnostics.rejected(&e.to_string());
                println!("\n❌ No candidates remain! Your feedback may be incorrect.");
                println!("Re-enter the feedback, or type 'undo' to go back.\n");
            }
            Err(e) => println!("❌ {e}\n"),
        }
    }
}

fn show_turn(session: &Session, suggestion: &Word) {
    let candidates = session.candidates();

    println!("────────────────────────────────────────────────────────────");
    println!(
        "Turn {}: {} candidates remaining",
        session.turn(),
        candidates.len()
    );
    println!("────────────────────────────────────────────────────────────");

    println!(
        "\n📊 Suggested guess: {}",
        suggestion.text().to_uppercase().bright_green().bold()
    );
    if candidates.len() > 1 {
        let metrics = calculate_metrics(suggestion, candidates);
        println!("   Entropy:          {:.3} bits", metrics.entropy);
        println!(
            "   Expected info:    {:.1}x reduction",
            metrics.entropy.exp2()
        );
        println!(
            "   Expected remain:  {:.1} candidates",
            metrics.expected_remaining
        );
        println!(
            "   Worst case:       {} candidates",
            metrics.max_partition
        );
    }
    println!();

    if candidates.len() <= 10 {
        println!("Remaining candidates:");
        for candidate in candidates {
            println!("  • {}", candidate.text().to_uppercase());
        }
        println!();
    }
}

fn show_outcome(session: &Session) {
    let history = session.history();
    let guesses = history.len();

    if !session.is_solved() {
        println!(
            "\n{}",
            format!("❌ Out of turns after {guesses} guesses").red().bold()
        );
        return;
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let performance = match guesses {
        1 => ("🏆 Perfect!", "Incredible hole-in-one!"),
        2 => ("⭐ Excellent!", "Outstanding performance!"),
        3 => ("💫 Great!", "Very well played!"),
        4 => ("✨ Good!", "Nice work!"),
        5 => ("👍 Solved!", "Got it!"),
        _ => ("✓ Complete!", "Success!"),
    };

    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());
    println!(
        "\n  Solution found in {} {}",
        guesses.to_string().bright_cyan().bold(),
        if guesses == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, record) in history.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            record.guess.text().to_uppercase().bright_white().bold(),
            record.feedback.to_emoji()
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("flushing stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("reading from stdin")?;

    // end of input behaves like quit
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tile::{Hit, Miss, Present};
    use crate::core::ValidationError;

    #[test]
    fn parses_commands() {
        assert_eq!(Input::parse("quit"), Input::Quit);
        assert_eq!(Input::parse(" Q "), Input::Quit);
        assert_eq!(Input::parse("new"), Input::New);
        assert_eq!(Input::parse("u"), Input::Undo);
        assert_eq!(Input::parse("win"), Input::Feedback(Feedback::ALL_HIT));
    }

    #[test]
    fn parses_pattern_for_suggestion() {
        assert_eq!(
            Input::parse("gy-G-"),
            Input::Feedback(Feedback::new([Hit, Present, Miss, Hit, Miss]))
        );
        assert_eq!(
            Input::parse("🟩🟨⬛🟩🟨"),
            Input::Feedback(Feedback::new([Hit, Present, Miss, Hit, Present]))
        );
    }

    #[test]
    fn parses_played_word_with_pattern() {
        assert_eq!(
            Input::parse("crane --Y-G"),
            Input::Played("crane".to_string(), Feedback::new([Miss, Miss, Present, Miss, Hit]))
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            Input::parse("GYZ--"),
            Input::Invalid(ValidationError::InvalidFeedbackSymbol('Z').to_string())
        );
        assert!(matches!(Input::parse("a b c"), Input::Invalid(_)));
        assert!(matches!(Input::parse(""), Input::Invalid(_)));
        assert!(matches!(Input::parse("crane GY"), Input::Invalid(_)));
    }
}
