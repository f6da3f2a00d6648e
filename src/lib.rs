//! Wordle Recommender
//!
//! Suggests the next guess for a Wordle-style puzzle: the allowed guess whose
//! feedback pattern distribution over the remaining answers has the highest
//! Shannon entropy.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_recommender::solver::Session;
//! use wordle_recommender::wordlists::WordLists;
//!
//! let lists = WordLists::from_strs(
//!     "salet\ncrane\nirate\ncrate\ntrace\n",
//!     "irate\ncrate\ntrace\n",
//! )
//! .unwrap();
//!
//! let mut session = Session::new(&lists);
//! assert_eq!(session.suggestion().unwrap().text(), "salet");
//!
//! let result = session.submit_str("salet", "-Y-YY").unwrap();
//! assert_eq!(result.remaining_candidates, 3);
//! assert!(!result.finished);
//! ```

// Core domain types
pub mod core;

// Scoring, filtering and the session
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
