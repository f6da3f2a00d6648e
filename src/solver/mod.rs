//! Next-guess recommendation
//!
//! Entropy scoring, candidate filtering, and the stateful session that ties
//! them together.

pub mod entropy;
pub mod filter;
mod session;

pub use entropy::Scan;
pub use session::{GuessRecord, OPENING_WORD, Session, SessionError, SubmitResult};
