//! Terminal UI for playing along with a live game

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
