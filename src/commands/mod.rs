//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod opener;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use opener::{OpenerReport, derive_opener};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveResult, play_out, solve_word};
