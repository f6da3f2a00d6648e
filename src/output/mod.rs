//! Terminal output formatting
//!
//! Display utilities for CLI results, pretty-printing and verbose diagnostics.

pub mod diagnostics;
pub mod display;
pub mod formatters;

pub use diagnostics::Diagnostics;
pub use display::{
    print_analysis_result, print_benchmark_result, print_opener_report, print_solve_result,
};
