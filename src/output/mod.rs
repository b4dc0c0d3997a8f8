//! Terminal output formatting
//!
//! Colored rendering of codes, pegs and command results.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_ranking, print_solve_result};
