//! Command implementations

pub mod benchmark;
pub mod play;
pub mod scores;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::run_play;
pub use scores::top_scores;
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_code, solve_in_space};
