//! Code-breaking solver
//!
//! The code space enumerates every candidate; the solver scans it greedily
//! using the previous round's score.

mod engine;
mod space;

pub use engine::{Solver, SolverError};
pub use space::CodeSpace;
