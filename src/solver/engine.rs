//! Machine code-breaker
//!
//! The solver walks the code space once, front to back. Its opening guess is
//! the first code; every later guess is the next code (after the previous
//! pick) that would have produced the same score against the previous guess.
//! Only the immediately preceding round is consulted and the scan never
//! restarts, so a pick can contradict an older round.

use super::CodeSpace;
use crate::core::{Code, Score};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

/// Error type for the solver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// The scan reached the end of the code space without a consistent code
    #[error("no consistent candidate left after index {scanned_from} of {space_len}")]
    Exhausted {
        scanned_from: usize,
        space_len: usize,
    },
}

/// Stateful candidate scan over a code space
#[derive(Debug, Clone)]
pub struct Solver {
    space: CodeSpace,
    last_index: usize,
}

impl Solver {
    /// Seed a solver on `space`
    ///
    /// The opening guess is `space[0]`, so the scan starts at index 1.
    #[must_use]
    pub const fn new(space: CodeSpace) -> Self {
        Self {
            space,
            last_index: 1,
        }
    }

    /// The opening guess: the first code of the space
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Color};
    /// use mastermind::solver::{CodeSpace, Solver};
    ///
    /// let solver = Solver::new(CodeSpace::generate(5));
    /// assert_eq!(solver.first_guess(), Code::new(&[Color::Blue; 5]).unwrap());
    /// ```
    #[must_use]
    pub fn first_guess(&self) -> Code {
        self.space[0]
    }

    /// Index the next scan starts from
    #[must_use]
    pub const fn last_index(&self) -> usize {
        self.last_index
    }

    #[must_use]
    pub const fn space(&self) -> &CodeSpace {
        &self.space
    }

    /// Pick the next guess from the previous guess and the score it received
    ///
    /// Scans forward from [`last_index`](Self::last_index) for the first code
    /// whose score against `previous_guess` equals `previous_score`. On
    /// success the scan position moves just past the pick.
    ///
    /// # Errors
    /// Returns `SolverError::Exhausted` when no code up to the end of the
    /// space matches. The scan position is then left at the end, so every
    /// later call also fails.
    pub fn next_guess(
        &mut self,
        previous_guess: &Code,
        previous_score: Score,
    ) -> Result<Code, SolverError> {
        let start = self.last_index.min(self.space.len());
        let remaining = &self.space.as_slice()[start..];

        // position_first keeps the sequential "first match" semantics
        let found = remaining.par_iter().position_first(|candidate| {
            Score::calculate(candidate, previous_guess) == previous_score
        });

        match found {
            Some(offset) => {
                let index = start + offset;
                self.last_index = index + 1;
                let guess = self.space[index];
                debug!(index, %guess, "solver picked candidate");
                Ok(guess)
            }
            None => {
                self.last_index = self.space.len();
                warn!(
                    scanned_from = start,
                    space_len = self.space.len(),
                    "solver exhausted the code space"
                );
                Err(SolverError::Exhausted {
                    scanned_from: start,
                    space_len: self.space.len(),
                })
            }
        }
    }
}
