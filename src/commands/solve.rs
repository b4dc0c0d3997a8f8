//! Code solving command
//!
//! Plays the solver against a known secret, scoring each guess
//! automatically, and returns the path it took.

use crate::core::{Code, Score};
use crate::game::{DEFAULT_ATTEMPTS, Outcome};
use crate::solver::{CodeSpace, Solver};

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: Code,
    pub max_attempts: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: Code) -> Self {
        Self {
            secret,
            max_attempts: DEFAULT_ATTEMPTS,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub secret: Code,
    pub outcome: Outcome,
    pub guesses: Vec<GuessStep>,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.outcome, Outcome::Win)
    }
}

/// A single guess in the solution path
pub struct GuessStep {
    pub code: Code,
    pub score: Score,
    /// Code space index the next scan starts from
    pub solver_index: usize,
}

/// Solve `config.secret`, generating the code space for its length
#[must_use]
pub fn solve_code(config: &SolveConfig) -> SolveResult {
    let space = CodeSpace::generate(config.secret.len());
    solve_in_space(config, &space)
}

/// Solve `config.secret` on an existing code space
///
/// The space is shared, so many secrets can be solved without regenerating
/// it.
///
/// # Panics
/// Panics if the secret length differs from the space's code length.
#[must_use]
pub fn solve_in_space(config: &SolveConfig, space: &CodeSpace) -> SolveResult {
    assert_eq!(
        config.secret.len(),
        space.nb_pawns(),
        "secret length must match the code space"
    );

    let nb_pawns = space.nb_pawns();
    let mut solver = Solver::new(space.clone());
    let mut guesses: Vec<GuessStep> = Vec::new();
    let mut guess = solver.first_guess();

    let outcome = loop {
        let score = Score::calculate(&guess, &config.secret);
        guesses.push(GuessStep {
            code: guess,
            score,
            solver_index: solver.last_index(),
        });

        if score.is_exact(nb_pawns) {
            break Outcome::Win;
        }
        if guesses.len() >= config.max_attempts {
            break Outcome::Loss;
        }

        match solver.next_guess(&guess, score) {
            Ok(next) => guess = next,
            Err(_) => break Outcome::Exhausted,
        }
    };

    SolveResult {
        secret: config.secret,
        outcome,
        guesses,
    }
}
