//! Mastermind
//!
//! A two-role Mastermind engine: the human either breaks a machine-drawn
//! secret, or sets a secret and scores a greedy solver's guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Score};
//! use mastermind::solver::{CodeSpace, Solver};
//!
//! let secret: Code = "CBBB".parse().unwrap();
//!
//! let mut solver = Solver::new(CodeSpace::generate(4));
//! let opening = solver.first_guess();
//! let score = Score::calculate(&opening, &secret);
//! assert_eq!(score, Score::new(3, 0));
//!
//! let next = solver.next_guess(&opening, score).unwrap();
//! assert_eq!(next, secret);
//! ```

// Core domain types
pub mod core;

// Code space and solver
pub mod solver;

// Settings, history and the session state machine
pub mod game;

// Persisted score tally
pub mod ledger;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
