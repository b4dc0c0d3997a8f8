//! Peg score calculation
//!
//! A score is the classic Mastermind feedback for a guess against a secret:
//! - `correct`: right color in the right slot (black peg)
//! - `misplaced`: right color in the wrong slot (white peg)
//!
//! A color only counts as misplaced as many times as it is still unaccounted
//! for in both codes once exact matches are removed.

use super::{Code, Color};
use std::fmt;

/// Feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    correct: u8,
    misplaced: u8,
}

impl Score {
    /// Create a score from raw peg counts
    #[inline]
    #[must_use]
    pub const fn new(correct: u8, misplaced: u8) -> Self {
        Self { correct, misplaced }
    }

    /// Number of pawns with the right color in the right slot
    #[inline]
    #[must_use]
    pub const fn correct(self) -> u8 {
        self.correct
    }

    /// Number of pawns with the right color in the wrong slot
    #[inline]
    #[must_use]
    pub const fn misplaced(self) -> u8 {
        self.misplaced
    }

    /// Check if every one of `nb_pawns` slots matched exactly
    #[inline]
    #[must_use]
    pub const fn is_exact(self, nb_pawns: usize) -> bool {
        self.correct as usize == nb_pawns
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: count exact position matches and remove them from both
    ///    per-color pools
    /// 2. Second pass: for each color, the misplaced count is the smaller of
    ///    the two remaining pools
    ///
    /// The result is symmetric in its arguments.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Score};
    ///
    /// let secret: Code = "BCBC".parse().unwrap();
    /// let guess: Code = "BBCC".parse().unwrap();
    ///
    /// assert_eq!(Score::calculate(&guess, &secret), Score::new(2, 2));
    /// ```
    ///
    /// # Panics
    /// Panics if the two codes have different lengths.
    #[must_use]
    pub fn calculate(guess: &Code, secret: &Code) -> Self {
        assert_eq!(
            guess.len(),
            secret.len(),
            "cannot score codes of different lengths"
        );

        let mut guess_pool = guess.color_counts();
        let mut secret_pool = secret.color_counts();

        // First pass: exact matches leave both pools
        let mut correct = 0u8;
        for (&g, &s) in guess.colors().iter().zip(secret.colors()) {
            if g == s {
                correct += 1;
                guess_pool[g.index()] -= 1;
                secret_pool[s.index()] -= 1;
            }
        }

        // Second pass: overlap of what is left
        let misplaced = (0..Color::COUNT)
            .map(|c| guess_pool[c].min(secret_pool[c]))
            .sum();

        Self { correct, misplaced }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} correct, {} misplaced", self.correct, self.misplaced)
    }
}
