//! Code representation
//!
//! A Code is a fixed-length sequence of pawn colors stored inline, so copies are
//! cheap and a full code space needs no per-code allocation.

use super::Color;
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Longest code the engine supports
pub const MAX_CODE_LEN: usize = 8;

/// A complete combination of pawn colors
///
/// Slots past `len` are always `Color::default()` so derived equality and
/// hashing only see the meaningful prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    pegs: [Color; MAX_CODE_LEN],
    len: u8,
}

/// Error type for codes parsed from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeParseError {
    #[error("code must have between 1 and {max} pawns, got {0}", max = MAX_CODE_LEN)]
    InvalidLength(usize),
    #[error("'{0}' is not a color initial (use B C G O P R Y)")]
    UnknownColor(char),
}

impl Code {
    /// Build a code from a slice of colors
    ///
    /// # Errors
    /// Returns `CodeParseError::InvalidLength` if the slice is empty or longer
    /// than [`MAX_CODE_LEN`].
    pub fn new(colors: &[Color]) -> Result<Self, CodeParseError> {
        if colors.is_empty() || colors.len() > MAX_CODE_LEN {
            return Err(CodeParseError::InvalidLength(colors.len()));
        }

        let mut pegs = [Color::default(); MAX_CODE_LEN];
        pegs[..colors.len()].copy_from_slice(colors);

        Ok(Self {
            pegs,
            len: colors.len() as u8,
        })
    }

    /// Decode a code space index
    ///
    /// Mixed-radix decoding with radix [`Color::COUNT`]: slot 0 is the
    /// least-significant digit, so it varies fastest as `index` grows.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Color};
    ///
    /// let code = Code::from_index(1, 4);
    /// assert_eq!(code.colors(), &[Color::Cyan, Color::Blue, Color::Blue, Color::Blue]);
    /// ```
    ///
    /// # Panics
    /// Panics in debug mode if `len` is zero or above [`MAX_CODE_LEN`].
    #[must_use]
    pub fn from_index(mut index: usize, len: usize) -> Self {
        debug_assert!((1..=MAX_CODE_LEN).contains(&len), "invalid code length");

        let mut pegs = [Color::default(); MAX_CODE_LEN];
        for peg in pegs.iter_mut().take(len) {
            *peg = Color::ALL[index % Color::COUNT];
            index /= Color::COUNT;
        }

        Self {
            pegs,
            len: len as u8,
        }
    }

    /// Draw a code uniformly at random, each slot independently
    #[must_use]
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        debug_assert!((1..=MAX_CODE_LEN).contains(&len), "invalid code length");

        let mut pegs = [Color::default(); MAX_CODE_LEN];
        for peg in pegs.iter_mut().take(len) {
            *peg = Color::ALL[rng.random_range(0..Color::COUNT)];
        }

        Self {
            pegs,
            len: len as u8,
        }
    }

    /// Number of pawns
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false: codes have at least one pawn
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The pawns of this code
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.pegs[..self.len()]
    }

    /// Color at a slot
    ///
    /// # Panics
    /// Panics if `slot >= self.len()`
    #[inline]
    #[must_use]
    pub fn color_at(&self, slot: usize) -> Color {
        self.colors()[slot]
    }

    /// Per-color occurrence counts
    pub(crate) fn color_counts(&self) -> [u8; Color::COUNT] {
        let mut counts = [0u8; Color::COUNT];
        for color in self.colors() {
            counts[color.index()] += 1;
        }
        counts
    }
}

impl FromStr for Code {
    type Err = CodeParseError;

    /// Parse color initials, e.g. `"BCGO"`; whitespace is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let colors = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| Color::from_initial(c).ok_or(CodeParseError::UnknownColor(c)))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(&colors)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in self.colors() {
            write!(f, "{}", color.initial())?;
        }
        Ok(())
    }
}
