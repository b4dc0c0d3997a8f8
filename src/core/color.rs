//! Pawn color palette
//!
//! The palette is a closed set of seven real colors. An unfilled slot is not a
//! color: code under construction uses `Option<Color>` for that.

use std::fmt;

/// A pawn color
///
/// The declaration order is the enumeration order used everywhere a color
/// maps to a digit (scoring tallies, code space indexing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Color {
    #[default]
    Blue,
    Cyan,
    Green,
    Orange,
    Purple,
    Red,
    Yellow,
}

impl Color {
    /// Number of real colors (K)
    pub const COUNT: usize = 7;

    /// Every color in enumeration order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Blue,
        Self::Cyan,
        Self::Green,
        Self::Orange,
        Self::Purple,
        Self::Red,
        Self::Yellow,
    ];

    /// Digit of this color in the palette (0-6)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color for a palette digit, `None` when out of range
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// One-letter tag used on the command line
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::Blue => 'B',
            Self::Cyan => 'C',
            Self::Green => 'G',
            Self::Orange => 'O',
            Self::Purple => 'P',
            Self::Red => 'R',
            Self::Yellow => 'Y',
        }
    }

    /// Parse a color from its initial (case-insensitive)
    #[must_use]
    pub fn from_initial(ch: char) -> Option<Self> {
        let upper = ch.to_ascii_uppercase();
        Self::ALL.into_iter().find(|c| c.initial() == upper)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Red => "red",
            Self::Yellow => "yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
