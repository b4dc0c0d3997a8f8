//! Human-entered peg feedback
//!
//! In the proposer role the human scores the machine's guess by placing one
//! marker per slot. Markers are tallied into a [`Score`], not recomputed.

use super::Score;

/// A feedback marker placed on a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackPeg {
    /// Right color, right slot
    Black,
    /// Right color, wrong slot
    White,
}

impl FeedbackPeg {
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Black => 'B',
            Self::White => 'W',
        }
    }

    /// Parse a marker: `B`/`W` (case-insensitive), or `-`/`.`/`_` for none
    ///
    /// Returns `None` for an unrecognized character, `Some(None)` for an
    /// explicit empty marker.
    #[must_use]
    pub fn from_symbol(ch: char) -> Option<Option<Self>> {
        match ch {
            'B' | 'b' => Some(Some(Self::Black)),
            'W' | 'w' => Some(Some(Self::White)),
            '-' | '.' | '_' => Some(None),
            _ => None,
        }
    }
}

/// Next marker in the cycle: none -> black -> white -> none
#[must_use]
pub const fn next_marker(current: Option<FeedbackPeg>) -> Option<FeedbackPeg> {
    match current {
        None => Some(FeedbackPeg::Black),
        Some(FeedbackPeg::Black) => Some(FeedbackPeg::White),
        Some(FeedbackPeg::White) => None,
    }
}

/// Per-slot feedback buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    markers: Vec<Option<FeedbackPeg>>,
}

impl Feedback {
    /// Empty buffer with one slot per pawn
    #[must_use]
    pub fn new(nb_pawns: usize) -> Self {
        Self {
            markers: vec![None; nb_pawns],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Marker on a slot, `None` if the slot is out of range or unmarked
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<FeedbackPeg> {
        self.markers.get(slot).copied().flatten()
    }

    pub fn markers(&self) -> &[Option<FeedbackPeg>] {
        &self.markers
    }

    /// Advance the marker on `slot` and return the new marker
    ///
    /// Returns `None` (the outer option) when `slot` is out of range.
    pub fn cycle(&mut self, slot: usize) -> Option<Option<FeedbackPeg>> {
        let marker = self.markers.get_mut(slot)?;
        *marker = next_marker(*marker);
        Some(*marker)
    }

    pub fn clear(&mut self) {
        self.markers.fill(None);
    }

    /// Count blacks as correct and whites as misplaced
    #[must_use]
    pub fn tally(&self) -> Score {
        let blacks = self
            .markers
            .iter()
            .filter(|m| **m == Some(FeedbackPeg::Black))
            .count();
        let whites = self
            .markers
            .iter()
            .filter(|m| **m == Some(FeedbackPeg::White))
            .count();

        Score::new(blacks as u8, whites as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_order_none_black_white_none() {
        let mut feedback = Feedback::new(4);
        assert_eq!(feedback.cycle(1), Some(Some(FeedbackPeg::Black)));
        assert_eq!(feedback.cycle(1), Some(Some(FeedbackPeg::White)));
        assert_eq!(feedback.cycle(1), Some(None));
        assert_eq!(feedback.cycle(1), Some(Some(FeedbackPeg::Black)));
    }

    #[test]
    fn cycle_out_of_range() {
        let mut feedback = Feedback::new(4);
        assert_eq!(feedback.cycle(4), None);
        assert_eq!(feedback, Feedback::new(4));
    }

    #[test]
    fn tally_counts_markers_regardless_of_slot() {
        let mut feedback = Feedback::new(5);
        feedback.cycle(0); // black
        feedback.cycle(3); // black
        feedback.cycle(2);
        feedback.cycle(2); // white

        assert_eq!(feedback.tally(), Score::new(2, 1));
        assert_eq!(feedback.get(2), Some(FeedbackPeg::White));
        assert_eq!(feedback.get(4), None);
    }

    #[test]
    fn clear_removes_every_marker() {
        let mut feedback = Feedback::new(4);
        feedback.cycle(0);
        feedback.cycle(1);
        feedback.clear();
        assert_eq!(feedback.tally(), Score::default());
    }

    #[test]
    fn symbols_parse() {
        assert_eq!(FeedbackPeg::from_symbol('b'), Some(Some(FeedbackPeg::Black)));
        assert_eq!(FeedbackPeg::from_symbol('W'), Some(Some(FeedbackPeg::White)));
        assert_eq!(FeedbackPeg::from_symbol('-'), Some(None));
        assert_eq!(FeedbackPeg::from_symbol('x'), None);
    }
}
