//! Bounded round history
//!
//! Rounds are written into fixed slots at a countdown cursor. The cursor starts
//! at `capacity - 1` and drops by one per completed round, so it alone encodes
//! both how many attempts remain and how many rounds were played.

use crate::core::{Code, Score};
use thiserror::Error;

/// One guess and the score it received
///
/// `score` is `None` while a machine guess waits for the human's feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub code: Code,
    pub score: Option<Score>,
}

/// Error type for history updates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("history is full ({capacity} rounds)")]
    Full { capacity: usize },
    #[error("no round is waiting for a score")]
    NoPendingRound,
}

/// Fixed-capacity history with a countdown cursor
#[derive(Debug, Clone)]
pub struct History {
    slots: Vec<Option<Round>>,
    cursor: isize,
}

impl History {
    /// Empty history holding at most `capacity` rounds
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "history capacity must be positive");
        Self {
            slots: vec![None; capacity],
            cursor: capacity as isize - 1,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Raw cursor value, in `[-1, capacity - 1]`
    #[must_use]
    pub const fn cursor(&self) -> isize {
        self.cursor
    }

    /// Rounds that can still be played
    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        (self.cursor + 1) as usize
    }

    /// Rounds completed so far
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.capacity() - self.attempts_remaining()
    }

    /// Check if no attempt is left
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.cursor < 0
    }

    fn cursor_slot(&self) -> Option<usize> {
        usize::try_from(self.cursor).ok()
    }

    /// Write a round into the slot at the cursor
    ///
    /// # Errors
    /// Returns `HistoryError::Full` once every attempt has been used.
    pub fn record(&mut self, code: Code, score: Option<Score>) -> Result<(), HistoryError> {
        let slot = self.cursor_slot().ok_or(HistoryError::Full {
            capacity: self.capacity(),
        })?;
        self.slots[slot] = Some(Round { code, score });
        Ok(())
    }

    /// Fill in the score of the round waiting at the cursor
    ///
    /// # Errors
    /// Returns `HistoryError::NoPendingRound` if nothing was recorded at the
    /// cursor.
    pub fn score_current(&mut self, score: Score) -> Result<(), HistoryError> {
        let round = self
            .cursor_slot()
            .and_then(|slot| self.slots[slot].as_mut())
            .ok_or(HistoryError::NoPendingRound)?;
        round.score = Some(score);
        Ok(())
    }

    /// Close the current round; the cursor never goes below -1
    pub fn advance_cursor(&mut self) {
        debug_assert!(self.cursor >= 0, "cursor advanced past the last attempt");
        self.cursor = (self.cursor - 1).max(-1);
    }

    /// The most recently completed round, `None` before the first one
    #[must_use]
    pub fn last_round(&self) -> Option<&Round> {
        let slot = usize::try_from(self.cursor + 1).ok()?;
        self.slots.get(slot)?.as_ref()
    }

    /// The round recorded at the cursor and not yet completed
    #[must_use]
    pub fn current_round(&self) -> Option<&Round> {
        self.slots[self.cursor_slot()?].as_ref()
    }

    /// Recorded rounds in play order, pending round included
    pub fn iter(&self) -> impl Iterator<Item = &Round> {
        self.slots.iter().rev().filter_map(Option::as_ref)
    }

    /// Rounds in play order that already have a score
    pub fn scored(&self) -> impl Iterator<Item = (&Code, Score)> {
        self.iter()
            .filter_map(|round| round.score.map(|score| (&round.code, score)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn new_history_has_every_attempt() {
        let history = History::new(10);
        assert_eq!(history.cursor(), 9);
        assert_eq!(history.attempts_remaining(), 10);
        assert_eq!(history.rounds_played(), 0);
        assert!(!history.is_full());
        assert!(history.last_round().is_none());
        assert!(history.current_round().is_none());
    }

    #[test]
    fn record_then_advance() {
        let mut history = History::new(10);
        history
            .record(code("BCGO"), Some(Score::new(1, 2)))
            .unwrap();
        assert!(history.last_round().is_none());
        assert_eq!(history.current_round().unwrap().code, code("BCGO"));

        history.advance_cursor();
        assert_eq!(history.cursor(), 8);
        assert_eq!(history.rounds_played(), 1);

        let last = history.last_round().unwrap();
        assert_eq!(last.code, code("BCGO"));
        assert_eq!(last.score, Some(Score::new(1, 2)));
    }

    #[test]
    fn pending_round_is_scored_in_place() {
        let mut history = History::new(3);
        assert_eq!(
            history.score_current(Score::new(0, 0)),
            Err(HistoryError::NoPendingRound)
        );

        history.record(code("BBBB"), None).unwrap();
        history.score_current(Score::new(2, 0)).unwrap();
        history.advance_cursor();

        assert_eq!(history.last_round().unwrap().score, Some(Score::new(2, 0)));
    }

    #[test]
    fn capacity_rounds_drive_cursor_to_minus_one() {
        let mut history = History::new(10);
        for i in 0..10 {
            history
                .record(Code::from_index(i, 4), Some(Score::new(0, 0)))
                .unwrap();
            history.advance_cursor();
        }

        assert_eq!(history.cursor(), -1);
        assert!(history.is_full());
        assert_eq!(history.attempts_remaining(), 0);
        assert_eq!(history.rounds_played(), 10);
        assert_eq!(
            history.record(code("BBBB"), None),
            Err(HistoryError::Full { capacity: 10 })
        );
        assert_eq!(history.last_round().unwrap().code, Code::from_index(9, 4));
    }

    #[test]
    fn iter_yields_play_order() {
        let mut history = History::new(5);
        for i in 0..3 {
            history
                .record(Code::from_index(i, 4), Some(Score::new(0, 1)))
                .unwrap();
            history.advance_cursor();
        }
        history.record(Code::from_index(3, 4), None).unwrap();

        let codes: Vec<Code> = history.iter().map(|r| r.code).collect();
        assert_eq!(codes, (0..4).map(|i| Code::from_index(i, 4)).collect::<Vec<_>>());
        assert_eq!(history.scored().count(), 3);
    }
}
