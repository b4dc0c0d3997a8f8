//! Code under construction
//!
//! A proposition holds one optional color per slot. It only becomes a
//! [`Code`] once every slot is filled.

use super::{Code, Color};

/// In-progress combination edited pawn by pawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposition {
    slots: Vec<Option<Color>>,
}

impl Proposition {
    #[must_use]
    pub fn new(nb_pawns: usize) -> Self {
        Self {
            slots: vec![None; nb_pawns],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Option<Color>] {
        &self.slots
    }

    /// Color on a slot, `None` if unset or out of range
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<Color> {
        self.slots.get(slot).copied().flatten()
    }

    /// Put `color` on `slot`; returns `false` if the slot does not exist
    pub fn set(&mut self, slot: usize, color: Color) -> bool {
        match self.slots.get_mut(slot) {
            Some(s) => {
                *s = Some(color);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The finished code, or `None` while any slot is unset
    #[must_use]
    pub fn to_code(&self) -> Option<Code> {
        let colors: Vec<Color> = self.slots.iter().copied().collect::<Option<_>>()?;
        Code::new(&colors).ok()
    }

    /// Overwrite every slot with the pawns of `code`
    pub fn fill_from(&mut self, code: &Code) {
        debug_assert_eq!(code.len(), self.slots.len());
        for (slot, &color) in self.slots.iter_mut().zip(code.colors()) {
            *slot = Some(color);
        }
    }

    pub fn clear(&mut self) {
        self.slots.fill(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_proposition_has_no_code() {
        let mut proposition = Proposition::new(4);
        assert!(proposition.to_code().is_none());

        proposition.set(0, Color::Red);
        proposition.set(1, Color::Red);
        proposition.set(2, Color::Blue);
        assert!(!proposition.is_complete());
        assert!(proposition.to_code().is_none());

        proposition.set(3, Color::Green);
        assert_eq!(proposition.to_code(), Some("RRBG".parse().unwrap()));
    }

    #[test]
    fn set_out_of_range_is_rejected() {
        let mut proposition = Proposition::new(4);
        assert!(!proposition.set(4, Color::Red));
        assert_eq!(proposition, Proposition::new(4));
    }

    #[test]
    fn fill_and_clear() {
        let mut proposition = Proposition::new(4);
        let code: Code = "YPOC".parse().unwrap();
        proposition.fill_from(&code);
        assert_eq!(proposition.get(1), Some(Color::Purple));
        assert_eq!(proposition.to_code(), Some(code));

        proposition.clear();
        assert!(proposition.slots().iter().all(Option::is_none));
    }
}
