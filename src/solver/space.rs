//! Enumeration of every possible code
//!
//! The code space holds all `K^n` codes over the palette in mixed-radix order
//! (slot 0 varies fastest). It is generated eagerly and never changes, so it
//! is shared behind an `Arc` between everything that scans it.

use crate::core::{Code, Color, MAX_CODE_LEN};
use rayon::prelude::*;
use std::ops::Index;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument};

/// Every code of a given length, in index order
#[derive(Debug, Clone)]
pub struct CodeSpace {
    nb_pawns: usize,
    codes: Arc<[Code]>,
}

impl CodeSpace {
    /// Generate the full space for `nb_pawns` slots
    ///
    /// This allocates `7^nb_pawns` codes up front: 2,401 for 4 pawns and
    /// 5,764,801 for 8. Generation is parallel over indices; the order is
    /// the index order regardless of scheduling.
    ///
    /// # Examples
    /// ```
    /// use mastermind::solver::CodeSpace;
    ///
    /// let space = CodeSpace::generate(4);
    /// assert_eq!(space.len(), 2401);
    /// ```
    ///
    /// # Panics
    /// Panics if `nb_pawns` is zero or above [`MAX_CODE_LEN`].
    #[instrument]
    #[must_use]
    pub fn generate(nb_pawns: usize) -> Self {
        assert!(
            (1..=MAX_CODE_LEN).contains(&nb_pawns),
            "code space needs between 1 and {MAX_CODE_LEN} pawns"
        );

        let start = Instant::now();
        let size = Self::size_for(nb_pawns);

        let codes: Vec<Code> = (0..size)
            .into_par_iter()
            .map(|index| Code::from_index(index, nb_pawns))
            .collect();

        info!(
            nb_pawns,
            size,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "code space generated"
        );

        Self {
            nb_pawns,
            codes: codes.into(),
        }
    }

    /// Number of codes for `nb_pawns` slots (`7^nb_pawns`)
    #[must_use]
    pub fn size_for(nb_pawns: usize) -> usize {
        Color::COUNT.pow(nb_pawns as u32)
    }

    #[must_use]
    pub const fn nb_pawns(&self) -> usize {
        self.nb_pawns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Code> {
        self.codes.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Code] {
        &self.codes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Code> {
        self.codes.iter()
    }
}

impl Index<usize> for CodeSpace {
    type Output = Code;

    fn index(&self, index: usize) -> &Self::Output {
        &self.codes[index]
    }
}

impl<'a> IntoIterator for &'a CodeSpace {
    type Item = &'a Code;
    type IntoIter = std::slice::Iter<'a, Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
