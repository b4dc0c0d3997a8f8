//! Per-player win tally
//!
//! The ledger maps each pseudo to a count. Entries keep their file order in
//! memory; ranking is only applied to the view returned for display.

mod file;

pub use file::LedgerError;

/// Default number of entries shown in a ranking
pub const DEFAULT_RANKING_LIMIT: usize = 10;

/// One player's tally
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LedgerEntry {
    pub pseudo: String,
    pub score: u32,
}

/// Pseudo to count mapping, unique by pseudo
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreLedger {
    entries: Vec<LedgerEntry>,
}

impl ScoreLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in storage order
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Count for `pseudo`, if present
    #[must_use]
    pub fn get(&self, pseudo: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.pseudo == pseudo)
            .map(|e| e.score)
    }

    /// Add one to `pseudo`, creating the entry at 1 if absent
    ///
    /// Returns the new count. A count already at `u32::MAX` stays there.
    pub fn record_outcome(&mut self, pseudo: &str) -> u32 {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.pseudo == pseudo) {
            entry.score = entry.score.saturating_add(1);
            return entry.score;
        }

        self.entries.push(LedgerEntry {
            pseudo: pseudo.to_string(),
            score: 1,
        });
        1
    }

    /// Highest counts first, at most `limit` entries
    ///
    /// Ties come back in no particular order. The ledger itself is left
    /// untouched.
    ///
    /// # Examples
    /// ```
    /// use mastermind::ledger::ScoreLedger;
    ///
    /// let mut ledger = ScoreLedger::new();
    /// ledger.record_outcome("alice");
    /// ledger.record_outcome("bob");
    /// ledger.record_outcome("bob");
    ///
    /// let top = ledger.ranked_entries(1);
    /// assert_eq!(top[0].pseudo, "bob");
    /// assert_eq!(ledger.len(), 2);
    /// ```
    #[must_use]
    pub fn ranked_entries(&self, limit: usize) -> Vec<&LedgerEntry> {
        let mut ranked: Vec<&LedgerEntry> = self.entries.iter().collect();
        ranked.sort_unstable_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(limit);
        ranked
    }

    pub(crate) fn from_entries(entries: Vec<LedgerEntry>) -> Self {
        Self { entries }
    }
}
