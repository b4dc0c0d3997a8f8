//! Score ranking command

use crate::ledger::{LedgerEntry, LedgerError, ScoreLedger};
use std::path::Path;

/// Load the score file at `path` and return its best `limit` entries
///
/// # Errors
///
/// Returns an error if the score file exists but cannot be read or parsed.
pub fn top_scores(path: &Path, limit: usize) -> Result<Vec<LedgerEntry>, LedgerError> {
    let ledger = ScoreLedger::load(path)?;
    Ok(ledger.ranked_entries(limit).into_iter().cloned().collect())
}
