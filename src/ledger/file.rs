//! Score file loading and saving
//!
//! Format (text, line-oriented):
//! ```text
//! 3
//! alice 12
//! bob 4
//! carol 9
//! ```
//! The first line is the entry count N, then N `pseudo score` lines. A missing
//! file is an empty ledger. Saving rewrites the whole file.

use super::{LedgerEntry, ScoreLedger};
use crate::game::validate_pseudo;
use rustc_hash::FxHashSet;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, instrument};

/// Error type for score file I/O
///
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("failed to read score file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write score file {path}")]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line 1: invalid entry count '{0}'")]
    InvalidCount(String),
    #[error("line {line}: invalid entry '{content}' (expected 'pseudo score')")]
    InvalidEntry { line: usize, content: String },
    #[error("expected {expected} entries, found {found}")]
    MissingEntries { expected: usize, found: usize },
    #[error("line {line}: pseudo '{pseudo}' appears more than once")]
    DuplicatePseudo { line: usize, pseudo: String },
}

impl ScoreLedger {
    /// Load a ledger from `path`
    ///
    /// A missing file yields an empty ledger. Lines after the N-th entry are
    /// ignored.
    ///
    /// # Errors
    /// Returns `LedgerError` if the file cannot be read or any of the count
    /// line or the N entry lines fails to parse. No partial ledger is
    /// returned.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, LedgerError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("no score file yet, starting empty");
                return Ok(Self::new());
            }
            Err(source) => {
                return Err(LedgerError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let ledger = Self::parse(&content)?;
        info!(entries = ledger.len(), "score file loaded");
        Ok(ledger)
    }

    /// Parse score file content
    ///
    /// # Errors
    /// See [`ScoreLedger::load`].
    pub fn parse(content: &str) -> Result<Self, LedgerError> {
        let mut lines = content.lines();

        let count_line = lines.next().unwrap_or_default().trim();
        let expected: usize = count_line
            .parse()
            .map_err(|_| LedgerError::InvalidCount(count_line.to_string()))?;

        let mut entries = Vec::new();
        let mut seen: FxHashSet<String> = FxHashSet::default();

        for (i, line) in lines.take(expected).enumerate() {
            let line_number = i + 2;
            let entry = parse_entry(line).ok_or_else(|| LedgerError::InvalidEntry {
                line: line_number,
                content: line.to_string(),
            })?;

            if !seen.insert(entry.pseudo.clone()) {
                return Err(LedgerError::DuplicatePseudo {
                    line: line_number,
                    pseudo: entry.pseudo,
                });
            }
            entries.push(entry);
        }

        if entries.len() < expected {
            return Err(LedgerError::MissingEntries {
                expected,
                found: entries.len(),
            });
        }

        Ok(Self::from_entries(entries))
    }

    /// Render the file content for this ledger
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.len());
        for entry in self.entries() {
            let _ = writeln!(out, "{} {}", entry.pseudo, entry.score);
        }
        out
    }

    /// Write the whole ledger to `path`, replacing any previous content
    ///
    /// # Errors
    /// Returns `LedgerError::Save` if the file cannot be written.
    #[instrument(skip(self), fields(entries = self.len()))]
    pub fn save(&self, path: &Path) -> Result<(), LedgerError> {
        fs::write(path, self.render()).map_err(|source| LedgerError::Save {
            path: path.to_path_buf(),
            source,
        })?;
        info!("score file saved");
        Ok(())
    }
}

/// `pseudo score`, exactly two whitespace-separated tokens
///
/// The pseudo obeys the same rules as one typed into the settings.
fn parse_entry(line: &str) -> Option<LedgerEntry> {
    let mut tokens = line.split_whitespace();
    let pseudo = tokens.next()?;
    validate_pseudo(pseudo).ok()?;
    let score = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }

    Some(LedgerEntry {
        pseudo: pseudo.to_string(),
        score,
    })
}
