//! Session settings chosen before play starts

use crate::core::MAX_CODE_LEN;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MIN_PAWNS: usize = 4;
pub const MAX_PAWNS: usize = MAX_CODE_LEN;
pub const DEFAULT_PAWNS: usize = 4;
pub const DEFAULT_ATTEMPTS: usize = 10;
pub const MAX_ATTEMPTS: usize = 20;
/// Longest pseudonym accepted, in bytes
pub const PSEUDO_MAX_LEN: usize = 50;

/// Which side the human plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    /// Human breaks a machine-generated secret
    #[default]
    Guesser,
    /// Human sets the secret, the solver breaks it
    Proposer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guesser => f.write_str("guesser"),
            Self::Proposer => f.write_str("proposer"),
        }
    }
}

impl FromStr for Role {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "guesser" | "g" => Ok(Self::Guesser),
            "proposer" | "p" => Ok(Self::Proposer),
            _ => Err(SettingsError::UnknownRole(s.to_string())),
        }
    }
}

/// When a session adds to the player's ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TallyCadence {
    /// After every scored round, whatever its result
    #[default]
    EveryRound,
    /// Once, when the game ends in the human's favor
    HumanWin,
}

impl FromStr for TallyCadence {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "every-round" => Ok(Self::EveryRound),
            "human-win" => Ok(Self::HumanWin),
            _ => Err(SettingsError::UnknownCadence(s.to_string())),
        }
    }
}

/// Error type for settings validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error(
        "number of pawns must be between {min} and {max}, got {0}",
        min = MIN_PAWNS,
        max = MAX_PAWNS
    )]
    PawnCount(usize),
    #[error("number of attempts must be between 1 and {max}, got {0}", max = MAX_ATTEMPTS)]
    Attempts(usize),
    #[error("pseudo must not be empty")]
    EmptyPseudo,
    #[error("pseudo must be at most {max} characters, got {0}", max = PSEUDO_MAX_LEN)]
    PseudoTooLong(usize),
    #[error("pseudo must not contain whitespace")]
    PseudoWhitespace,
    #[error("unknown role '{0}' (expected guesser or proposer)")]
    UnknownRole(String),
    #[error("unknown tally cadence '{0}' (expected every-round or human-win)")]
    UnknownCadence(String),
}

/// Everything fixed before a session starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    nb_pawns: usize,
    attempts: usize,
    pseudo: String,
    role: Role,
    cadence: TallyCadence,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            nb_pawns: DEFAULT_PAWNS,
            attempts: DEFAULT_ATTEMPTS,
            pseudo: String::new(),
            role: Role::default(),
            cadence: TallyCadence::default(),
        }
    }
}

impl Settings {
    #[must_use]
    pub const fn nb_pawns(&self) -> usize {
        self.nb_pawns
    }

    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    #[must_use]
    pub fn pseudo(&self) -> &str {
        &self.pseudo
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub const fn cadence(&self) -> TallyCadence {
        self.cadence
    }

    /// # Errors
    /// Returns `SettingsError::PawnCount` outside `[MIN_PAWNS, MAX_PAWNS]`.
    pub fn set_pawn_count(&mut self, nb_pawns: usize) -> Result<(), SettingsError> {
        if !(MIN_PAWNS..=MAX_PAWNS).contains(&nb_pawns) {
            return Err(SettingsError::PawnCount(nb_pawns));
        }
        self.nb_pawns = nb_pawns;
        Ok(())
    }

    /// # Errors
    /// Returns `SettingsError::Attempts` outside `[1, MAX_ATTEMPTS]`.
    pub fn set_attempts(&mut self, attempts: usize) -> Result<(), SettingsError> {
        if !(1..=MAX_ATTEMPTS).contains(&attempts) {
            return Err(SettingsError::Attempts(attempts));
        }
        self.attempts = attempts;
        Ok(())
    }

    /// Set the pseudo recorded in the score ledger
    ///
    /// The score file separates fields with whitespace, so a pseudo must be
    /// a single non-empty token of at most [`PSEUDO_MAX_LEN`] bytes.
    ///
    /// # Errors
    /// Returns the matching `SettingsError` when the pseudo is rejected; the
    /// previous pseudo is kept.
    pub fn set_pseudo(&mut self, pseudo: &str) -> Result<(), SettingsError> {
        validate_pseudo(pseudo)?;
        self.pseudo = pseudo.to_string();
        Ok(())
    }

    pub fn choose_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn set_cadence(&mut self, cadence: TallyCadence) {
        self.cadence = cadence;
    }
}

/// Check that `pseudo` can be stored as one score file token
///
/// # Errors
/// Returns the first rule the pseudo breaks.
pub fn validate_pseudo(pseudo: &str) -> Result<(), SettingsError> {
    if pseudo.is_empty() {
        return Err(SettingsError::EmptyPseudo);
    }
    if pseudo.len() > PSEUDO_MAX_LEN {
        return Err(SettingsError::PseudoTooLong(pseudo.len()));
    }
    if pseudo.chars().any(char::is_whitespace) {
        return Err(SettingsError::PseudoWhitespace);
    }
    Ok(())
}
