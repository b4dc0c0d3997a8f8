//! Game rules: settings, round history and the session state machine

mod history;
mod session;
mod settings;

pub use history::{History, HistoryError, Round};
pub use session::{GameSession, Outcome, Phase, SessionError};
pub use settings::{
    DEFAULT_ATTEMPTS, DEFAULT_PAWNS, MAX_ATTEMPTS, MAX_PAWNS, MIN_PAWNS, PSEUDO_MAX_LEN, Role,
    Settings, SettingsError, TallyCadence, validate_pseudo,
};
