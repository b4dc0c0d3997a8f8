//! Core domain types for Mastermind
//!
//! Colors, codes, scores and feedback. Everything here is a plain value type
//! with no I/O.

mod code;
mod color;
mod feedback;
mod proposition;
mod score;

pub use code::{Code, CodeParseError, MAX_CODE_LEN};
pub use color::Color;
pub use feedback::{Feedback, FeedbackPeg, next_marker};
pub use proposition::Proposition;
pub use score::Score;
