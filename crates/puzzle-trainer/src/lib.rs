//! Puzzle-solving interaction engine.
//!
//! [`session::PuzzleSession`] drives the puzzle lifecycle: it auto-plays
//! the opponent move that created the tactical opportunity, validates the
//! solver's replies against the precomputed solution, sequences scripted
//! opponent responses, serves hints, and reports the incorrect-attempt and
//! hint-used signals consumed by the external spaced-repetition scheduler.
//!
//! Board rendering, puzzle sourcing, and the scheduling algorithm itself
//! live with the caller; the session only feeds them through the
//! [`session::SessionEvents`] callbacks.

pub mod attempts;
pub mod config;
pub mod hint;
pub mod sequence;
pub mod session;
pub mod validator;

pub use attempts::AttemptTracker;
pub use config::SessionConfig;
pub use session::{MoveOutcome, NullEvents, PuzzleSession, SessionError, SessionEvents, Status};
