//! Puzzle data model and the rules-engine seam.
//!
//! The trainer crate drives everything through [`board::BoardState`] so the
//! session logic never touches `shakmaty` positions directly.

pub mod board;
pub mod error;
pub mod puzzle;

pub use board::BoardState;
pub use error::CoreError;
pub use puzzle::{PlayerColor, PromotionPiece, Puzzle, PuzzleMove, PuzzleSet};
