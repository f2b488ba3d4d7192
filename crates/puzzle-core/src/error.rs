//! Core error types

use shakmaty::Square;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("no legal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },
}
