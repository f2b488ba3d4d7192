//! Application of scripted opponent moves.

use puzzle_core::{BoardState, PuzzleMove};
use tracing::error;

/// Apply a scripted move unconditionally. Solution lines are trusted
/// precomputed data, assumed legal at authoring time; a failure here means
/// the puzzle data is corrupt, not user error. Returns `false` on failure
/// so the session can degrade instead of panicking; the board is left in
/// its last valid position.
pub fn play_scripted(board: &mut BoardState, puzzle_id: &str, mv: &PuzzleMove) -> bool {
    match board.play_scripted(mv) {
        Ok(()) => true,
        Err(err) => {
            error!(
                puzzle = puzzle_id,
                from = %mv.from,
                to = %mv.to,
                %err,
                "scripted move is not legal in the current position; disabling puzzle"
            );
            false
        }
    }
}
