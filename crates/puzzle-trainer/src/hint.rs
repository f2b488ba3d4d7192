//! Hints for the next expected solver move.

use puzzle_core::PuzzleMove;
use shakmaty::Square;

/// Origin square of `solution[cursor]`, or `None` once the cursor has run
/// past the end. The destination square is never revealed, so a hinted
/// puzzle still takes some work.
pub fn origin(solution: &[PuzzleMove], cursor: usize) -> Option<Square> {
    solution.get(cursor).map(|mv| mv.from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(from: Square, to: Square) -> PuzzleMove {
        PuzzleMove {
            from,
            to,
            promotion: None,
        }
    }

    #[test]
    fn test_origin_of_cursor_move() {
        let solution = [mv(Square::G1, Square::F3), mv(Square::B8, Square::C6)];
        assert_eq!(origin(&solution, 0), Some(Square::G1));
        assert_eq!(origin(&solution, 1), Some(Square::B8));
    }

    #[test]
    fn test_none_past_the_end() {
        let solution = [mv(Square::G1, Square::F3)];
        assert_eq!(origin(&solution, 1), None);
        assert_eq!(origin(&solution, 42), None);
        assert_eq!(origin(&[], 0), None);
    }
}
