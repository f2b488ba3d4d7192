//! Comparison of a submitted move against the expected solution move.

use puzzle_core::PuzzleMove;
use shakmaty::Square;

/// A submitted move matches the expected solution move iff origin and
/// destination agree. The promotion piece is deliberately ignored:
/// promotions are normalized to the queen on both sides, so solutions
/// never depend on the promotion choice.
pub fn matches(from: Square, to: Square, expected: &PuzzleMove) -> bool {
    from == expected.from && to == expected.to
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzle_core::PromotionPiece;

    fn expected(from: Square, to: Square, promotion: Option<PromotionPiece>) -> PuzzleMove {
        PuzzleMove {
            from,
            to,
            promotion,
        }
    }

    #[test]
    fn test_matches_on_squares() {
        let exp = expected(Square::E2, Square::E4, None);
        assert!(matches(Square::E2, Square::E4, &exp));
        assert!(!matches(Square::E2, Square::E3, &exp));
        assert!(!matches(Square::D2, Square::E4, &exp));
    }

    #[test]
    fn test_promotion_ignored() {
        let exp = expected(Square::A7, Square::A8, Some(PromotionPiece::Knight));
        assert!(matches(Square::A7, Square::A8, &exp));
    }
}
