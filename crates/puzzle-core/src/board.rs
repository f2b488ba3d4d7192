//! Mutable board position wrapping the shakmaty rules engine.

use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, File, Move, Position, Role, Square};

use crate::error::CoreError;
use crate::puzzle::PuzzleMove;

/// The one mutable position a session owns. External observers only ever
/// see it between fully-applied moves.
#[derive(Debug, Clone)]
pub struct BoardState {
    pos: Chess,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            pos: Chess::default(),
        }
    }
}

impl BoardState {
    pub fn from_fen(fen: &str) -> Result<Self, CoreError> {
        let parsed: Fen = fen
            .parse()
            .map_err(|_| CoreError::InvalidFen(fen.to_string()))?;
        let pos = parsed
            .into_position::<Chess>(CastlingMode::Standard)
            .map_err(|_| CoreError::InvalidFen(fen.to_string()))?;
        Ok(Self { pos })
    }

    pub fn fen(&self) -> String {
        Fen::from_position(&self.pos, EnPassantMode::Legal).to_string()
    }

    pub fn turn(&self) -> Color {
        self.pos.turn()
    }

    /// Whether any legal move goes from `from` to `to`.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        self.find_legal(from, to, Role::Queen).is_some()
    }

    /// Play a user-submitted move. Promotions are always normalized to a
    /// queen; solutions are authored assuming that choice.
    pub fn play_user(&mut self, from: Square, to: Square) -> Result<(), CoreError> {
        let mv = self
            .find_legal(from, to, Role::Queen)
            .ok_or(CoreError::IllegalMove { from, to })?;
        self.pos.play_unchecked(mv);
        Ok(())
    }

    /// Play a scripted solution move, honoring its authored promotion piece
    /// (queen when unspecified).
    pub fn play_scripted(&mut self, mv: &PuzzleMove) -> Result<(), CoreError> {
        let promo = mv.promotion.map_or(Role::Queen, |p| p.role());
        let found = self
            .find_legal(mv.from, mv.to, promo)
            .ok_or(CoreError::IllegalMove {
                from: mv.from,
                to: mv.to,
            })?;
        self.pos.play_unchecked(found);
        Ok(())
    }

    /// Find the legal move matching the given squares, keeping only the
    /// `promo` candidate when the move is a promotion.
    ///
    /// shakmaty encodes castling as king-takes-rook, while puzzle data uses
    /// the king's two-square destination (g- or c-file), so castle moves
    /// are matched on the king's actual target square.
    fn find_legal(&self, from: Square, to: Square, promo: Role) -> Option<Move> {
        self.pos.legal_moves().into_iter().find(|m| match *m {
            Move::Castle { king, rook } => {
                let to_file = if rook.file() > king.file() {
                    File::G
                } else {
                    File::C
                };
                king == from && to == Square::from_coords(to_file, king.rank())
            }
            _ => {
                m.from() == Some(from)
                    && m.to() == to
                    && m.promotion().map_or(true, |p| p == promo)
            }
        })
    }
}
