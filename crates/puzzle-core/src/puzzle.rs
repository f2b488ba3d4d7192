/// Puzzle descriptor as authored by the extraction pipeline.
use serde::{Deserialize, Serialize};
use shakmaty::{Role, Square};

/// The side the solver plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    White,
    Black,
}

/// Promotion piece letters as they appear in puzzle JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromotionPiece {
    #[serde(rename = "q")]
    Queen,
    #[serde(rename = "r")]
    Rook,
    #[serde(rename = "b")]
    Bishop,
    #[serde(rename = "n")]
    Knight,
}

impl PromotionPiece {
    pub fn role(self) -> Role {
        match self {
            PromotionPiece::Queen => Role::Queen,
            PromotionPiece::Rook => Role::Rook,
            PromotionPiece::Bishop => Role::Bishop,
            PromotionPiece::Knight => Role::Knight,
        }
    }
}

/// A single move in a puzzle: coordinate squares plus an optional
/// authored promotion piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleMove {
    #[serde(with = "square_str")]
    pub from: Square,
    #[serde(with = "square_str")]
    pub to: Square,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PromotionPiece>,
}

/// A tactical puzzle mined from one of the player's games.
///
/// The solution is an ordered forced line: even indices are the solver's
/// moves, odd indices are scripted opponent replies. `opponent_move` is the
/// move auto-played before the solver's first input (the move that created
/// the tactical opportunity).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub id: String,
    pub player_color: PlayerColor,
    #[serde(rename = "startFEN")]
    pub start_fen: String,
    pub opponent_move: PuzzleMove,
    pub solution: Vec<PuzzleMove>,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default)]
    pub game_url: String,
}

impl Puzzle {
    /// Moves the solver must find (even indices: 0, 2, 4, ...).
    pub fn user_moves(&self) -> Vec<&PuzzleMove> {
        self.solution.iter().step_by(2).collect()
    }

    /// Scripted opponent replies (odd indices: 1, 3, 5, ...).
    pub fn opponent_replies(&self) -> Vec<&PuzzleMove> {
        self.solution.iter().skip(1).step_by(2).collect()
    }
}

/// Shape of an authored puzzle file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleSet {
    pub puzzles: Vec<Puzzle>,
}

/// Serialize squares as coordinate strings ("e2") to match the puzzle JSON.
mod square_str {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use shakmaty::Square;

    pub fn serialize<S: Serializer>(sq: &Square, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&sq.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Square, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| de::Error::custom(format!("invalid square: {s}")))
    }
}
