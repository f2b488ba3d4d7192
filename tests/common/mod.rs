//! Shared fixtures: real tactical lines expressed as authored puzzles.

use std::cell::RefCell;
use std::rc::Rc;

use puzzle_core::{BoardState, PlayerColor, Puzzle, PuzzleMove};
use puzzle_trainer::SessionEvents;
use shakmaty::Square;

pub fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

pub fn mv(from: &str, to: &str) -> PuzzleMove {
    PuzzleMove {
        from: sq(from),
        to: sq(to),
        promotion: None,
    }
}

pub fn puzzle(
    id: &str,
    color: PlayerColor,
    start_fen: &str,
    opening: (&str, &str),
    solution: &[(&str, &str)],
) -> Puzzle {
    Puzzle {
        id: id.into(),
        player_color: color,
        start_fen: start_fen.into(),
        opponent_move: mv(opening.0, opening.1),
        solution: solution.iter().map(|&(f, t)| mv(f, t)).collect(),
        rating: "1500".into(),
        themes: vec![],
        game_url: String::new(),
    }
}

/// White to find the Italian development line after 1. e4 e5: the solver
/// plays Nf3 and Bc4 around the scripted ...Nc6. Bc4 is also playable
/// directly after 1...e5, which matters for revert-then-continue tests.
pub fn italian_puzzle() -> Puzzle {
    puzzle(
        "italian",
        PlayerColor::White,
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1",
        ("e7", "e5"),
        &[("g1", "f3"), ("b8", "c6"), ("f1", "c4")],
    )
}

/// Black to deliver the fool's mate after 1. f3 e5 2. g4 Qh4#.
pub fn fools_mate_puzzle() -> Puzzle {
    puzzle(
        "fools-mate",
        PlayerColor::Black,
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        ("f2", "f3"),
        &[("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
    )
}

/// Single solver move: back-rank mate with Ra8 after black weakens with h6.
#[allow(dead_code)]
pub fn back_rank_puzzle() -> Puzzle {
    puzzle(
        "back-rank",
        PlayerColor::White,
        "6k1/5ppp/8/8/8/8/5PPP/R5K1 b - - 0 1",
        ("h7", "h6"),
        &[("a1", "a8")],
    )
}

/// Italian line with a corrupt scripted reply (a1a5 is blocked).
#[allow(dead_code)]
pub fn corrupt_reply_puzzle() -> Puzzle {
    puzzle(
        "corrupt-reply",
        PlayerColor::White,
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1",
        ("e7", "e5"),
        &[("g1", "f3"), ("a1", "a5"), ("f1", "c4")],
    )
}

/// The opening move itself is corrupt (a1a5 is blocked in the start
/// position).
#[allow(dead_code)]
pub fn corrupt_opening_puzzle() -> Puzzle {
    puzzle(
        "corrupt-opening",
        PlayerColor::Black,
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        ("a1", "a5"),
        &[("e7", "e5")],
    )
}

/// The position right after the opening move: the fixed revert point.
pub fn post_intro_fen(p: &Puzzle) -> String {
    let mut board = BoardState::from_fen(&p.start_fen).unwrap();
    board.play_scripted(&p.opponent_move).unwrap();
    board.fen()
}

#[derive(Default)]
pub struct Log {
    pub solves: Vec<(u32, bool)>,
    pub fails: u32,
}

/// Records every callback so tests can assert ordering and idempotence.
#[derive(Default, Clone)]
pub struct Recorder(pub Rc<RefCell<Log>>);

impl SessionEvents for Recorder {
    fn on_solve(&mut self, incorrect_attempts: u32, hint_used: bool) {
        self.0.borrow_mut().solves.push((incorrect_attempts, hint_used));
    }

    fn on_fail(&mut self) {
        self.0.borrow_mut().fails += 1;
    }
}
