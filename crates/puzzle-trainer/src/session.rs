//! The puzzle session state machine — the sole mutation surface.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use puzzle_core::{BoardState, CoreError, Puzzle};
use shakmaty::Square;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::attempts::AttemptTracker;
use crate::config::SessionConfig;
use crate::{hint, sequence, validator};

/// Lifecycle states of a puzzle attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No puzzle started yet.
    Initial,
    /// Waiting for the scheduled opening move to land on the board.
    OpponentIntroMove,
    /// The solver's turn.
    AwaitingUserMove,
    /// A submission is being validated and sequenced.
    Resolving,
    /// Terminal: the full solution line was found.
    Solved,
}

/// Synchronous result of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The session is not accepting input (wrong state, solved, or
    /// degraded). Not an error; nothing changed.
    Rejected,
    /// The rules engine refused the move. Nothing changed, counters
    /// included.
    Illegal,
    /// Legal but not the expected move: counted, board reverted to the
    /// post-opening position.
    Incorrect,
    /// The expected move; the scripted reply has been applied.
    Correct,
    /// The expected move, and it completed the solution.
    Solved,
}

/// Callback surface to the caller. `on_solve` carries the complete review
/// signal for the external spaced-repetition scheduler.
pub trait SessionEvents {
    /// Fired the first time the current attempt reaches [`Status::Solved`].
    fn on_solve(&mut self, incorrect_attempts: u32, hint_used: bool);

    /// Fired on every incorrect-but-legal submission.
    fn on_fail(&mut self);
}

/// Events sink for callers that only poll the accessors.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEvents;

impl SessionEvents for NullEvents {
    fn on_solve(&mut self, _incorrect_attempts: u32, _hint_used: bool) {}
    fn on_fail(&mut self) {}
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("no puzzle has been started")]
    NoPuzzle,

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// State shared with the deferred opening-move task.
struct Shared {
    board: BoardState,
    /// Snapshot taken right after the opening move: the fixed revert point
    /// for incorrect attempts.
    post_intro: Option<BoardState>,
    /// Index into the solution; even = next expected solver move.
    cursor: usize,
    status: Status,
    attempts: AttemptTracker,
    /// Set when scripted data turned out to be corrupt; the session then
    /// rejects all further input instead of crashing.
    degraded: bool,
    /// Bumped by every start()/reset() so a stale intro task can tell it
    /// has been superseded.
    generation: u64,
}

impl Default for Shared {
    fn default() -> Self {
        Self {
            board: BoardState::default(),
            post_intro: None,
            cursor: 0,
            status: Status::Initial,
            attempts: AttemptTracker::default(),
            degraded: false,
            generation: 0,
        }
    }
}

enum Fired {
    Solved { incorrect: u32, hint_used: bool },
    Failed,
}

/// Drives one puzzle through its lifecycle: schedules the opening opponent
/// move, validates solver submissions against the solution line, sequences
/// scripted replies, serves hints, and tracks attempt counters.
///
/// All state transitions run on the caller's thread; the only asynchronous
/// element is the opening-move task, so `start`/`reset` must be called from
/// within a tokio runtime. Starting or resetting cancels any opening move
/// still pending from the previous attempt.
pub struct PuzzleSession<E: SessionEvents> {
    puzzle: Option<Arc<Puzzle>>,
    shared: Arc<Mutex<Shared>>,
    events: E,
    config: SessionConfig,
    intro_task: Option<JoinHandle<()>>,
}

impl<E: SessionEvents> PuzzleSession<E> {
    pub fn new(events: E, config: SessionConfig) -> Self {
        Self {
            puzzle: None,
            shared: Arc::new(Mutex::new(Shared::default())),
            events,
            config,
            intro_task: None,
        }
    }

    /// Load a puzzle and begin an attempt: counters zeroed, board set to
    /// the starting position, opening move scheduled after the configured
    /// delay.
    pub fn start(&mut self, puzzle: Puzzle) -> Result<(), SessionError> {
        let puzzle = Arc::new(puzzle);
        self.begin(Arc::clone(&puzzle))?;
        self.puzzle = Some(puzzle);
        Ok(())
    }

    /// Restart the current puzzle from scratch, exactly as `start` would.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        let puzzle = self.puzzle.clone().ok_or(SessionError::NoPuzzle)?;
        self.begin(puzzle)
    }

    fn begin(&mut self, puzzle: Arc<Puzzle>) -> Result<(), SessionError> {
        let board = BoardState::from_fen(&puzzle.start_fen)?;

        // Defuse any opening move still pending from the previous attempt
        // before the new state becomes visible.
        if let Some(task) = self.intro_task.take() {
            task.abort();
        }

        let generation = {
            let mut shared = self.lock();
            shared.generation += 1;
            shared.board = board;
            shared.post_intro = None;
            shared.cursor = 0;
            shared.status = Status::OpponentIntroMove;
            shared.attempts.reset();
            shared.degraded = false;
            shared.generation
        };

        let shared = Arc::clone(&self.shared);
        let delay = self.config.intro_delay;
        self.intro_task = Some(tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            play_intro(&shared, &puzzle, generation);
        }));
        Ok(())
    }

    /// Wait for the scheduled opening move to land (or for its task to be
    /// cancelled by a newer attempt). Lets tests and non-interactive
    /// callers proceed without polling.
    pub async fn await_intro(&mut self) {
        if let Some(task) = self.intro_task.take() {
            let _ = task.await;
        }
    }

    /// Submit a solver move. A no-op unless the session is awaiting input;
    /// see [`MoveOutcome`] for the possible results.
    pub fn submit_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        let Some(puzzle) = self.puzzle.clone() else {
            return MoveOutcome::Rejected;
        };
        let (outcome, fired) = {
            let mut shared = self.lock();
            Self::process_submission(&mut shared, &puzzle, from, to)
        };
        // Callbacks run outside the lock, after the transition is complete,
        // so an observer may freely query the session.
        match fired {
            Some(Fired::Solved {
                incorrect,
                hint_used,
            }) => self.events.on_solve(incorrect, hint_used),
            Some(Fired::Failed) => self.events.on_fail(),
            None => {}
        }
        outcome
    }

    fn process_submission(
        shared: &mut Shared,
        puzzle: &Puzzle,
        from: Square,
        to: Square,
    ) -> (MoveOutcome, Option<Fired>) {
        if shared.degraded || shared.status != Status::AwaitingUserMove {
            return (MoveOutcome::Rejected, None);
        }
        shared.status = Status::Resolving;

        if !shared.board.is_legal(from, to) {
            shared.status = Status::AwaitingUserMove;
            return (MoveOutcome::Illegal, None);
        }

        let Some(expected) = puzzle.solution.get(shared.cursor) else {
            // An empty solution line has nothing left to find.
            shared.status = Status::AwaitingUserMove;
            return (MoveOutcome::Rejected, None);
        };

        if !validator::matches(from, to, expected) {
            // Legal but wrong: count it and put the board back to the fixed
            // post-opening position, regardless of prior progress.
            shared.attempts.record_incorrect();
            if let Some(post_intro) = shared.post_intro.clone() {
                shared.board = post_intro;
            }
            shared.status = Status::AwaitingUserMove;
            return (MoveOutcome::Incorrect, Some(Fired::Failed));
        }

        if let Err(err) = shared.board.play_user(from, to) {
            // Legality was checked above; getting here means the board and
            // the expected move disagree in a way the solver cannot fix.
            warn!(puzzle = %puzzle.id, %err, "legal move failed to apply");
            shared.status = Status::AwaitingUserMove;
            return (MoveOutcome::Illegal, None);
        }

        if shared.cursor + 2 >= puzzle.solution.len() {
            shared.status = Status::Solved;
            debug!(
                puzzle = %puzzle.id,
                incorrect = shared.attempts.incorrect(),
                hint_used = shared.attempts.hint_used(),
                "puzzle solved"
            );
            return (
                MoveOutcome::Solved,
                Some(Fired::Solved {
                    incorrect: shared.attempts.incorrect(),
                    hint_used: shared.attempts.hint_used(),
                }),
            );
        }

        let reply = &puzzle.solution[shared.cursor + 1];
        if sequence::play_scripted(&mut shared.board, &puzzle.id, reply) {
            shared.cursor += 2;
        } else {
            // Corrupt data: keep the solver's applied move on the board but
            // stop accepting input for this puzzle.
            shared.degraded = true;
        }
        shared.status = Status::AwaitingUserMove;
        (MoveOutcome::Correct, None)
    }

    /// Reveal the origin square of the next expected move and mark the
    /// attempt as hint-assisted. Never touches position, cursor, or status;
    /// returns `None` past the end of the solution or once degraded.
    pub fn request_hint(&mut self) -> Option<Square> {
        let puzzle = self.puzzle.clone()?;
        let mut shared = self.lock();
        if shared.degraded {
            return None;
        }
        shared.attempts.use_hint();
        hint::origin(&puzzle.solution, shared.cursor)
    }

    pub fn status(&self) -> Status {
        self.lock().status
    }

    pub fn cursor(&self) -> usize {
        self.lock().cursor
    }

    pub fn incorrect_attempts(&self) -> u32 {
        self.lock().attempts.incorrect()
    }

    pub fn hint_used(&self) -> bool {
        self.lock().attempts.hint_used()
    }

    pub fn degraded(&self) -> bool {
        self.lock().degraded
    }

    /// FEN of the current position. Only ever a fully-applied-move state.
    pub fn fen(&self) -> String {
        self.lock().board.fen()
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        // A poisoned lock can only mean the intro task panicked between two
        // fully-applied states; the state itself is still coherent.
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Body of the deferred opening-move task.
fn play_intro(shared: &Mutex<Shared>, puzzle: &Puzzle, generation: u64) {
    let mut shared = shared.lock().unwrap_or_else(PoisonError::into_inner);
    if shared.generation != generation || shared.status != Status::OpponentIntroMove {
        // A newer start() or reset() owns the session now.
        return;
    }
    if sequence::play_scripted(&mut shared.board, &puzzle.id, &puzzle.opponent_move) {
        shared.post_intro = Some(shared.board.clone());
        shared.status = Status::AwaitingUserMove;
        debug!(puzzle = %puzzle.id, "opening move applied, awaiting solver");
    } else {
        shared.degraded = true;
    }
}
