//! The game state machine.
//!
//! [`Game`] owns the authoritative board, whose turn it is, the history of
//! executed moves and the clocks. It is the only thing that mutates them,
//! and it asks [`gambit_core::rules`] for every decision.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use gambit_core::rules::{self, Outcome};
use gambit_core::{Bitboard, Board, BoardError, Color, Move, PieceKind, Square};

use crate::clock::{ChessClock, ClockStatus, SystemClock, TimeSource};
use crate::config::GameConfig;
use crate::error::MoveError;
use crate::notation::san;

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for this side to move.
    AwaitingMove(Color),
    /// The side to move is mated.
    Checkmate { winner: Color },
    /// The side to move has no legal move and is not in check.
    Stalemate,
}

impl GameStatus {
    /// Return `true` for checkmate and stalemate.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::AwaitingMove(_))
    }
}

/// A game of chess between two local players.
#[derive(Debug, Clone)]
pub struct Game<T: TimeSource = SystemClock> {
    board: Board,
    initial: Board,
    current_turn: Color,
    history: Vec<Move>,
    clock: ChessClock,
    status: GameStatus,
    time: T,
    flag_reported: bool,
}

impl Game<SystemClock> {
    /// A new game from the standard starting position, timed by the system
    /// clock.
    pub fn new(config: GameConfig) -> Self {
        Self::with_time_source(config, SystemClock)
    }
}

impl Default for Game<SystemClock> {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl<T: TimeSource> Game<T> {
    /// A new game from the standard starting position, reading time from
    /// `time`.
    pub fn with_time_source(config: GameConfig, time: T) -> Self {
        Self::build(Board::starting_position(), Color::White, config, time)
    }

    /// A game starting from an arbitrary position with `to_move` on move.
    ///
    /// The board must pass [`Board::validate`]. No move is assumed to have
    /// been played before, so en passant is not available on the first move.
    pub fn from_position(
        board: Board,
        to_move: Color,
        config: GameConfig,
        time: T,
    ) -> Result<Self, BoardError> {
        board.validate()?;
        Ok(Self::build(board, to_move, config, time))
    }

    fn build(board: Board, to_move: Color, config: GameConfig, time: T) -> Self {
        let mut game = Self {
            board,
            initial: board,
            current_turn: to_move,
            history: Vec::new(),
            clock: ChessClock::new(config.time_per_side),
            status: GameStatus::AwaitingMove(to_move),
            time,
            flag_reported: false,
        };
        let now = game.time.now();
        game.refresh_status(now);
        game
    }

    /// Try to play the piece on `start` to `end`.
    ///
    /// `promotion` is only consulted when a pawn reaches its last rank, and
    /// is required then. On success the executed move is returned, the turn
    /// passes and the opponent's clock starts. On failure nothing changes,
    /// except that an illegal move still charges the mover for the time it
    /// spent.
    pub fn attempt_move(
        &mut self,
        start: Square,
        end: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Move, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        let piece = self
            .board
            .get(start)
            .ok_or(MoveError::EmptySquare { square: start })?;
        if piece.color() != self.current_turn {
            return Err(MoveError::NotYourTurn {
                square: start,
                turn: self.current_turn,
            });
        }

        let mv = rules::classify(&self.board, start, end, promotion)?;

        let now = self.time.now();
        self.clock.stop(now);

        if !rules::is_legal(&self.board, &mv, self.history.last()) {
            debug!(mv = %mv, "illegal move rejected");
            self.clock.start(self.current_turn, now);
            return Err(MoveError::Illegal { mv });
        }

        self.board.apply(&mv);
        self.history.push(mv);
        self.current_turn = self.current_turn.flip();
        debug!(mv = %mv, ply = self.history.len(), "move applied");

        self.refresh_status(now);
        Ok(mv)
    }

    /// Take back the last move, returning it. Does nothing on an empty
    /// history.
    ///
    /// Restores the board exactly, has-moved flags included, and gives the
    /// move back to the side that played it. Time already used stays used.
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;

        let now = self.time.now();
        self.clock.stop(now);

        self.board.revert(&mv);
        self.current_turn = self.current_turn.flip();
        debug!(mv = %mv, ply = self.history.len(), "move undone");

        self.refresh_status(now);
        Some(mv)
    }

    /// Charge the running clock up to now.
    ///
    /// A side running out of time is reported, not enforced: the game goes
    /// on and the clock stays at zero.
    pub fn advance_clock(&mut self) -> ClockStatus {
        let status = self.clock.advance(self.time.now());
        if let ClockStatus::Flagged(color) = status
            && !self.flag_reported
        {
            info!(%color, "flag fell");
            self.flag_reported = true;
        }
        status
    }

    /// Recompute the status for the side to move and start its clock, or
    /// leave the clocks stopped if the game is over.
    fn refresh_status(&mut self, now: Instant) {
        self.status = match rules::outcome(&self.board, self.current_turn, self.history.last()) {
            Outcome::Ongoing => GameStatus::AwaitingMove(self.current_turn),
            Outcome::Checkmate { winner } => {
                info!(%winner, "checkmate");
                GameStatus::Checkmate { winner }
            }
            Outcome::Stalemate => {
                info!("stalemate");
                GameStatus::Stalemate
            }
        };

        if !self.status.is_over() {
            self.clock.start(self.current_turn, now);
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_king_in_check(&self, color: Color) -> bool {
        rules::king_in_check(&self.board, color)
    }

    /// Squares the piece on `from` may move to right now. Empty unless the
    /// square holds a piece of the side to move and the game is still on.
    pub fn legal_destinations(&self, from: Square) -> Bitboard {
        if self.status.is_over() || self.board.color_on(from) != Some(self.current_turn) {
            return Bitboard::EMPTY;
        }
        rules::legal_destinations(&self.board, from, self.history.last())
    }

    /// Every legal move for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        rules::legal_moves(&self.board, self.current_turn, self.history.last())
    }

    /// Time left for `color` as of the last clock update.
    pub fn remaining(&self, color: Color) -> Duration {
        self.clock.remaining(color)
    }

    pub fn clock(&self) -> &ChessClock {
        &self.clock
    }

    /// Executed moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// The history in algebraic notation, one entry per move.
    ///
    /// Each entry's check or mate suffix reflects the position right after
    /// that move, found by replaying from the initial position.
    pub fn formatted_history(&self) -> Vec<String> {
        let mut board = self.initial;
        self.history
            .iter()
            .map(|mv| {
                let text = san(&board, mv);
                board.apply(mv);
                text
            })
            .collect()
    }
}
