//! Phase-specific typestate structs for tic-tac-toe.
//!
//! Each phase is its own type. A [`GameFinished`] always carries a
//! [`Verdict`]; a [`GameInProgress`] always has a player to move.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::rules::{Outcome, Verdict, detect};
use super::{Board, Player, Position};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Player,
}

impl GameInProgress {
    /// Creates a game on an empty board with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            to_move: Player::X,
        }
    }

    /// Makes a move, consuming self and transitioning to the next state.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] or [`MoveError::WrongPlayer`]
    /// when a precondition fails, and [`MoveError::InvariantViolation`] if a
    /// postcondition fails in a debug build.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        MoveContract::pre(&self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        game.board.set(action.position.to_index(), action.player.mark());
        game.history.push(action);

        match detect(&game.board) {
            Outcome::Won(winner) => {
                debug!(%winner, "Game won");
                return Ok(GameResult::Finished(game.finish(Verdict::Won(winner))));
            }
            Outcome::Draw => {
                debug!("Game drawn");
                return Ok(GameResult::Finished(game.finish(Verdict::Draw)));
            }
            Outcome::NoneYet => {}
        }

        game.to_move = game.to_move.opponent();

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        Ok(GameResult::InProgress(game))
    }

    /// Places the mark of the side to move at `position`.
    pub fn place(self, position: Position) -> Result<GameResult, MoveError> {
        let action = Move::new(self.to_move, position);
        self.make_move(action)
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns empty positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Replays moves from the initial state.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut game = GameInProgress::new();

        for (index, action) in moves.iter().enumerate() {
            match game.make_move(*action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) if index + 1 == moves.len() => {
                    return Ok(GameResult::Finished(g));
                }
                GameResult::Finished(_) => return Err(MoveError::GameOver),
            }
        }

        Ok(GameResult::InProgress(game))
    }

    fn finish(self, verdict: Verdict) -> GameFinished {
        GameFinished {
            board: self.board,
            history: self.history,
            verdict,
        }
    }
}

impl Default for GameInProgress {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - verdict determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    verdict: Verdict,
}

impl GameFinished {
    /// Returns the verdict.
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Restarts the game (consumes finished, returns a fresh game).
    #[instrument(skip(self))]
    pub fn restart(self) -> GameInProgress {
        GameInProgress::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}
