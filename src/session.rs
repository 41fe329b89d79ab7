//! Game session: the mutable state a single front end drives.
//!
//! The session owns the board, turn, verdict and mode. Rules and search stay
//! in [`noughts_core`]; the session only decides which placements it accepts.

use crate::config::{Config, GameMode};
use derive_more::{Display, Error, From};
use noughts_core::{
    AnyGame, Board, Move, MoveError, Outcome, Player, Position, Verdict, WinLine, winning_line,
};
use tracing::{debug, info, instrument, warn};

/// Errors raised by session operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// The move itself was illegal.
    #[display("{}", _0)]
    Move(MoveError),

    /// A human tried to move while the computer is to play.
    #[display("Wait for the computer to move")]
    ComputerTurn,
}

/// Read-only view of a session, cheap to copy and send to a UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Current board.
    pub board: Board,
    /// Side to move, `None` once the game is over.
    pub to_move: Option<Player>,
    /// Detector outcome for the board.
    pub outcome: Outcome,
    /// Active mode.
    pub mode: GameMode,
    /// Side played by the computer in [`GameMode::Computer`].
    pub computer: Player,
    /// Completed line, if any.
    pub winning_line: Option<WinLine>,
    /// Most recent move.
    pub last_move: Option<Move>,
}

impl Snapshot {
    /// True when the computer is the side to move.
    pub fn computer_to_move(&self) -> bool {
        self.mode == GameMode::Computer && self.to_move == Some(self.computer)
    }

    /// True when a human placement would be accepted.
    pub fn accepts_human_input(&self) -> bool {
        self.to_move.is_some() && !self.computer_to_move()
    }

    /// One-line status: next player, computer thinking, winner or draw.
    pub fn status_line(&self) -> String {
        match (self.outcome.verdict(), self.to_move) {
            (Some(verdict), _) => verdict.to_string(),
            (None, _) if self.computer_to_move() => "Computer thinking...".to_string(),
            (None, Some(player)) => format!("Next player: {}", player),
            (None, None) => "Waiting...".to_string(),
        }
    }
}

/// A single game session.
#[derive(Debug, Clone)]
pub struct GameSession {
    game: AnyGame,
    mode: GameMode,
    computer: Player,
}

impl GameSession {
    /// Creates a session with an empty board and X to move.
    #[instrument]
    pub fn new(mode: GameMode, computer: Player) -> Self {
        info!("Creating game session");
        Self {
            game: AnyGame::default(),
            mode,
            computer,
        }
    }

    /// Creates a session from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(*config.mode(), *config.computer())
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Side to move, `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        self.game.to_move()
    }

    /// Outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        self.game.outcome()
    }

    /// Verdict, once the game is over.
    pub fn verdict(&self) -> Option<Verdict> {
        self.game.verdict()
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.game.is_over()
    }

    /// Moves played since the last reset.
    pub fn history(&self) -> &[Move] {
        self.game.history()
    }

    /// Active mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Side played by the computer in [`GameMode::Computer`].
    pub fn computer(&self) -> Player {
        self.computer
    }

    /// True when the computer is the side to move.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::Computer && self.to_move() == Some(self.computer)
    }

    /// Places the mark of the side to move at `cell`.
    ///
    /// No turn gating: the caller decides who chose the cell.
    #[instrument(skip(self), fields(to_move = ?self.to_move()))]
    pub fn place(&mut self, cell: usize) -> Result<Outcome, SessionError> {
        let position = Position::from_index(cell).ok_or(MoveError::OutOfBounds(cell))?;

        let game = std::mem::take(&mut self.game);
        match game.place(position) {
            Ok(next) => self.game = next,
            Err((unchanged, error)) => {
                self.game = unchanged;
                return Err(error.into());
            }
        }

        let outcome = self.outcome();
        match outcome {
            Outcome::NoneYet => debug!(cell, "Move applied"),
            _ => info!(cell, ?outcome, "Game over"),
        }
        Ok(outcome)
    }

    /// Places a human's choice, refusing it while the computer is to move.
    #[instrument(skip(self))]
    pub fn place_human(&mut self, cell: usize) -> Result<Outcome, SessionError> {
        if self.is_computer_turn() {
            warn!(cell, "Human input during computer turn");
            return Err(SessionError::ComputerTurn);
        }
        self.place(cell)
    }

    /// Clears the board; X moves next.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.game = AnyGame::default();
    }

    /// Switches mode and resets the game.
    #[instrument(skip(self))]
    pub fn toggle_mode(&mut self) -> GameMode {
        self.mode = self.mode.toggle();
        info!(mode = ?self.mode, "Mode toggled");
        self.reset();
        self.mode
    }

    /// Read-only view for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: *self.board(),
            to_move: self.to_move(),
            outcome: self.outcome(),
            mode: self.mode,
            computer: self.computer,
            winning_line: winning_line(self.board()),
            last_move: self.history().last().copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_status_lines() {
        let mut session = GameSession::new(GameMode::Computer, Player::O);
        assert_eq!(session.snapshot().status_line(), "Next player: X");
        assert!(session.snapshot().accepts_human_input());

        session.place(4).unwrap();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.status_line(), "Computer thinking...");
        assert!(!snapshot.accepts_human_input());
        assert_eq!(
            snapshot.last_move,
            Some(Move::new(Player::X, Position::Center))
        );
    }

    #[test]
    fn test_winning_snapshot() {
        let mut session = GameSession::new(GameMode::Pvp, Player::O);
        for cell in [0, 3, 1, 4, 2] {
            session.place(cell).unwrap();
        }
        let snapshot = session.snapshot();
        assert_eq!(snapshot.status_line(), "Winner: X");
        assert_eq!(snapshot.winning_line.map(|l| l.cells()), Some([0, 1, 2]));
        assert!(!snapshot.accepts_human_input());
    }

    #[test]
    fn test_errors_display_inner_reason() {
        let err = SessionError::from(MoveError::GameOver);
        assert_eq!(err.to_string(), "Game is already over");
    }
}
