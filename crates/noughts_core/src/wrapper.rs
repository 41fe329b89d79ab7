//! Runtime wrapper over the typestate phases.

use super::action::MoveError;
use super::position::Position;
use super::rules::{Outcome, Verdict};
use super::typestate::{GameFinished, GameInProgress, GameResult};
use super::{Board, Move, Player};
use tracing::{instrument, warn};

/// A game in either phase.
///
/// Owners that must keep a game across moves without knowing its phase at
/// compile time (a session, an orchestrator) hold this enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyGame {
    /// Game in progress.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

impl From<GameInProgress> for AnyGame {
    fn from(game: GameInProgress) -> Self {
        AnyGame::InProgress(game)
    }
}

impl From<GameFinished> for AnyGame {
    fn from(game: GameFinished) -> Self {
        AnyGame::Finished(game)
    }
}

impl From<GameResult> for AnyGame {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress(g) => g.into(),
            GameResult::Finished(g) => g.into(),
        }
    }
}

impl Default for AnyGame {
    fn default() -> Self {
        GameInProgress::new().into()
    }
}

impl AnyGame {
    /// Returns the board for any game phase.
    pub fn board(&self) -> &Board {
        match self {
            AnyGame::InProgress(game) => game.board(),
            AnyGame::Finished(game) => game.board(),
        }
    }

    /// Returns the move history for any game phase.
    pub fn history(&self) -> &[Move] {
        match self {
            AnyGame::InProgress(game) => game.history(),
            AnyGame::Finished(game) => game.history(),
        }
    }

    /// Returns the player to move, if the game is in progress.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            AnyGame::InProgress(game) => Some(game.to_move()),
            AnyGame::Finished(_) => None,
        }
    }

    /// Returns the verdict, if the game is finished.
    pub fn verdict(&self) -> Option<Verdict> {
        match self {
            AnyGame::InProgress(_) => None,
            AnyGame::Finished(game) => Some(game.verdict()),
        }
    }

    /// Returns the outcome in detector terms.
    pub fn outcome(&self) -> Outcome {
        self.verdict().map_or(Outcome::NoneYet, Outcome::from)
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        matches!(self, AnyGame::Finished(_))
    }

    /// Places the mark of the side to move at `position`.
    ///
    /// On error the game is handed back unchanged alongside the reason, so
    /// the owner never loses its state to a rejected move.
    #[instrument(skip(self))]
    pub fn place(self, position: Position) -> Result<Self, (Self, MoveError)> {
        match self {
            AnyGame::InProgress(game) => {
                let snapshot = game.clone();
                game.place(position).map(Self::from).map_err(|e| {
                    warn!(error = %e, "Move rejected");
                    (AnyGame::InProgress(snapshot), e)
                })
            }
            finished @ AnyGame::Finished(_) => Err((finished, MoveError::GameOver)),
        }
    }
}
