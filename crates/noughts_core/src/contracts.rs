//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions,
//! in the Hoare style `{P} action {Q}`. Preconditions always run;
//! postconditions run in debug builds.

use super::action::{Move, MoveError};
use super::typestate::GameInProgress;
use super::{Board, Mark};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Composite precondition: the square is empty and it is the player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(action: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if !game.board().is_empty(action.position.to_index()) {
            return Err(MoveError::SquareOccupied(action.position));
        }
        if action.player != game.to_move() {
            return Err(MoveError::WrongPlayer(action.player));
        }
        Ok(())
    }
}

/// Invariant: X and O counts differ by at most one, with X never behind.
pub struct BoardBalanced;

impl Invariant<Board> for BoardBalanced {
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Board balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X and O counts differ by at most one, X first"
    }
}

/// Invariant: every history entry is on the board and every mark has a
/// history entry.
pub struct HistoryMatchesBoard;

impl Invariant<GameInProgress> for HistoryMatchesBoard {
    fn holds(game: &GameInProgress) -> bool {
        let board = game.board();
        let filled = Board::CELLS - board.empty_cells().count();
        let history = game.history();

        let valid = filled == history.len()
            && history
                .iter()
                .all(|m| board.get(m.position.to_index()) == Some(m.player.mark()));
        if !valid {
            warn!(filled, history_len = history.len(), "History consistency violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Move history matches the marks on the board"
    }
}

/// Contract for move actions.
///
/// Preconditions: square empty, player's turn.
/// Postconditions: board balanced, history consistent.
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(_before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        let mut violations = Vec::new();
        if !BoardBalanced::holds(after.board()) {
            violations.push(BoardBalanced::description());
        }
        if !HistoryMatchesBoard::holds(after) {
            violations.push(HistoryMatchesBoard::description());
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                violations.join("; ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameResult, Player, Position};

    #[test]
    fn test_precondition_empty_square() {
        let game = GameInProgress::new();
        let action = Move::new(Player::X, Position::Center);
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let game = GameInProgress::new();
        let action = Move::new(Player::X, Position::Center);

        let Ok(GameResult::InProgress(game)) = game.make_move(action) else {
            panic!("Expected in-progress game");
        };
        let action = Move::new(Player::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = GameInProgress::new();
        let action = Move::new(Player::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(MoveError::WrongPlayer(Player::O))
        );
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let game = GameInProgress::new();
        let action = Move::new(Player::X, Position::Center);

        let Ok(GameResult::InProgress(mut after)) = game.clone().make_move(action) else {
            panic!("Expected in-progress game");
        };
        assert!(MoveContract::post(&game, &after).is_ok());

        after.board.set(0, Mark::O);
        after.board.set(1, Mark::O);
        assert!(matches!(
            MoveContract::post(&game, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_board_balance() {
        assert!(BoardBalanced::holds(&Board::new()));
        assert!(BoardBalanced::holds(&"X________".parse().unwrap()));
        assert!(BoardBalanced::holds(&"XO_______".parse().unwrap()));
        assert!(!BoardBalanced::holds(&"O________".parse().unwrap()));
        assert!(!BoardBalanced::holds(&"XX_______".parse().unwrap()));
    }
}
