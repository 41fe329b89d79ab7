//! Exhaustive minimax search for the computer opponent.
//!
//! A 3x3 board has at most nine free cells, so the whole remaining game tree
//! is enumerated on every call: no pruning, no depth limit, no heuristic
//! evaluation. Scores are biased by depth so that among winning lines the
//! quickest is preferred, and among losing lines the slowest.

use super::rules::{Outcome, check_winner, detect};
use super::types::{Board, Player};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Score of an immediate win; a win `depth` plies deeper scores less.
const WIN_SCORE: i32 = 10;

/// Reasons the search refuses a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SearchError {
    /// Every cell is occupied.
    #[display("Board is full, no move to search")]
    BoardFull,

    /// Computer and opponent were given the same side.
    #[display("Computer and opponent are both {}", _0)]
    SameSide(#[error(not(source))] Player),

    /// A line is already complete.
    #[display("Game is already won by {}", _0)]
    AlreadyDecided(#[error(not(source))] Player),
}

/// The two sides of a search, fixed for its whole duration.
#[derive(Debug, Clone, Copy)]
struct Sides {
    computer: Player,
    opponent: Player,
}

impl Sides {
    fn to_move(self, maximizing: bool) -> Player {
        if maximizing { self.computer } else { self.opponent }
    }
}

/// Returns the minimax-optimal cell for `computer`.
///
/// Every empty cell is tried in ascending index order; the first cell with
/// the strictly greatest score wins ties, so the empty board yields cell 0.
///
/// The caller's board is never modified: hypothetical placements are made
/// on copies.
///
/// # Errors
///
/// - [`SearchError::SameSide`] if `computer == opponent`.
/// - [`SearchError::AlreadyDecided`] if a line is already complete.
/// - [`SearchError::BoardFull`] if no cell is empty.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board, computer: Player, opponent: Player) -> Result<usize, SearchError> {
    if computer == opponent {
        return Err(SearchError::SameSide(computer));
    }
    if let Some(winner) = check_winner(board) {
        return Err(SearchError::AlreadyDecided(winner));
    }

    let sides = Sides { computer, opponent };
    let mut best: Option<(usize, i32)> = None;

    for cell in board.empty_cells() {
        let next = board.with(cell, computer.mark());
        let score = evaluate(&next, 0, false, sides);
        debug!(cell, score, "Scored candidate");

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((cell, score));
        }
    }

    let (cell, score) = best.ok_or(SearchError::BoardFull)?;
    debug!(cell, score, "Selected move");
    Ok(cell)
}

/// Scores `board` from the computer's point of view.
///
/// `maximizing` tells whose turn it is on `board`: the computer's when
/// true, the opponent's otherwise.
fn evaluate(board: &Board, depth: i32, maximizing: bool, sides: Sides) -> i32 {
    match detect(board) {
        Outcome::Won(player) if player == sides.computer => return WIN_SCORE - depth,
        Outcome::Won(_) => return depth - WIN_SCORE,
        Outcome::Draw => return 0,
        Outcome::NoneYet => {}
    }

    let mark = sides.to_move(maximizing).mark();
    let scores = board
        .empty_cells()
        .map(|cell| evaluate(&board.with(cell, mark), depth + 1, !maximizing, sides));

    let best = if maximizing { scores.max() } else { scores.min() };

    // NoneYet guarantees at least one empty cell.
    best.unwrap_or(0)
}
