//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player};
use serde::{Deserialize, Serialize};

/// Three board indices forming a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([usize; 3]);

impl WinLine {
    /// Indices of the line, in ascending order.
    pub fn cells(self) -> [usize; 3] {
        self.0
    }

    /// Checks whether `index` lies on this line.
    pub fn contains(self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Returns the player owning all three cells, if any.
    pub fn owner(self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.0;
        let mark = board.get(a)?;
        if mark == board.get(b)? && mark == board.get(c)? {
            mark.player()
        } else {
            None
        }
    }
}

/// All winning lines: rows, then columns, then diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([0, 1, 2]),
    WinLine([3, 4, 5]),
    WinLine([6, 7, 8]),
    // Columns
    WinLine([0, 3, 6]),
    WinLine([1, 4, 7]),
    WinLine([2, 5, 8]),
    // Diagonals
    WinLine([0, 4, 8]),
    WinLine([2, 4, 6]),
];

/// Returns the first completed line in table order.
pub fn winning_line(board: &Board) -> Option<WinLine> {
    WIN_LINES.into_iter().find(|line| line.owner(board).is_some())
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    WIN_LINES.into_iter().find_map(|line| line.owner(board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX OO_ ___".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
        assert_eq!(winning_line(&board), Some(WIN_LINES[0]));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "XXO XO_ O__".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
        let line = winning_line(&board).unwrap();
        assert_eq!(line.cells(), [2, 4, 6]);
        assert!(line.contains(4));
        assert!(!line.contains(0));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::new().with(0, Mark::X).with(1, Mark::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_has_no_owner() {
        let board: Board = "XOX ___ ___".parse().unwrap();
        assert_eq!(WIN_LINES[0].owner(&board), None);
    }
}
