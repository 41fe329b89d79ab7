//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board storage
//! so the search and the typestate game consult the same oracle.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, WinLine, check_winner, winning_line};

use super::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Result of inspecting a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and at least one cell is free.
    NoneYet,
    /// The player completed a line.
    Won(Player),
    /// Every cell is filled and no line is completed.
    Draw,
}

impl Outcome {
    /// Returns the final verdict, or `None` while the game is open.
    pub fn verdict(self) -> Option<Verdict> {
        match self {
            Outcome::NoneYet => None,
            Outcome::Won(player) => Some(Verdict::Won(player)),
            Outcome::Draw => Some(Verdict::Draw),
        }
    }

    /// Returns true for `Won` and `Draw`.
    pub fn is_over(self) -> bool {
        self != Outcome::NoneYet
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Player won the game.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl Verdict {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Verdict::Won(player) => Some(player),
            Verdict::Draw => None,
        }
    }
}

impl From<Verdict> for Outcome {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Won(player) => Outcome::Won(player),
            Verdict::Draw => Outcome::Draw,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Won(player) => write!(f, "Winner: {}", player),
            Verdict::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// Determines whether a mark has won or the game is drawn.
///
/// Lines are checked in [`WIN_LINES`] order and the first completed line
/// decides the winner. Not instrumented: the search calls this at every
/// node.
pub fn detect(board: &Board) -> Outcome {
    if let Some(player) = check_winner(board) {
        return Outcome::Won(player);
    }

    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::NoneYet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(notation: &str) -> Board {
        notation.parse().unwrap()
    }

    #[test]
    fn test_every_line_is_detected_for_both_players() {
        for line in WIN_LINES {
            for player in [Player::X, Player::O] {
                let mut b = Board::new();
                for index in line.cells() {
                    b.set(index, player.mark());
                }
                assert_eq!(detect(&b), Outcome::Won(player), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        assert_eq!(detect(&board("XOX XOO OXX")), Outcome::Draw);
        assert_eq!(detect(&board("XOX OXX OXO")), Outcome::Draw);
    }

    #[test]
    fn test_open_boards_are_none_yet() {
        assert_eq!(detect(&Board::new()), Outcome::NoneYet);
        assert_eq!(detect(&board("XX_ O__ ___")), Outcome::NoneYet);
        assert_eq!(detect(&board("XOX XOO OX_")), Outcome::NoneYet);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        assert_eq!(detect(&board("XXX OOX OXO")), Outcome::Won(Player::X));
    }

    #[test]
    fn test_first_line_in_table_order_decides() {
        // Both the top row (X) and the middle row (O) are complete.
        assert_eq!(detect(&board("XXX OOO ___")), Outcome::Won(Player::X));
    }

    #[test]
    fn test_verdict_conversion() {
        assert_eq!(Outcome::NoneYet.verdict(), None);
        assert_eq!(Outcome::Draw.verdict(), Some(Verdict::Draw));
        assert_eq!(Outcome::from(Verdict::Won(Player::O)), Outcome::Won(Player::O));
        assert_eq!(Verdict::Won(Player::X).to_string(), "Winner: X");
    }
}
