//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the two sides.
///
/// X always moves first after a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// First mover.
    X,
    /// Second mover.
    O,
}

impl Player {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the mark this player leaves on the board.
    pub fn mark(self) -> Mark {
        match self {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

/// Error returned when a player name is neither `x` nor `o`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown player {:?}, expected X or O", _0)]
pub struct ParsePlayerError(#[error(not(source))] pub String);

impl FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Player::X),
            "o" | "O" => Ok(Player::O),
            other => Err(ParsePlayerError(other.to_string())),
        }
    }
}

/// Content of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Placed by [`Player::X`].
    X,
    /// Placed by [`Player::O`].
    O,
}

impl Mark {
    /// Returns the player owning this mark, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
        }
    }

    /// Single-character notation used by [`Board`]'s `Display`/`FromStr`.
    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => '_',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        player.mark()
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order, index 0-8
/// (row = index / 3, column = index % 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Mark; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const CELLS: usize = 9;

    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from raw cells.
    pub fn from_cells(cells: [Mark; 9]) -> Self {
        Self { cells }
    }

    /// Returns the mark at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// Overwrites the cell at `index`.
    ///
    /// Out-of-range indices are ignored; legality of the placement is the
    /// caller's business (see [`crate::LegalMove`]).
    pub fn set(&mut self, index: usize, mark: Mark) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = mark;
        }
    }

    /// Returns a copy of the board with `mark` placed at `index`.
    pub fn with(mut self, index: usize, mark: Mark) -> Self {
        self.set(index, mark);
        self
    }

    /// Checks whether the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    /// Iterates empty cell indices in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| **mark == Mark::Empty)
            .map(|(index, _)| index)
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|cell| **cell == mark).count()
    }

    /// All cells as a slice.
    pub fn cells(&self) -> &[Mark; 9] {
        &self.cells
    }

    /// Formats the board as a 3x3 grid, numbering empty cells 1-9.
    pub fn render_grid(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Mark::Empty => result.push_str(&(index + 1).to_string()),
                    mark => result.push(mark.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, mark) in self.cells.iter().enumerate() {
            if index > 0 && index % 3 == 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

/// Error returned when board notation cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// Notation did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
    /// A character is not a cell symbol.
    #[display("Invalid cell {:?} at position {}", _0, _1)]
    InvalidCell(char, usize),
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses `X`/`O` (any case) and `_`, `.` or `-` for empty cells.
    ///
    /// Whitespace, `/` and `|` are separators and are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();

        if symbols.len() != Self::CELLS {
            return Err(BoardParseError::WrongLength(symbols.len()));
        }

        let mut cells = [Mark::Empty; 9];
        for (index, symbol) in symbols.into_iter().enumerate() {
            cells[index] = match symbol {
                'x' | 'X' => Mark::X,
                'o' | 'O' => Mark::O,
                '_' | '.' | '-' => Mark::Empty,
                other => return Err(BoardParseError::InvalidCell(other, index)),
            };
        }

        Ok(Self { cells })
    }
}
