//! Serializable results for the non-interactive subcommands.

use derive_more::{Display, Error, From};
use noughts_core::{
    Board, Mark, MoveError, Outcome, Player, Position, SearchError, best_move, detect,
    winning_line,
};
use serde::Serialize;
use tracing::{debug, instrument};

/// Errors raised while building a move report.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ReportError {
    /// The search refused the board.
    #[display("{}", _0)]
    Search(SearchError),

    /// The search answered with a cell that is not on the board.
    #[display("{}", _0)]
    Move(MoveError),
}

/// Answer to `best-move`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    /// Board the move was chosen for.
    pub board: String,
    /// Side the move was chosen for.
    pub computer: Player,
    /// Chosen cell, 0-8.
    pub cell: usize,
    /// Chosen cell by name.
    pub position: Position,
}

impl MoveReport {
    /// Runs the search for `computer` against its opponent.
    #[instrument(skip(board), fields(board = %board))]
    pub fn compute(board: &Board, computer: Player) -> Result<Self, ReportError> {
        let cell = best_move(board, computer, computer.opponent())?;
        let position = Position::from_index(cell).ok_or(MoveError::OutOfBounds(cell))?;
        Ok(Self {
            board: board.to_string(),
            computer,
            cell,
            position,
        })
    }
}

impl std::fmt::Display for MoveReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} plays cell {} ({})", self.computer, self.cell + 1, self.position)
    }
}

/// Answer to `detect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectReport {
    /// Inspected board.
    pub board: String,
    /// Detector result.
    pub outcome: Outcome,
    /// Cells of the completed line, if any.
    pub winning_line: Option<[usize; 3]>,
}

impl DetectReport {
    /// Inspects `board`.
    pub fn inspect(board: &Board) -> Self {
        Self {
            board: board.to_string(),
            outcome: detect(board),
            winning_line: winning_line(board).map(|line| line.cells()),
        }
    }
}

impl std::fmt::Display for DetectReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.outcome.verdict() {
            Some(verdict) => write!(f, "{}", verdict)?,
            None => write!(f, "No result yet")?,
        }
        if let Some(cells) = self.winning_line {
            write!(f, " (cells {}, {}, {})", cells[0] + 1, cells[1] + 1, cells[2] + 1)?;
        }
        Ok(())
    }
}

/// One ply of a self-play game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ply {
    /// Side that moved.
    pub player: Player,
    /// Cell it took.
    pub cell: usize,
    /// Board after the move.
    pub board: Board,
}

/// The computer playing both sides from `board` until the game ends.
///
/// X moves first when both sides have the same number of marks.
#[instrument(skip(board), fields(board = %board))]
pub fn self_play(board: &Board) -> Result<(Vec<Ply>, Outcome), SearchError> {
    let mut board = *board;
    let mut to_move = if board.count(Mark::X) == board.count(Mark::O) {
        Player::X
    } else {
        Player::O
    };
    let mut plies = Vec::new();

    loop {
        let outcome = detect(&board);
        if outcome.is_over() {
            debug!(?outcome, plies = plies.len(), "Self-play finished");
            return Ok((plies, outcome));
        }

        let cell = best_move(&board, to_move, to_move.opponent())?;
        board = board.with(cell, to_move.mark());
        plies.push(Ply {
            player: to_move,
            cell,
            board,
        });
        to_move = to_move.opponent();
    }
}
