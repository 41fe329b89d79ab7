//! Pure tic-tac-toe game logic.
//!
//! The crate has two algorithmic pieces and some typed scaffolding around
//! them:
//!
//! - **Outcome detection**: [`detect`] reports whether a board is won,
//!   drawn, or still open.
//! - **Move search**: [`best_move`] runs an exhaustive minimax over the
//!   remaining game tree and returns the optimal cell for the computer.
//! - **Typestate game**: [`GameInProgress`] and [`GameFinished`] encode the
//!   game phase in the type, with move contracts checked on every
//!   transition.
//!
//! # Example
//!
//! ```
//! use noughts_core::{best_move, detect, Board, Outcome, Player};
//!
//! let board: Board = "XX_ O__ ___".parse().unwrap();
//! assert_eq!(detect(&board), Outcome::NoneYet);
//!
//! // X completes the top row.
//! assert_eq!(best_move(&board, Player::X, Player::O).unwrap(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod position;
mod rules;
mod search;
mod typestate;
mod types;
mod wrapper;

pub use action::{Move, MoveError};
pub use contracts::{
    BoardBalanced, Contract, HistoryMatchesBoard, Invariant, LegalMove, MoveContract,
};
pub use position::Position;
pub use rules::{Outcome, Verdict, WIN_LINES, WinLine, check_winner, detect, is_full, winning_line};
pub use search::{SearchError, best_move};
pub use typestate::{GameFinished, GameInProgress, GameResult};
pub use types::{Board, BoardParseError, Mark, ParsePlayerError, Player};
pub use wrapper::AnyGame;
