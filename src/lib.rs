//! Noughts: terminal tic-tac-toe with an unbeatable computer opponent.
//!
//! Game logic lives in [`noughts_core`]. This crate adds the pieces around
//! it:
//!
//! - **Session**: [`GameSession`] holds the board, turn, verdict and mode.
//! - **Orchestration**: [`tui::Orchestrator`] asks the human or computer
//!   contestant for moves and restarts finished games.
//! - **Front end**: a ratatui board view and a clap CLI.
//!
//! # Example
//!
//! ```
//! use noughts::{GameMode, GameSession};
//! use noughts_core::Player;
//!
//! let mut session = GameSession::new(GameMode::Pvp, Player::O);
//! session.place(4).unwrap();
//! assert_eq!(session.snapshot().status_line(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod logging;
mod report;
mod session;

pub mod cli;
pub mod tui;

pub use config::{Config, ConfigError, GameMode};
pub use logging::{init_file_logging, init_stderr_logging};
pub use report::{DetectReport, MoveReport, Ply, ReportError, self_play};
pub use session::{GameSession, SessionError, Snapshot};
