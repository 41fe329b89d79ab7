//! Command-line interface for noughts.

use crate::config::GameMode;
use clap::{Parser, Subcommand};
use noughts_core::{Board, Player};
use std::path::PathBuf;

/// Noughts - tic-tac-toe with an unbeatable minimax opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe with an unbeatable computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./noughts.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Player vs player or player vs computer
        #[arg(long, value_enum)]
        mode: Option<GameMode>,

        /// Side played by the computer
        #[arg(long)]
        computer: Option<Player>,
    },

    /// Print the computer's move for a board
    BestMove {
        /// Board, e.g. "XX_/O__/___" (X, O and _ . - for empty)
        #[arg(long)]
        board: Board,

        /// Side to choose a move for
        #[arg(long, default_value = "O")]
        computer: Player,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Report whether a board is won, drawn or still open
    Detect {
        /// Board, e.g. "XOX/OXO/___"
        #[arg(long)]
        board: Board,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Let the computer play both sides and print each position
    SelfPlay {
        /// Starting board (X moves first when counts are equal)
        #[arg(long, default_value = "_________")]
        board: Board,
    },
}
