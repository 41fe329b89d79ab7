//! Noughts - command-line entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::cli::{Cli, Command};
use noughts::{Config, DetectReport, MoveReport, init_stderr_logging, self_play, tui};
use noughts_core::{Board, Player};
use tracing::{info, instrument};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play { mode, computer } => {
            tui::run_tui(config.with_overrides(mode, computer)).await
        }
        Command::BestMove {
            board,
            computer,
            json,
        } => {
            init_stderr_logging(config.log_filter());
            run_best_move(&board, computer, json)
        }
        Command::Detect { board, json } => {
            init_stderr_logging(config.log_filter());
            run_detect(&board, json)
        }
        Command::SelfPlay { board } => {
            init_stderr_logging(config.log_filter());
            run_self_play(&board)
        }
    }
}

#[instrument(skip(board), fields(board = %board))]
fn run_best_move(board: &Board, computer: Player, json: bool) -> Result<()> {
    let report = MoveReport::compute(board, computer).context("No move available")?;
    info!(cell = report.cell, "Best move computed");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}\n", board.render_grid());
        println!("{}", report);
    }
    Ok(())
}

#[instrument(skip(board), fields(board = %board))]
fn run_detect(board: &Board, json: bool) -> Result<()> {
    let report = DetectReport::inspect(board);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}\n", board.render_grid());
        println!("{}", report);
    }
    Ok(())
}

#[instrument(skip(board), fields(board = %board))]
fn run_self_play(board: &Board) -> Result<()> {
    let (plies, outcome) = self_play(board).context("Self-play could not continue")?;

    println!("{}\n", board.render_grid());
    for ply in &plies {
        println!("{} takes cell {}", ply.player, ply.cell + 1);
        println!("{}\n", ply.board.render_grid());
    }
    match outcome.verdict() {
        Some(verdict) => println!("{}", verdict),
        None => println!("No result"),
    }
    Ok(())
}
