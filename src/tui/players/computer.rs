//! Computer contestant backed by the minimax search.

use super::Contestant;
use anyhow::{Context, Result};
use noughts_core::{Board, Player, best_move};
use std::time::Duration;
use tracing::{debug, instrument};

/// Unbeatable computer opponent.
pub struct ComputerContestant {
    name: String,
    delay: Duration,
}

impl ComputerContestant {
    /// Creates a computer that waits `delay` before answering.
    pub fn new(name: impl Into<String>, delay: Duration) -> Self {
        Self {
            name: name.into(),
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Contestant for ComputerContestant {
    #[instrument(skip(self, board), fields(computer = %self.name, board = %board))]
    async fn choose_move(&mut self, board: Board, player: Player) -> Result<usize> {
        tokio::time::sleep(self.delay).await;

        let cell = tokio::task::spawn_blocking(move || best_move(&board, player, player.opponent()))
            .await
            .context("Search task failed")??;

        debug!(cell, "Computer chose cell");
        Ok(cell)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
