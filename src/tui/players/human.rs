//! Human contestant fed by keyboard input.

use super::Contestant;
use anyhow::Result;
use noughts_core::{Board, Player};
use tokio::sync::mpsc;
use tracing::debug;

/// Human contestant reading chosen cells from the UI.
pub struct HumanContestant {
    name: String,
    input_rx: mpsc::UnboundedReceiver<usize>,
}

impl HumanContestant {
    /// Creates a new human contestant.
    pub fn new(name: impl Into<String>, input_rx: mpsc::UnboundedReceiver<usize>) -> Self {
        Self {
            name: name.into(),
            input_rx,
        }
    }
}

#[async_trait::async_trait]
impl Contestant for HumanContestant {
    async fn choose_move(&mut self, _board: Board, player: Player) -> Result<usize> {
        debug!(human = %self.name, %player, "Waiting for input");
        self.input_rx
            .recv()
            .await
            .ok_or_else(|| anyhow::anyhow!("Input channel closed"))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn discard_pending(&mut self) {
        let mut dropped = 0;
        while self.input_rx.try_recv().is_ok() {
            dropped += 1;
        }
        if dropped > 0 {
            debug!(human = %self.name, dropped, "Discarded stale input");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_discard_pending_drops_queued_cells() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut human = HumanContestant::new("Human", rx);
        tx.send(8).unwrap();
        tx.send(7).unwrap();

        human.discard_pending();
        tx.send(2).unwrap();

        let cell = human.choose_move(Board::new(), Player::X).await.unwrap();
        assert_eq!(cell, 2);
    }
}
