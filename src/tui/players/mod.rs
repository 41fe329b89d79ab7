//! Contestants that choose moves for the orchestrator.

mod computer;
mod human;

pub use computer::ComputerContestant;
pub use human::HumanContestant;

use anyhow::Result;
use noughts_core::{Board, Player};

/// Something that can pick the next cell.
#[async_trait::async_trait]
pub trait Contestant: Send {
    /// Chooses a cell (0-8) for `player` on `board`.
    ///
    /// The returned cell is validated by the session, not here.
    async fn choose_move(&mut self, board: Board, player: Player) -> Result<usize>;

    /// Display name for logs.
    fn name(&self) -> &str;

    /// Drops choices made while it was not this contestant's turn.
    fn discard_pending(&mut self) {}
}
