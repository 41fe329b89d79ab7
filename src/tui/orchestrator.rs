//! Game orchestration between contestants and the UI.

use super::players::Contestant;
use crate::config::GameMode;
use crate::session::{GameSession, Snapshot};
use anyhow::Result;
use noughts_core::{Player, Position, Verdict};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Requests sent from the UI to the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a new game now.
    Reset,
    /// Switch between pvp and computer mode; starts a new game.
    ToggleMode,
}

/// Messages sent from the orchestrator to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Fresh state to render.
    Updated(Snapshot),
    /// Computer is choosing.
    Thinking,
    /// A move was applied.
    Moved {
        /// Side that moved.
        player: Player,
        /// Where it moved.
        position: Position,
    },
    /// A chosen cell was refused.
    Rejected(String),
    /// Game ended.
    GameOver(Verdict),
    /// A new game started in the given mode.
    Restarted(GameMode),
}

enum Step {
    Command(Option<Command>),
    Choice {
        cell: Result<usize>,
        by_computer: bool,
    },
    AutoReset,
}

/// Drives one session: asks the right contestant, applies moves, restarts.
pub struct Orchestrator {
    session: GameSession,
    human: Box<dyn Contestant>,
    computer: Box<dyn Contestant>,
    command_rx: mpsc::UnboundedReceiver<Command>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
    auto_reset_delay: Duration,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    ///
    /// The human contestant plays both sides in [`GameMode::Pvp`].
    pub fn new(
        session: GameSession,
        human: Box<dyn Contestant>,
        computer: Box<dyn Contestant>,
        command_rx: mpsc::UnboundedReceiver<Command>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
        auto_reset_delay: Duration,
    ) -> Self {
        Self {
            session,
            human,
            computer,
            command_rx,
            event_tx,
            auto_reset_delay,
        }
    }

    /// Runs until the command channel closes.
    #[instrument(skip(self), fields(mode = ?self.session.mode()))]
    pub async fn run(&mut self) -> Result<()> {
        info!(
            human = %self.human.name(),
            computer = %self.computer.name(),
            "Starting game orchestration"
        );
        self.emit(GameEvent::Updated(self.session.snapshot()))?;

        loop {
            let step = match self.session.to_move() {
                None => {
                    tokio::select! {
                        command = self.command_rx.recv() => Step::Command(command),
                        _ = tokio::time::sleep(self.auto_reset_delay) => Step::AutoReset,
                    }
                }
                Some(player) => {
                    let board = *self.session.board();
                    let by_computer = self.session.is_computer_turn();
                    if by_computer {
                        self.emit(GameEvent::Thinking)?;
                    }

                    let contestant = if by_computer {
                        &mut self.computer
                    } else {
                        &mut self.human
                    };
                    debug!(player = %contestant.name(), side = %player, "Waiting for move");

                    tokio::select! {
                        command = self.command_rx.recv() => Step::Command(command),
                        cell = contestant.choose_move(board, player) => {
                            Step::Choice { cell, by_computer }
                        }
                    }
                }
            };

            match step {
                Step::Command(None) => {
                    info!("Command channel closed, stopping");
                    return Ok(());
                }
                Step::Command(Some(Command::Reset)) | Step::AutoReset => {
                    self.session.reset();
                    // Cells picked for the previous board never reach the new one.
                    self.human.discard_pending();
                    self.emit(GameEvent::Restarted(self.session.mode()))?;
                }
                Step::Command(Some(Command::ToggleMode)) => {
                    let mode = self.session.toggle_mode();
                    self.human.discard_pending();
                    self.emit(GameEvent::Restarted(mode))?;
                }
                Step::Choice { cell, by_computer } => self.apply(cell?, by_computer)?,
            }

            self.emit(GameEvent::Updated(self.session.snapshot()))?;
        }
    }

    fn apply(&mut self, cell: usize, by_computer: bool) -> Result<()> {
        let Some(player) = self.session.to_move() else {
            return Ok(());
        };

        let placed = if by_computer {
            // Input typed while the computer was thinking is ignored.
            self.human.discard_pending();
            self.session.place(cell)
        } else {
            self.session.place_human(cell)
        };

        match placed {
            Ok(outcome) => {
                if let Some(position) = Position::from_index(cell) {
                    self.emit(GameEvent::Moved { player, position })?;
                }
                if let Some(verdict) = outcome.verdict() {
                    info!(%verdict, "Game finished");
                    self.emit(GameEvent::GameOver(verdict))?;
                }
            }
            Err(e) => {
                warn!(cell, error = %e, "Move rejected");
                self.emit(GameEvent::Rejected(e.to_string()))?;
            }
        }
        Ok(())
    }

    fn emit(&self, event: GameEvent) -> Result<()> {
        self.event_tx.send(event)?;
        Ok(())
    }
}
