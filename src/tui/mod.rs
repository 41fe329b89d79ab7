//! Terminal UI for noughts.

mod app;
mod input;
mod orchestrator;
mod players;
mod ui;

pub use input::Action;
pub use orchestrator::{Command, GameEvent, Orchestrator};
pub use players::{ComputerContestant, Contestant, HumanContestant};

use crate::config::Config;
use crate::logging::init_file_logging;
use crate::session::GameSession;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

use app::App;

/// Runs the interactive game until the user quits.
pub async fn run_tui(config: Config) -> Result<()> {
    // Log to a file so tracing output does not garble the screen.
    init_file_logging(config.log_file(), config.log_filter())?;

    info!(mode = ?config.mode(), computer = %config.computer(), "Starting noughts TUI");

    let session = GameSession::from_config(&config);
    let app = App::new(session.snapshot());

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (input_tx, input_rx) = mpsc::unbounded_channel();

    let mut orchestrator = Orchestrator::new(
        session,
        Box::new(HumanContestant::new("Human", input_rx)),
        Box::new(ComputerContestant::new("Computer", config.computer_delay())),
        command_rx,
        event_tx,
        config.auto_reset_delay(),
    );
    let game_task = tokio::spawn(async move {
        if let Err(e) = orchestrator.run().await {
            error!(error = %e, "Orchestrator stopped");
        }
    });

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, event_rx, command_tx, input_tx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    game_task.abort();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    mut event_rx: mpsc::UnboundedReceiver<GameEvent>,
    command_tx: mpsc::UnboundedSender<Command>,
    input_tx: mpsc::UnboundedSender<usize>,
) -> Result<()> {
    loop {
        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        terminal.draw(|frame| ui::draw(frame, &app))?;

        if !event::poll(Duration::from_millis(50))? {
            // Let the orchestrator task make progress between polls.
            tokio::task::yield_now().await;
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.handle_key(key.code) {
            Action::Quit => {
                info!("User quit");
                return Ok(());
            }
            Action::Place(cell) => input_tx.send(cell)?,
            Action::Reset => command_tx.send(Command::Reset)?,
            Action::ToggleMode => command_tx.send(Command::ToggleMode)?,
            Action::None => {}
        }
    }
}
