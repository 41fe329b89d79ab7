//! Application state and logic.

use super::input::{Action, digit_cell, move_cursor};
use super::orchestrator::GameEvent;
use crate::session::Snapshot;
use crossterm::event::KeyCode;
use noughts_core::{Move, Position};
use tracing::debug;

/// UI-side state: the latest snapshot plus cursor and notices.
pub struct App {
    snapshot: Snapshot,
    cursor: Position,
    notice: Option<String>,
}

impl App {
    /// Creates a new application showing `snapshot`.
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            cursor: Position::Center,
            notice: None,
        }
    }

    /// Latest session snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Transient message below the status line.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Handles a game event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::Updated(snapshot) => self.snapshot = snapshot,
            GameEvent::Thinking => self.notice = None,
            GameEvent::Moved { player, position } => {
                self.notice = Some(Move::new(player, position).to_string());
            }
            GameEvent::Rejected(reason) => self.notice = Some(reason),
            GameEvent::GameOver(_) => {
                self.notice = Some("New game starting shortly...".to_string());
            }
            GameEvent::Restarted(mode) => {
                self.notice = Some(format!("New game ({})", mode.label()));
            }
        }
    }

    /// Maps a key press to an action, moving the cursor as a side effect.
    ///
    /// Placements are dropped while the computer is to move or the game is
    /// over, so they never queue up for a later turn.
    pub fn handle_key(&mut self, key: KeyCode) -> Action {
        let action = match key {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('r') => Action::Reset,
            KeyCode::Char('m') => Action::ToggleMode,
            KeyCode::Enter | KeyCode::Char(' ') => Action::Place(self.cursor.to_index()),
            KeyCode::Char(c) => match digit_cell(c).and_then(Position::from_index) {
                Some(position) => {
                    self.cursor = position;
                    Action::Place(position.to_index())
                }
                None => Action::None,
            },
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
                Action::None
            }
            _ => Action::None,
        };

        match action {
            Action::Place(_) if !self.snapshot.accepts_human_input() => {
                debug!("Ignoring placement outside a human turn");
                Action::None
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameMode;
    use crate::session::GameSession;
    use noughts_core::Player;

    fn app(mode: GameMode) -> App {
        App::new(GameSession::new(mode, Player::O).snapshot())
    }

    #[test]
    fn test_keys_map_to_actions() {
        let mut app = app(GameMode::Pvp);
        assert_eq!(app.handle_key(KeyCode::Char('q')), Action::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), Action::Quit);
        assert_eq!(app.handle_key(KeyCode::Char('r')), Action::Reset);
        assert_eq!(app.handle_key(KeyCode::Char('m')), Action::ToggleMode);
        assert_eq!(app.handle_key(KeyCode::Enter), Action::Place(4));
        assert_eq!(app.handle_key(KeyCode::Char('7')), Action::Place(6));
        assert_eq!(app.cursor(), Position::BottomLeft);
        assert_eq!(app.handle_key(KeyCode::Up), Action::None);
        assert_eq!(app.cursor(), Position::MiddleLeft);
        assert_eq!(app.handle_key(KeyCode::Char(' ')), Action::Place(3));
    }

    #[test]
    fn test_placement_ignored_on_computer_turn() {
        let mut session = GameSession::new(GameMode::Computer, Player::O);
        session.place(0).unwrap();
        let mut app = App::new(session.snapshot());
        assert_eq!(app.handle_key(KeyCode::Char('5')), Action::None);
        assert_eq!(app.handle_key(KeyCode::Char('r')), Action::Reset);
    }

    #[test]
    fn test_events_update_notice() {
        let mut app = app(GameMode::Computer);
        app.handle_event(GameEvent::Moved {
            player: Player::X,
            position: Position::Center,
        });
        assert_eq!(app.notice(), Some("X -> Center"));
        app.handle_event(GameEvent::Restarted(GameMode::Pvp));
        assert_eq!(app.notice(), Some("New game (vs Player)"));
        app.handle_event(GameEvent::Thinking);
        assert_eq!(app.notice(), None);
    }
}
