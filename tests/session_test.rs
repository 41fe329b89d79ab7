//! Tests for the game session.

use noughts::{GameMode, GameSession, SessionError};
use noughts_core::{MoveError, Outcome, Player, Position, Verdict};

#[test]
fn test_new_session_is_empty_with_x_to_move() {
    let session = GameSession::new(GameMode::Computer, Player::O);
    assert_eq!(session.board().empty_cells().count(), 9);
    assert_eq!(session.to_move(), Some(Player::X));
    assert_eq!(session.outcome(), Outcome::NoneYet);
    assert!(!session.is_computer_turn());
}

#[test]
fn test_occupied_cell_rejected_and_board_unchanged() {
    let mut session = GameSession::new(GameMode::Pvp, Player::O);
    session.place(4).unwrap();
    let before = *session.board();

    let err = session.place(4).unwrap_err();
    assert_eq!(err, SessionError::Move(MoveError::SquareOccupied(Position::Center)));
    assert_eq!(*session.board(), before);
    assert_eq!(session.to_move(), Some(Player::O));
}

#[test]
fn test_out_of_range_cell_rejected() {
    let mut session = GameSession::new(GameMode::Pvp, Player::O);
    assert_eq!(
        session.place(9).unwrap_err(),
        SessionError::Move(MoveError::OutOfBounds(9))
    );
}

#[test]
fn test_no_moves_after_game_over() {
    let mut session = GameSession::new(GameMode::Pvp, Player::O);
    for cell in [0, 3, 1, 4, 2] {
        session.place(cell).unwrap();
    }
    assert!(session.is_over());
    assert_eq!(session.verdict(), Some(Verdict::Won(Player::X)));
    assert_eq!(session.to_move(), None);

    assert_eq!(
        session.place(8).unwrap_err(),
        SessionError::Move(MoveError::GameOver)
    );
}

#[test]
fn test_draw_detected_on_last_move() {
    let mut session = GameSession::new(GameMode::Pvp, Player::O);
    let mut last = Outcome::NoneYet;
    for cell in [0, 4, 2, 1, 3, 5, 7, 6, 8] {
        last = session.place(cell).unwrap();
    }
    assert_eq!(last, Outcome::Draw);
    assert_eq!(session.snapshot().status_line(), "It's a draw!");
}

#[test]
fn test_human_blocked_on_computer_turn() {
    let mut session = GameSession::new(GameMode::Computer, Player::O);
    session.place_human(0).unwrap();
    assert!(session.is_computer_turn());
    assert_eq!(session.place_human(4).unwrap_err(), SessionError::ComputerTurn);

    // The computer's own placement goes through.
    session.place(4).unwrap();
    assert_eq!(session.to_move(), Some(Player::X));
}

#[test]
fn test_computer_playing_x_moves_first() {
    let session = GameSession::new(GameMode::Computer, Player::X);
    assert!(session.is_computer_turn());
    assert!(!session.snapshot().accepts_human_input());
}

#[test]
fn test_reset_clears_board() {
    let mut session = GameSession::new(GameMode::Pvp, Player::O);
    session.place(0).unwrap();
    session.place(1).unwrap();
    session.reset();
    assert_eq!(session.board().empty_cells().count(), 9);
    assert_eq!(session.to_move(), Some(Player::X));
    assert!(session.history().is_empty());
}

#[test]
fn test_toggle_mode_resets_game() {
    let mut session = GameSession::new(GameMode::Pvp, Player::O);
    session.place(0).unwrap();

    assert_eq!(session.toggle_mode(), GameMode::Computer);
    assert_eq!(session.mode(), GameMode::Computer);
    assert_eq!(session.board().empty_cells().count(), 9);

    assert_eq!(session.toggle_mode(), GameMode::Pvp);
}
