//! Tests for the typestate game lifecycle.

use noughts_core::{
    AnyGame, GameInProgress, GameResult, Move, MoveError, Outcome, Player, Position, Verdict,
    detect,
};

fn moves(player_first: Player, cells: &[usize]) -> Vec<Move> {
    let mut player = player_first;
    cells
        .iter()
        .map(|&cell| {
            let action = Move::at_index(player, cell).unwrap();
            player = player.opponent();
            action
        })
        .collect()
}

#[test]
fn test_typestate_lifecycle() {
    let game = GameInProgress::new();
    assert_eq!(game.to_move(), Player::X);

    let result = game.make_move(Move::new(Player::X, Position::Center)).unwrap();
    let game = match result {
        GameResult::InProgress(g) => g,
        GameResult::Finished(_) => panic!("Game shouldn't finish after one move"),
    };

    assert_eq!(game.to_move(), Player::O);
    assert_eq!(game.valid_moves().len(), 8);
}

#[test]
fn test_contracts_prevent_invalid_moves() {
    let game = match GameInProgress::new().place(Position::Center).unwrap() {
        GameResult::InProgress(g) => g,
        GameResult::Finished(_) => panic!("Unexpected finish"),
    };

    let result = game
        .clone()
        .make_move(Move::new(Player::O, Position::Center));
    assert_eq!(result.err(), Some(MoveError::SquareOccupied(Position::Center)));

    let result = game.make_move(Move::new(Player::X, Position::TopLeft));
    assert_eq!(result.err(), Some(MoveError::WrongPlayer(Player::X)));
}

#[test]
fn test_replay_to_win() {
    let result = GameInProgress::replay(&moves(Player::X, &[0, 3, 1, 4, 2])).unwrap();
    match result {
        GameResult::Finished(game) => {
            assert_eq!(game.verdict(), Verdict::Won(Player::X));
            assert_eq!(detect(game.board()), Outcome::Won(Player::X));
            assert_eq!(game.history().len(), 5);
        }
        GameResult::InProgress(_) => panic!("Game should be won"),
    }
}

#[test]
fn test_replay_past_the_end_is_rejected() {
    let result = GameInProgress::replay(&moves(Player::X, &[0, 3, 1, 4, 2, 5]));
    assert_eq!(result.err(), Some(MoveError::GameOver));
}

#[test]
fn test_restart_after_draw() {
    let mut game = AnyGame::default();
    for cell in [0, 4, 2, 1, 3, 5, 7, 6, 8] {
        game = game
            .place(Position::from_index(cell).unwrap())
            .map_err(|(_, e)| e)
            .unwrap();
    }
    assert_eq!(game.verdict(), Some(Verdict::Draw));

    let AnyGame::Finished(finished) = game else {
        panic!("Game should be finished");
    };
    let fresh = finished.restart();
    assert_eq!(fresh.to_move(), Player::X);
    assert_eq!(fresh.valid_moves().len(), 9);
}
