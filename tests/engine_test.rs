//! End-to-end engine scenarios through the public API.

use morpion::{Game, GameStatus, MoveError, Player, Position};

/// Plays a sequence of moves, panicking on any rejection.
fn play(game: &mut Game, positions: &[Position]) {
    for &position in positions {
        game.apply(position).expect("valid move");
    }
}

#[test]
fn test_players_alternate_until_game_ends() {
    let mut game = Game::new();
    let mut expected = Player::X;

    for position in [
        Position::Center,
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
    ] {
        assert_eq!(game.current_player(), expected);
        game.apply(position).expect("valid move");
        expected = expected.opponent();
    }

    let players: Vec<Player> = game.history().iter().map(|mv| mv.player()).collect();
    assert_eq!(players, vec![Player::X, Player::O, Player::X, Player::O]);
}

#[test]
fn test_occupied_square_leaves_state_unchanged() {
    let mut game = Game::new();
    game.apply(Position::Center).expect("valid move");
    let before = game.clone();

    let result = game.apply(Position::Center);
    assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
    assert_eq!(game, before);
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn test_completing_top_row_wins() {
    // X X .        X X X
    // O O .   ->   O O .
    // . . .        . . .
    let mut game = Game::new();
    play(
        &mut game,
        &[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
        ],
    );
    assert_eq!(game.status(), GameStatus::InProgress);

    let status = game.apply(Position::TopRight).expect("winning move");
    assert_eq!(status, GameStatus::Won(Player::X));
}

#[test]
fn test_full_board_without_line_is_tied() {
    // X O X
    // X O O
    // O X X
    let mut game = Game::new();
    play(
        &mut game,
        &[
            Position::TopLeft,      // X
            Position::TopCenter,    // O
            Position::TopRight,     // X
            Position::Center,       // O
            Position::MiddleLeft,   // X
            Position::MiddleRight,  // O
            Position::BottomCenter, // X
            Position::BottomLeft,   // O
            Position::BottomRight,  // X
        ],
    );
    assert_eq!(game.status(), GameStatus::Tied);
}

#[test]
fn test_diagonal_win() {
    let mut game = Game::new();
    play(
        &mut game,
        &[
            Position::TopLeft,     // X
            Position::TopCenter,   // O
            Position::Center,      // X
            Position::TopRight,    // O
            Position::BottomRight, // X completes the diagonal
        ],
    );
    assert_eq!(game.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_row_zero_scenario_ends_after_fifth_move() {
    // Moves: (0,0)=X, (1,1)=O, (0,1)=X, (1,0)=O, (0,2)=X.
    let moves: Vec<Position> = [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]
        .iter()
        .map(|&(row, col)| Position::from_row_col(row, col).expect("in range"))
        .collect();

    let mut game = Game::new();
    for (i, &position) in moves.iter().enumerate() {
        let status = game.apply(position).expect("valid move");
        if i < 4 {
            assert_eq!(status, GameStatus::InProgress);
        } else {
            assert_eq!(status, GameStatus::Won(Player::X));
        }
    }

    // No sixth move is accepted.
    let result = game.apply(Position::BottomLeft);
    assert_eq!(result, Err(MoveError::GameOver));
    assert_eq!(game.history().len(), 5);
}

#[test]
fn test_reset_restores_initial_state_from_any_point() {
    let mut game = Game::new();
    play(
        &mut game,
        &[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ],
    );
    assert_eq!(game.status(), GameStatus::Won(Player::X));

    game.reset();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.current_player(), Player::X);
    assert!(game.history().is_empty());
    assert_eq!(game.vacant().len(), 9);
}

#[test]
fn test_moves_rejected_after_tie_until_reset() {
    let mut game = Game::new();
    play(
        &mut game,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ],
    );
    assert_eq!(game.status(), GameStatus::Tied);
    assert_eq!(game.apply(Position::Center), Err(MoveError::GameOver));

    game.reset();
    assert!(game.apply(Position::Center).is_ok());
}

#[test]
fn test_history_records_only_accepted_moves() {
    let mut game = Game::new();
    game.apply(Position::Center).expect("valid move");
    let _ = game.apply(Position::Center); // rejected
    game.apply(Position::TopLeft).expect("valid move");

    assert_eq!(game.history().len(), 2);
    assert_eq!(game.history()[0].position(), Position::Center);
    assert_eq!(game.history()[1].position(), Position::TopLeft);
}

#[test]
fn test_vacant_shrinks_with_each_move() {
    let mut game = Game::new();
    assert_eq!(game.vacant().len(), 9);

    game.apply(Position::Center).expect("valid move");
    let vacant = game.vacant();
    assert_eq!(vacant.len(), 8);
    assert!(!vacant.contains(&Position::Center));
}
