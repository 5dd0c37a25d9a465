use minibattle::{
    Board, BoardError, Cell, ConfigError, Coord, Game, GameConfig, GameError, GameStatus,
    ShotOutcome, Side,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn board_with(size: usize, ships: &[(usize, usize)]) -> Board {
    let mut board = Board::new(size);
    for &(r, c) in ships {
        board.place_ship(Coord::new(r, c)).unwrap();
    }
    board
}

#[test]
fn test_new_game_places_both_fleets() {
    let mut rng = SmallRng::seed_from_u64(11);
    let game = Game::new(GameConfig::default(), &mut rng).unwrap();
    assert_eq!(game.player_board().count(Cell::Ship), 3);
    assert_eq!(game.ai_board().count(Cell::Ship), 3);
    assert_eq!(game.player_guesses().count(Cell::Empty), 25);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.ai().shots_taken(), 0);
}

#[test]
fn test_new_game_rejects_bad_config() {
    let mut rng = SmallRng::seed_from_u64(11);
    let err = Game::new(GameConfig::with_grid(2, 5), &mut rng).unwrap_err();
    assert_eq!(
        err,
        GameError::Config(ConfigError::TooManyShips {
            ship_count: 5,
            cells: 4
        })
    );
}

#[test]
fn test_from_boards_rejects_wrong_size() {
    let err = Game::from_boards(
        GameConfig::default(),
        board_with(4, &[(0, 0)]),
        board_with(5, &[(4, 4)]),
    )
    .unwrap_err();
    assert_eq!(err, GameError::BoardSize { expected: 5, found: 4 });
    assert_eq!(err.to_string(), "board is 4x4, expected 5x5");

    let err = Game::from_boards(
        GameConfig::default(),
        board_with(5, &[(0, 0)]),
        board_with(6, &[(5, 5)]),
    )
    .unwrap_err();
    assert_eq!(err, GameError::BoardSize { expected: 5, found: 6 });
}

#[test]
fn test_from_boards_rejects_boards_in_play() {
    let mut shot_at = board_with(5, &[(0, 0), (1, 1)]);
    shot_at.resolve_shot(Coord::new(0, 0)).unwrap();
    let err = Game::from_boards(GameConfig::default(), shot_at, board_with(5, &[(4, 4)]))
        .unwrap_err();
    assert_eq!(err, GameError::BoardInPlay);

    let mut missed = board_with(5, &[(4, 4)]);
    missed.resolve_shot(Coord::new(2, 2)).unwrap();
    let err = Game::from_boards(GameConfig::default(), board_with(5, &[(0, 0)]), missed)
        .unwrap_err();
    assert_eq!(err, GameError::BoardInPlay);
}

#[test]
fn test_player_shot_updates_guess_board_only() {
    let config = GameConfig::default();
    let mut game = Game::from_boards(
        config,
        board_with(5, &[(0, 0), (0, 1), (0, 2)]),
        board_with(5, &[(4, 4), (3, 3), (2, 2)]),
    )
    .unwrap();

    assert_eq!(game.player_shot(Coord::new(4, 4)).unwrap(), ShotOutcome::Hit);
    assert_eq!(game.player_shot(Coord::new(0, 0)).unwrap(), ShotOutcome::Miss);

    assert_eq!(game.player_guesses().cell(Coord::new(4, 4)).unwrap(), Cell::Hit);
    assert_eq!(game.player_guesses().cell(Coord::new(0, 0)).unwrap(), Cell::Miss);
    assert_eq!(game.player_guesses().count(Cell::Ship), 0);
    assert_eq!(game.ai_board().ships_remaining(), 2);
    // our own board is untouched by our shots
    assert_eq!(game.player_board().cell(Coord::new(0, 0)).unwrap(), Cell::Ship);

    assert_eq!(
        game.player_shot(Coord::new(4, 4)).unwrap_err(),
        GameError::Board(BoardError::AlreadyResolved(Coord::new(4, 4)))
    );
}

#[test]
fn test_player_sinks_fleet_and_game_closes() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut game = Game::from_boards(
        GameConfig::default(),
        board_with(5, &[(0, 0), (0, 1), (0, 2)]),
        board_with(5, &[(4, 4), (3, 3), (2, 2)]),
    )
    .unwrap();
    for coord in [(4, 4), (3, 3), (2, 2)] {
        game.player_shot(Coord::from(coord)).unwrap();
    }
    assert_eq!(game.winner(), Some(Side::Player));
    assert!(game.ai_board().all_sunk());
    assert_eq!(
        game.player_shot(Coord::new(1, 1)).unwrap_err(),
        GameError::GameOver(Side::Player)
    );
    assert_eq!(game.ai_turn(&mut rng).unwrap_err(), GameError::GameOver(Side::Player));
}

#[test]
fn test_ai_sinks_full_board() {
    let mut rng = SmallRng::seed_from_u64(8);
    let all: Vec<(usize, usize)> = (0..3).flat_map(|r| (0..3).map(move |c| (r, c))).collect();
    let mut game = Game::from_boards(
        GameConfig::with_grid(3, 9),
        board_with(3, &all),
        board_with(3, &[(1, 1)]),
    )
    .unwrap();
    for turn in 1..=9 {
        let shot = game.ai_turn(&mut rng).unwrap().unwrap();
        assert_eq!(shot.outcome, ShotOutcome::Hit);
        assert_eq!(game.ai().shots_taken(), turn);
    }
    assert_eq!(game.winner(), Some(Side::Ai));
    assert_eq!(game.status(), GameStatus::Won(Side::Ai));
}
