use sweeper_core::*;

fn count_open(game: &Game<impl MineGenerator>) -> usize {
    game.board().iter_cells().filter(|(_, cell)| cell.is_open()).count()
}

#[test]
fn numbered_cell_on_standard_board_opens_alone() {
    let config = GameConfig::new(10, 10, 10).unwrap();

    for seed in 0..20 {
        let mut game = Game::with_seed(config, seed).unwrap();
        let target = game
            .board()
            .iter_cells()
            .find(|(_, cell)| !cell.is_mine() && cell.content().count().is_some_and(|n| n > 0))
            .map(|(pos, _)| pos)
            .unwrap();

        let outcome = game.handle_open(target).unwrap();

        assert!(outcome == OpenOutcome::InProgress || outcome == OpenOutcome::Won);
        assert_eq!(count_open(&game), 1);
    }
}

#[test]
fn placement_is_exact_and_distinct_across_seeds() {
    let config = GameConfig::new(7, 9, 20).unwrap();

    for seed in 0..50 {
        let game = Game::with_seed(config, seed).unwrap();
        let mines = game.board().iter_cells().filter(|(_, cell)| cell.is_mine()).count();
        assert_eq!(mines, 20);
    }
}

#[test]
fn zero_region_floods_to_win_on_single_mine_board() {
    let config = GameConfig::new(3, 3, 1).unwrap();
    let mut game = Game::new(config, FixedMineGenerator::new(&[(2, 2)])).unwrap();

    assert_eq!(game.handle_open((0, 0)), Ok(OpenOutcome::Won));
    assert_eq!(count_open(&game), 8);
    assert_eq!(game.state(), GameState::Won);
}

#[test]
fn playing_every_safe_cell_wins() {
    let config = GameConfig::new(6, 6, 8).unwrap();
    let mut game = Game::with_seed(config, 99).unwrap();
    let safe: Vec<_> = game
        .board()
        .iter_cells()
        .filter(|(_, cell)| !cell.is_mine())
        .map(|(pos, _)| pos)
        .collect();

    let mut last = OpenOutcome::NoChange;
    for pos in safe {
        if !game.view(pos).unwrap().is_open {
            last = game.handle_open(pos).unwrap();
        }
    }

    assert_eq!(last, OpenOutcome::Won);
    assert_eq!(game.state(), GameState::Won);
    assert_eq!(game.board().remaining_safe_cells(), 0);
}

#[test]
fn oversized_mine_count_is_rejected() {
    assert_eq!(
        GameConfig::new(10, 10, 10 * 10 + 1),
        Err(GameError::InvalidMineCount)
    );
}

#[test]
fn open_left_of_board_is_out_of_bounds() {
    let mut game = Game::with_seed(GameConfig::new(4, 4, 2).unwrap(), 0).unwrap();

    assert_eq!(game.handle_open((-1, 0)), Err(GameError::OutOfBounds));
}

#[test]
fn flag_count_follows_live_flags() {
    let mut game = Game::with_seed(GameConfig::new(5, 5, 5).unwrap(), 3).unwrap();

    for pos in [(0, 0), (1, 1), (2, 2), (1, 1)] {
        game.handle_flag(pos).unwrap();
    }

    let live = game.board().iter_cells().filter(|(_, cell)| cell.is_flag()).count();
    assert_eq!(game.flag_count() as usize, live);
    assert_eq!(live, 2);
}
