use minefield_core::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn mine_coords<G: MineGenerator>(game: &Game<G>) -> Vec<Coord2> {
    iter_coords(game.size())
        .filter(|&coords| game.grid().content_at(coords).is_mine())
        .collect()
}

fn revealed_cells<G: MineGenerator>(game: &Game<G>) -> usize {
    iter_coords(game.size())
        .filter(|&coords| game.grid().status_at(coords).is_revealed())
        .count()
}

#[test]
fn first_click_is_always_safe() {
    let config = GameConfig::default();
    for seed in 0..200 {
        let mut game = Game::new(config, seed).unwrap();
        let first = ((seed % 16) as Coord, (seed % 12) as Coord);

        let outcome = game.primary_action(first).unwrap();

        assert_ne!(outcome, RevealOutcome::HitMine, "seed {seed}");
        assert!(!game.grid().content_at(first).is_mine());
        assert_eq!(mine_coords(&game).len(), 30);
    }
}

#[test]
fn crowded_board_first_click_is_safe() {
    let config = GameConfig::new(3, 3, 8).unwrap();
    for seed in 0..50 {
        let mut game = Game::new(config, seed).unwrap();

        let outcome = game.primary_action((1, 1)).unwrap();

        assert_eq!(outcome, RevealOutcome::Won);
        assert_eq!(game.grid().content_at((1, 1)), CellContent::Safe(8));
    }
}

#[test]
fn flag_mine_then_clear_neighbors_one_by_one() {
    let mut game = Game::with_mines((3, 3), &[(1, 1)]).unwrap();
    assert_eq!(game.primary_action((0, 0)).unwrap(), RevealOutcome::Revealed);
    assert_eq!(
        game.secondary_action((1, 1)).unwrap(),
        SecondaryOutcome::Flag(MarkOutcome::Changed)
    );

    let remaining = [(1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)];
    for (i, &coords) in remaining.iter().enumerate() {
        let outcome = game.primary_action(coords).unwrap();
        if i + 1 == remaining.len() {
            assert_eq!(outcome, RevealOutcome::Won);
        } else {
            assert_eq!(outcome, RevealOutcome::Revealed);
            assert_eq!(game.outcome(), GameOutcome::InProgress);
        }
    }

    assert_eq!(game.outcome(), GameOutcome::Won);
    assert_eq!(game.mines_left(), 0);
    assert!(!game.timer_running());
}

#[test]
fn single_mine_large_board_wins_on_last_safe_cell() {
    let config = GameConfig::new(8, 8, 1).unwrap();
    let mut game = Game::new(config, 1234).unwrap();
    game.primary_action((0, 0)).unwrap();
    let mine = mine_coords(&game)[0];

    // the first click already opened most of the board
    if game.outcome() == GameOutcome::Won {
        return;
    }
    game.secondary_action(mine).unwrap();

    let hidden: Vec<_> = iter_coords(config.size())
        .filter(|&coords| game.grid().status_at(coords) == CellStatus::Hidden)
        .collect();
    for coords in hidden {
        game.primary_action(coords).unwrap();
        assert_eq!(
            game.outcome() == GameOutcome::Won,
            game.grid().revealed_safe_count() == 63
        );
    }

    assert_eq!(game.outcome(), GameOutcome::Won);
    assert_eq!(game.mines_left(), 0);
    assert_eq!(game.grid().revealed_safe_count(), 63);
}

#[test]
fn later_mine_loses_and_marks_wrong_flags() {
    let mut game = Game::with_mines((4, 4), &[(3, 3), (0, 3)]).unwrap();
    game.primary_action((0, 0)).unwrap();
    assert_eq!(game.outcome(), GameOutcome::InProgress);

    game.secondary_action((3, 3)).unwrap();
    game.secondary_action((1, 3)).unwrap();

    assert_eq!(game.primary_action((0, 3)).unwrap(), RevealOutcome::HitMine);
    assert_eq!(game.outcome(), GameOutcome::Lost { at: (0, 3) });
    assert_eq!(game.wrong_flags(), [(1, 3)]);

    let view = BoardView::from_game(&game);
    assert!(view.cell_at((0, 3)).exploded);
    assert!(view.cell_at((1, 3)).wrong_flag);
    assert!(!view.cell_at((3, 3)).wrong_flag);
}

#[test]
fn lost_game_ignores_flags_and_chords() {
    let mut game = Game::with_mines((4, 4), &[(3, 3), (0, 3)]).unwrap();
    game.primary_action((0, 0)).unwrap();
    game.primary_action((0, 3)).unwrap();
    let before = game.grid().clone();

    for coords in iter_coords(game.size()) {
        assert!(!game.secondary_action(coords).unwrap().has_update());
        assert!(!game.primary_action(coords).unwrap().has_update());
    }

    assert_eq!(game.grid(), &before);
    assert_eq!(game.mines_left(), 2);
}

/// Plays random clicks and checks the invariants that must hold after every move.
#[test]
fn random_play_keeps_invariants() {
    let config = GameConfig::new(9, 9, 10).unwrap();

    for seed in 0..100u64 {
        let mut game = Game::new(config, seed).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed ^ 0xdead_beef);
        let mut revealed_before = 0;

        for _ in 0..200 {
            let coords = (rng.random_range(0..9), rng.random_range(0..9));
            let snapshot = game.grid().clone();
            let was_finished = game.is_finished();

            if rng.random_bool(0.7) {
                game.primary_action(coords).unwrap();
            } else {
                game.secondary_action(coords).unwrap();
            }

            if was_finished {
                assert_eq!(game.grid(), &snapshot);
                continue;
            }

            let grid = game.grid();
            assert!(grid.revealed_safe_count() >= revealed_before);
            revealed_before = grid.revealed_safe_count();

            assert_eq!(
                grid.revealed_safe_count() == config.safe_cells(),
                game.outcome() == GameOutcome::Won,
                "seed {seed}"
            );

            if grid.mines_laid() {
                assert_eq!(mine_coords(&game).len(), 10);
            }

            let flags = iter_coords(config.size())
                .filter(|&pos| grid.status_at(pos).is_flagged())
                .count();
            assert_eq!(flags, grid.flag_count() as usize);

            let revealed_mines = mine_coords(&game)
                .into_iter()
                .filter(|&pos| grid.status_at(pos).is_revealed())
                .count();
            let lost = matches!(game.outcome(), GameOutcome::Lost { .. });
            assert_eq!(revealed_mines > 0, lost);
            assert_eq!(
                revealed_cells(&game),
                grid.revealed_safe_count() as usize + revealed_mines
            );
        }
    }
}
