use alloc::vec;

use crate::*;

impl Grid {
    /// Reveals a single cell, flooding through zero-count cells.
    ///
    /// Flagged and already revealed cells are left alone. A mine is revealed
    /// and reported as [`RevealOutcome::HitMine`] without cascading. Never
    /// returns [`RevealOutcome::Won`], deciding that is up to the caller.
    pub(crate) fn reveal_cell(&mut self, coords: Coord2) -> RevealOutcome {
        if self.status_at(coords) != CellStatus::Hidden {
            return RevealOutcome::NoChange;
        }

        if self.content_at(coords).is_mine() {
            self.set_status(coords, CellStatus::Revealed);
            log::debug!("Revealed mine at {:?}", coords);
            return RevealOutcome::HitMine;
        }

        let mut pending = vec![coords];
        while let Some(visit) = pending.pop() {
            // may have been queued twice by two zero neighbors
            if self.status_at(visit) != CellStatus::Hidden {
                continue;
            }

            let CellContent::Safe(count) = self.content_at(visit) else {
                continue;
            };
            self.set_status(visit, CellStatus::Revealed);
            self.add_revealed_safe();
            log::trace!("Revealed {:?}, adjacent mines: {}", visit, count);

            if count == 0 {
                pending.extend(
                    self.iter_neighbors(visit)
                        .filter(|&pos| self.status_at(pos) == CellStatus::Hidden),
                );
            }
        }

        RevealOutcome::Revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(size: Coord2, mines: &[Coord2]) -> Grid {
        let config = GameConfig::new(size.0, size.1, mines.len() as CellCount).unwrap();
        let mut grid = Grid::new(config);
        grid.lay_mines(&MineLayout::from_mine_coords(size, mines).unwrap());
        grid
    }

    fn revealed(grid: &Grid) -> usize {
        iter_coords(grid.size())
            .filter(|&pos| grid.status_at(pos).is_revealed())
            .count()
    }

    #[test]
    fn numbered_cell_does_not_cascade() {
        let mut grid = grid_with((3, 3), &[(2, 2)]);

        assert_eq!(grid.reveal_cell((1, 1)), RevealOutcome::Revealed);

        assert_eq!(revealed(&grid), 1);
        assert_eq!(grid.revealed_safe_count(), 1);
    }

    #[test]
    fn zero_cell_opens_region_and_border() {
        // mine column at x = 3 splits the board
        let mut grid = grid_with((5, 3), &[(3, 0), (3, 1), (3, 2)]);

        assert_eq!(grid.reveal_cell((0, 0)), RevealOutcome::Revealed);

        for y in 0..3 {
            assert!(grid.status_at((0, y)).is_revealed());
            assert!(grid.status_at((1, y)).is_revealed());
            assert!(grid.status_at((2, y)).is_revealed());
            assert_eq!(grid.status_at((3, y)), CellStatus::Hidden);
            assert_eq!(grid.status_at((4, y)), CellStatus::Hidden);
        }
        assert_eq!(grid.revealed_safe_count(), 9);
    }

    #[test]
    fn cascade_stops_at_flags() {
        let mut grid = grid_with((4, 1), &[]);
        grid.set_status((2, 0), CellStatus::Flagged);

        grid.reveal_cell((0, 0));

        assert!(grid.status_at((1, 0)).is_revealed());
        assert_eq!(grid.status_at((2, 0)), CellStatus::Flagged);
        assert_eq!(grid.status_at((3, 0)), CellStatus::Hidden);
        assert_eq!(grid.revealed_safe_count(), 2);
    }

    #[test]
    fn cascade_never_reveals_mines() {
        let mines = [(4, 4), (0, 4)];
        let mut grid = grid_with((5, 5), &mines);

        grid.reveal_cell((2, 0));

        for mine in mines {
            assert_eq!(grid.status_at(mine), CellStatus::Hidden);
        }
        assert!(grid.is_cleared());
    }

    #[test]
    fn mine_is_revealed_without_cascade() {
        let mut grid = grid_with((3, 3), &[(0, 0)]);

        assert_eq!(grid.reveal_cell((0, 0)), RevealOutcome::HitMine);

        assert!(grid.status_at((0, 0)).is_revealed());
        assert_eq!(revealed(&grid), 1);
        assert_eq!(grid.revealed_safe_count(), 0);
    }

    #[test]
    fn revealed_and_flagged_cells_are_untouched() {
        let mut grid = grid_with((3, 1), &[(2, 0)]);
        grid.set_status((2, 0), CellStatus::Flagged);

        assert_eq!(grid.reveal_cell((2, 0)), RevealOutcome::NoChange);
        assert_eq!(grid.reveal_cell((0, 0)), RevealOutcome::Revealed);
        assert_eq!(grid.reveal_cell((0, 0)), RevealOutcome::NoChange);
        assert_eq!(grid.revealed_safe_count(), 2);
    }
}
