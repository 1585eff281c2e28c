use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The board itself: what every cell holds and what the player has done to it.
///
/// Content starts as `Safe(0)` everywhere and only becomes meaningful after
/// [`Grid::lay_mines`], which also computes the adjacency counts once.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    config: GameConfig,
    content: Array2<CellContent>,
    status: Array2<CellStatus>,
    mines_laid: bool,
    revealed_safe_count: CellCount,
    flag_count: CellCount,
}

impl Grid {
    pub fn new(config: GameConfig) -> Self {
        let index = config.size().to_nd_index();
        Self {
            config,
            content: Array2::default(index),
            status: Array2::default(index),
            mines_laid: false,
            revealed_safe_count: 0,
            flag_count: 0,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.config.safe_cells()
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.revealed_safe_count
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    /// Mines minus flags, negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        (self.mine_count() as isize) - (self.flag_count as isize)
    }

    pub fn mines_laid(&self) -> bool {
        self.mines_laid
    }

    /// Whether every safe cell has been revealed.
    pub fn is_cleared(&self) -> bool {
        self.revealed_safe_count == self.safe_cell_count()
    }

    pub fn content_at(&self, coords: Coord2) -> CellContent {
        self.content[coords.to_nd_index()]
    }

    pub fn status_at(&self, coords: Coord2) -> CellStatus {
        self.status[coords.to_nd_index()]
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        self.config.validate_coords(coords)
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> Neighbors {
        Neighbors::new(coords, self.size())
    }

    pub(crate) fn count_neighbors(
        &self,
        coords: Coord2,
        pred: impl Fn(CellStatus) -> bool,
    ) -> u8 {
        let count = self
            .iter_neighbors(coords)
            .filter(|&pos| pred(self.status_at(pos)))
            .count();
        // at most 8 neighbors
        count as u8
    }

    pub(crate) fn set_status(&mut self, coords: Coord2, status: CellStatus) {
        self.status[coords.to_nd_index()] = status;
    }

    pub(crate) fn add_revealed_safe(&mut self) {
        self.revealed_safe_count += 1;
    }

    pub(crate) fn add_flag(&mut self) {
        self.flag_count += 1;
    }

    pub(crate) fn remove_flag(&mut self) {
        self.flag_count -= 1;
    }

    /// Copies the mines of `layout` into the grid and computes the danger
    /// counts. Only the first call has any effect.
    pub(crate) fn lay_mines(&mut self, layout: &MineLayout) {
        if self.mines_laid {
            log::warn!("Mines already laid, ignoring new layout");
            return;
        }
        debug_assert_eq!(layout.size(), self.size());
        debug_assert_eq!(layout.mine_count(), self.mine_count());

        for coords in iter_coords(self.size()) {
            if layout.contains_mine(coords) {
                self.content[coords.to_nd_index()] = CellContent::Mine;
            }
        }
        self.compute_adjacency();
        self.mines_laid = true;
        log::debug!(
            "Laid {} mines on a {:?} grid",
            layout.mine_count(),
            self.size()
        );
    }

    fn compute_adjacency(&mut self) {
        for coords in iter_coords(self.size()) {
            if self.content_at(coords).is_mine() {
                continue;
            }
            let count = self
                .iter_neighbors(coords)
                .filter(|&pos| self.content_at(pos).is_mine())
                .count();
            self.content[coords.to_nd_index()] = CellContent::Safe(count as u8);
        }
    }
}
