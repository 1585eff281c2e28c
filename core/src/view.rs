use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer should draw for one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    /// A revealed mine, only seen after a loss.
    Mine,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub view: CellView,
    /// Flag on a safe cell of a lost game.
    pub wrong_flag: bool,
    /// The mine that ended the game.
    pub exploded: bool,
}

impl Default for CellSnapshot {
    fn default() -> Self {
        Self {
            view: CellView::Hidden,
            wrong_flag: false,
            exploded: false,
        }
    }
}

/// Read-only snapshot of the whole board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord2,
    pub cells: Array2<CellSnapshot>,
}

impl BoardView {
    pub fn from_game<G: MineGenerator>(game: &Game<G>) -> Self {
        let grid = game.grid();
        let size = grid.size();
        let exploded_mine = game.exploded_mine();
        let mut cells = Array2::from_elem(size.to_nd_index(), CellSnapshot::default());

        for coords in iter_coords(size) {
            let view = match (grid.status_at(coords), grid.content_at(coords)) {
                (CellStatus::Hidden, _) => CellView::Hidden,
                (CellStatus::Flagged, _) => CellView::Flagged,
                (CellStatus::Revealed, CellContent::Safe(count)) => CellView::Revealed(count),
                (CellStatus::Revealed, CellContent::Mine) => CellView::Mine,
            };
            cells[coords.to_nd_index()] = CellSnapshot {
                view,
                wrong_flag: game.is_wrong_flag(coords),
                exploded: exploded_mine == Some(coords),
            };
        }

        Self { size, cells }
    }

    pub fn cell_at(&self, coords: Coord2) -> CellSnapshot {
        self.cells[coords.to_nd_index()]
    }

    /// Rows top to bottom, each row left to right.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = CellSnapshot> + '_> + '_ {
        let (size_x, size_y) = self.size;
        (0..size_y).map(move |y| (0..size_x).map(move |x| self.cell_at((x, y))))
    }
}

/// Status fields for the counters and the restart button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub outcome: GameOutcome,
    pub mines_left: isize,
    pub timer_running: bool,
}

impl Hud {
    pub fn from_game<G: MineGenerator>(game: &Game<G>) -> Self {
        Self {
            outcome: game.outcome(),
            mines_left: game.mines_left(),
            timer_running: game.timer_running(),
        }
    }
}
