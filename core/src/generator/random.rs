use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Boards above this mine density make rejection sampling noticeably slow.
const DENSE_BOARD_RATIO: CellCount = 2;

/// Uniform placement by rejection sampling: draw any cell, retry when it is
/// the protected cell or already holds a mine.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    seed: u64,
    rng: SmallRng,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(&mut self, config: GameConfig, protected: Coord2) -> Result<MineLayout> {
        config.validate()?;
        let protected = config.validate_coords(protected)?;
        let (size_x, size_y) = config.size();

        if config.mines() > config.total_cells() / DENSE_BOARD_RATIO {
            log::warn!(
                "Dense board, {} mines in {} cells, placement may take a while",
                config.mines(),
                config.total_cells()
            );
        }

        let mut layout = MineLayout::empty(config.size());
        let mut rejected = 0usize;
        while layout.mine_count() < config.mines() {
            let coords = (
                self.rng.random_range(0..size_x),
                self.rng.random_range(0..size_y),
            );
            if coords == protected || !layout.place_mine(coords) {
                rejected += 1;
            }
        }

        log::debug!(
            "Placed {} mines with seed {}, protected {:?}, {} samples rejected",
            layout.mine_count(),
            self.seed,
            protected,
            rejected
        );
        Ok(layout)
    }
}
