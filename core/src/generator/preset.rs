use alloc::vec::Vec;

use super::*;

/// Hands out a fixed set of mine coordinates, for replays and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct PresetMineGenerator {
    mines: Vec<Coord2>,
}

impl PresetMineGenerator {
    pub fn new(mines: &[Coord2]) -> Self {
        Self {
            mines: mines.to_vec(),
        }
    }
}

impl MineGenerator for PresetMineGenerator {
    fn generate(&mut self, config: GameConfig, protected: Coord2) -> Result<MineLayout> {
        config.validate()?;
        let protected = config.validate_coords(protected)?;
        let layout = MineLayout::from_mine_coords(config.size(), &self.mines)?;

        if layout.mine_count() != config.mines() {
            return Err(ConfigError::MineCountMismatch {
                expected: config.mines(),
                actual: layout.mine_count(),
            }
            .into());
        }
        if layout.contains_mine(protected) {
            return Err(ConfigError::MineOnProtectedCell(protected).into());
        }
        Ok(layout)
    }
}
