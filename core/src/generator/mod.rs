use crate::*;
pub use preset::*;
pub use random::*;

mod preset;
mod random;

/// Decides where the mines go once the first cell to reveal is known.
///
/// Implementations must return exactly `config.mines()` mines and must never
/// place one on `protected`.
pub trait MineGenerator {
    fn generate(&mut self, config: GameConfig, protected: Coord2) -> Result<MineLayout>;
}
