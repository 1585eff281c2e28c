use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress, on the first reveal that opens a cell
/// - InProgress -> Won
/// - InProgress -> Lost
///
/// A single reveal can take a game straight from `NotStarted` to `Won` when
/// the first flood clears the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    NotStarted,
    InProgress,
    Won,
    /// Carries the mine that ended the game.
    Lost { at: Coord2 },
}

impl GameOutcome {
    pub const fn is_started(self) -> bool {
        !matches!(self, Self::NotStarted)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost { .. })
    }
}

impl Default for GameOutcome {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// One game from first click to win or loss. Restarting means building a new
/// `Game`, nothing in here is ever reset.
#[derive(Clone, Debug)]
pub struct Game<G = RandomMineGenerator> {
    grid: Grid,
    outcome: GameOutcome,
    generator: G,
}

impl Game {
    /// A game whose mines are placed by a [`RandomMineGenerator`] seeded with `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, RandomMineGenerator::new(seed))
    }
}

impl Game<PresetMineGenerator> {
    /// A game with the mines at fixed positions, placed on the first reveal.
    pub fn with_mines(size: Coord2, mines: &[Coord2]) -> Result<Self> {
        let count = mines.len().try_into().unwrap_or(CellCount::MAX);
        let config = GameConfig::new(size.0, size.1, count)?;
        Self::with_generator(config, PresetMineGenerator::new(mines))
    }
}

impl<G: MineGenerator> Game<G> {
    pub fn with_generator(config: GameConfig, generator: G) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "New game {}x{} with {} mines",
            config.width(),
            config.height(),
            config.mines()
        );
        Ok(Self {
            grid: Grid::new(config),
            outcome: GameOutcome::NotStarted,
            generator,
        })
    }

    pub fn config(&self) -> GameConfig {
        self.grid.config()
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    /// Mines minus flags, may be negative.
    pub fn mines_left(&self) -> isize {
        self.grid.mines_left()
    }

    /// The elapsed-time counter runs only while the game is in progress.
    pub fn timer_running(&self) -> bool {
        matches!(self.outcome, GameOutcome::InProgress)
    }

    pub fn exploded_mine(&self) -> Option<Coord2> {
        match self.outcome {
            GameOutcome::Lost { at } => Some(at),
            _ => None,
        }
    }

    /// Whether a flag at `coords` sits on a safe cell of a lost game.
    pub fn is_wrong_flag(&self, coords: Coord2) -> bool {
        matches!(self.outcome, GameOutcome::Lost { .. })
            && self.grid.status_at(coords).is_flagged()
            && !self.grid.content_at(coords).is_mine()
    }

    /// Every misplaced flag, empty unless the game is lost.
    pub fn wrong_flags(&self) -> Vec<Coord2> {
        iter_coords(self.size())
            .filter(|&coords| self.is_wrong_flag(coords))
            .collect()
    }

    /// Primary action: reveal the cell.
    pub fn primary_action(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        self.reveal(coords)
    }

    /// Secondary action: chord on a revealed cell, toggle the flag anywhere else.
    pub fn secondary_action(&mut self, coords: Coord2) -> Result<SecondaryOutcome> {
        let coords = self.grid.validate_coords(coords)?;
        if self.grid.status_at(coords).is_revealed() {
            self.chord_reveal(coords).map(SecondaryOutcome::Chord)
        } else {
            self.toggle_flag(coords).map(SecondaryOutcome::Flag)
        }
    }

    /// Reveals a cell, flooding through zero-count neighbors.
    ///
    /// The first reveal of a game places the mines, keeping `coords` safe.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.grid.validate_coords(coords)?;
        if self.outcome.is_finished() || self.grid.status_at(coords) != CellStatus::Hidden {
            return Ok(RevealOutcome::NoChange);
        }

        if !self.outcome.is_started() {
            self.start(coords)?;
        }

        let outcome = self.grid.reveal_cell(coords);
        let detonated = (outcome == RevealOutcome::HitMine).then_some(coords);
        Ok(self.settle(outcome, detonated))
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.grid.validate_coords(coords)?;
        if self.outcome.is_finished() {
            return Ok(MarkOutcome::NoChange);
        }
        Ok(self.grid.toggle_flag(coords))
    }

    /// Reveals every hidden neighbor of a revealed number once exactly that
    /// many neighbors are flagged.
    ///
    /// All targets are revealed even after one of them turns out to be a
    /// mine; the game is lost on the last mine hit.
    pub fn chord_reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.grid.validate_coords(coords)?;
        if self.outcome.is_finished() {
            return Ok(RevealOutcome::NoChange);
        }
        let Some(targets) = self.grid.chord_targets(coords) else {
            return Ok(RevealOutcome::NoChange);
        };

        let mut detonated = None;
        let mut outcome = RevealOutcome::NoChange;
        for target in targets {
            let step = self.grid.reveal_cell(target);
            if step == RevealOutcome::HitMine {
                detonated = Some(target);
            }
            outcome = outcome | step;
        }
        Ok(self.settle(outcome, detonated))
    }

    fn start(&mut self, protected: Coord2) -> Result<()> {
        let layout = self.generator.generate(self.grid.config(), protected)?;
        self.grid.lay_mines(&layout);
        self.outcome = GameOutcome::InProgress;
        log::debug!("Game started at {:?}", protected);
        Ok(())
    }

    /// Applies the result of a reveal pass to the game state.
    fn settle(&mut self, outcome: RevealOutcome, detonated: Option<Coord2>) -> RevealOutcome {
        if let Some(at) = detonated {
            self.outcome = GameOutcome::Lost { at };
            log::debug!("Game lost, mine at {:?}", at);
            return RevealOutcome::HitMine;
        }
        if outcome.has_update() && self.grid.is_cleared() {
            self.outcome = GameOutcome::Won;
            log::debug!("Game won");
            return RevealOutcome::Won;
        }
        outcome
    }
}
