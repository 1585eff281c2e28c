use smallvec::SmallVec;

use crate::*;

/// Neighbors a chord would reveal.
pub(crate) type ChordTargets = SmallVec<[Coord2; 8]>;

impl Grid {
    /// Flips a hidden cell to flagged and back, revealed cells are ignored.
    pub(crate) fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        match self.status_at(coords) {
            CellStatus::Hidden => {
                self.set_status(coords, CellStatus::Flagged);
                self.add_flag();
                MarkOutcome::Changed
            }
            CellStatus::Flagged => {
                self.set_status(coords, CellStatus::Hidden);
                self.remove_flag();
                MarkOutcome::Changed
            }
            CellStatus::Revealed => MarkOutcome::NoChange,
        }
    }

    /// Whether `coords` is a revealed number whose flagged neighbors match it exactly.
    pub fn is_chordable(&self, coords: Coord2) -> bool {
        match (self.status_at(coords), self.content_at(coords)) {
            (CellStatus::Revealed, CellContent::Safe(count)) => {
                count == self.count_neighbors(coords, CellStatus::is_flagged)
            }
            _ => false,
        }
    }

    /// The hidden, unflagged neighbors to reveal for a chord on `coords`, or
    /// `None` when the flag count does not match the cell's number.
    pub(crate) fn chord_targets(&self, coords: Coord2) -> Option<ChordTargets> {
        if !self.is_chordable(coords) {
            return None;
        }
        Some(
            self.iter_neighbors(coords)
                .filter(|&pos| self.status_at(pos) == CellStatus::Hidden)
                .collect(),
        )
    }
}
