//! Neighbour classification returned by [`KnowledgeBase::suggest`](crate::KnowledgeBase::suggest).

use smallvec::SmallVec;
use std::fmt;
use wumpus_core::Cell;

/// How the neighbours of one cell are currently classified.
///
/// A neighbour that is provably safe appears only in `safe`. Any other
/// neighbour may appear in `pits`, `monsters`, both, or neither.
/// Each list keeps neighbour order (east, west, north, south).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Suggestions {
    /// Neighbours proven free of hazards.
    pub safe: SmallVec<[Cell; 4]>,
    /// Neighbours that may hold a pit.
    pub pits: SmallVec<[Cell; 4]>,
    /// Neighbours that may hold the monster.
    pub monsters: SmallVec<[Cell; 4]>,
}

impl Suggestions {
    /// Whether no neighbour was classified at all.
    pub fn is_empty(&self) -> bool {
        self.safe.is_empty() && self.pits.is_empty() && self.monsters.is_empty()
    }
}

pub(crate) fn write_cells(f: &mut fmt::Formatter<'_>, cells: &[Cell]) -> fmt::Result {
    f.write_str("[")?;
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{cell}")?;
    }
    f.write_str("]")
}

impl fmt::Display for Suggestions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("safe: ")?;
        write_cells(f, &self.safe)?;
        f.write_str("; possible pit: ")?;
        write_cells(f, &self.pits)?;
        f.write_str("; possible monster: ")?;
        write_cells(f, &self.monsters)
    }
}
