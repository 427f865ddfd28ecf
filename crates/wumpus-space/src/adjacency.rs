//! Precomputed adjacency for a whole grid.

use crate::bounds::{Cells, GridBounds};
use crate::square4;
use smallvec::SmallVec;
use wumpus_core::Cell;

/// Mapping from every cell of a grid to its neighbours.
///
/// Built once from [`GridBounds`] and then only read, so it is typically
/// wrapped in an `Arc` and shared between the world model and each
/// agent's knowledge base. Lookup is O(1) by canonical rank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyTable {
    bounds: GridBounds,
    neighbours: Vec<SmallVec<[Cell; 4]>>,
}

impl AdjacencyTable {
    /// Build the table covering every cell of `bounds`.
    pub fn new(bounds: GridBounds) -> Self {
        let neighbours = bounds
            .cells()
            .map(|cell| square4::neighbours(cell, &bounds))
            .collect();
        Self { bounds, neighbours }
    }

    /// The grid this table covers.
    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Number of cells in the table.
    pub fn len(&self) -> usize {
        self.neighbours.len()
    }

    /// Always returns `false`; grids are never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `cell` is a key of this table.
    pub fn contains(&self, cell: Cell) -> bool {
        self.bounds.contains(cell)
    }

    /// Neighbours of `cell` in east, west, north, south order.
    ///
    /// Out-of-bounds cells have no entry and yield an empty slice.
    pub fn neighbours(&self, cell: Cell) -> &[Cell] {
        self.bounds
            .canonical_rank(cell)
            .map(|rank| self.neighbours[rank].as_slice())
            .unwrap_or(&[])
    }

    /// Whether `a` and `b` share an edge.
    pub fn are_adjacent(&self, a: Cell, b: Cell) -> bool {
        self.neighbours(a).contains(&b)
    }

    /// Every cell in canonical order.
    pub fn cells(&self) -> Cells {
        self.bounds.cells()
    }

    /// `(cell, neighbours)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &[Cell])> + '_ {
        self.bounds
            .cells()
            .zip(self.neighbours.iter().map(|n| n.as_slice()))
    }
}

impl Default for AdjacencyTable {
    fn default() -> Self {
        Self::new(GridBounds::CLASSIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;

    #[test]
    fn covers_every_cell() {
        let t = AdjacencyTable::new(GridBounds::new(3, 5).unwrap());
        assert_eq!(t.len(), 15);
        assert_eq!(t.iter().count(), 15);
        for cell in t.cells() {
            assert!(!t.neighbours(cell).is_empty());
        }
    }

    #[test]
    fn classic_degrees() {
        let t = AdjacencyTable::default();
        assert_eq!(t.neighbours(Cell::new(1, 1)).len(), 2);
        assert_eq!(t.neighbours(Cell::new(1, 2)).len(), 3);
        assert_eq!(t.neighbours(Cell::new(2, 2)).len(), 4);
    }

    #[test]
    fn out_of_bounds_lookup_is_empty() {
        let t = AdjacencyTable::default();
        assert!(t.neighbours(Cell::new(0, 1)).is_empty());
        assert!(t.neighbours(Cell::new(5, 5)).is_empty());
        assert!(!t.contains(Cell::new(5, 5)));
    }

    #[test]
    fn adjacency_is_edge_sharing() {
        let t = AdjacencyTable::default();
        assert!(t.are_adjacent(Cell::new(1, 1), Cell::new(2, 1)));
        assert!(t.are_adjacent(Cell::new(2, 1), Cell::new(1, 1)));
        assert!(!t.are_adjacent(Cell::new(1, 1), Cell::new(2, 2)));
        assert!(!t.are_adjacent(Cell::new(1, 1), Cell::new(1, 1)));
    }

    #[test]
    fn matches_direct_computation() {
        let b = GridBounds::new(4, 6).unwrap();
        let t = AdjacencyTable::new(b);
        for (cell, nbs) in t.iter() {
            assert_eq!(nbs, square4::neighbours(cell, &b).as_slice());
        }
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_classic() {
        compliance::run_full_compliance(&AdjacencyTable::default());
    }

    #[test]
    fn compliance_rectangular() {
        compliance::run_full_compliance(&AdjacencyTable::new(GridBounds::new(7, 3).unwrap()));
    }

    #[test]
    fn compliance_single_row() {
        compliance::run_full_compliance(&AdjacencyTable::new(GridBounds::new(6, 1).unwrap()));
    }

    #[test]
    fn compliance_single_cell() {
        compliance::run_full_compliance(&AdjacencyTable::new(GridBounds::new(1, 1).unwrap()));
    }
}
