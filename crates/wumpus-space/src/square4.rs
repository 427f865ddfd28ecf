//! 4-connected neighbourhood on a bounded grid.
//!
//! Neighbours beyond the boundary are dropped: corner cells have 2
//! neighbours, edge cells 3, interior cells 4.

use crate::adjacency::AdjacencyTable;
use crate::bounds::GridBounds;
use crate::direction::Direction;
use crate::error::SpaceError;
use smallvec::SmallVec;
use wumpus_core::Cell;

/// The axis-aligned neighbours of `cell` that lie inside `bounds`.
///
/// Returned in the fixed [`Direction::ALL`] order (east, west, north,
/// south). `cell` itself is not validated; an out-of-bounds cell simply
/// yields whichever of its neighbours happen to be inside.
///
/// # Examples
///
/// ```
/// use wumpus_core::Cell;
/// use wumpus_space::{neighbours, GridBounds};
///
/// let b = GridBounds::CLASSIC;
/// assert_eq!(
///     neighbours(Cell::new(1, 1), &b).as_slice(),
///     &[Cell::new(2, 1), Cell::new(1, 2)]
/// );
/// assert_eq!(neighbours(Cell::new(2, 2), &b).len(), 4);
/// ```
pub fn neighbours(cell: Cell, bounds: &GridBounds) -> SmallVec<[Cell; 4]> {
    Direction::ALL
        .iter()
        .map(|d| d.step(cell))
        .filter(|n| bounds.contains(*n))
        .collect()
}

/// Build the adjacency table for a `width × height` grid.
///
/// Fails only on non-positive or oversized bounds.
pub fn adjacency_table(width: u32, height: u32) -> Result<AdjacencyTable, SpaceError> {
    Ok(AdjacencyTable::new(GridBounds::new(width, height)?))
}
