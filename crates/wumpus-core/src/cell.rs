//! The [`Cell`] grid coordinate.

use std::fmt;

/// A cell on the cave grid, identified solely by its coordinate.
///
/// Coordinates are 1-based: on a `width × height` grid, valid cells
/// satisfy `1 <= x <= width` and `1 <= y <= height`. `x` grows east and
/// `y` grows north. Signed components let neighbour arithmetic step past
/// the boundary before clipping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column, growing east.
    pub x: i32,
    /// Row, growing north.
    pub y: i32,
}

impl Cell {
    /// The cell every agent starts in.
    pub const START: Cell = Cell { x: 1, y: 1 };

    /// Create a cell at `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell displaced by `(dx, dy)`. No bounds are checked.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Cell> for (i32, i32) {
    fn from(cell: Cell) -> Self {
        (cell.x, cell.y)
    }
}
