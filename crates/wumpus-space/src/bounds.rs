//! Grid dimensions, cell validation and canonical enumeration.

use crate::error::SpaceError;
use std::fmt;
use wumpus_core::Cell;

/// The extent of a cave grid: `[1, width] × [1, height]`.
///
/// Construction rejects empty grids, so every `GridBounds` contains at
/// least one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridBounds {
    width: u32,
    height: u32,
}

impl GridBounds {
    /// Largest accepted dimension. Coordinates are `i32` and one step past
    /// the boundary must stay representable.
    pub const MAX_DIM: u32 = (i32::MAX - 1) as u32;

    /// The 4×4 cave of the classic puzzle.
    pub const CLASSIC: GridBounds = GridBounds {
        width: 4,
        height: 4,
    };

    /// Create bounds for a `width × height` grid.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds [`MAX_DIM`](Self::MAX_DIM).
    ///
    /// # Examples
    ///
    /// ```
    /// use wumpus_space::GridBounds;
    ///
    /// let bounds = GridBounds::new(4, 3).unwrap();
    /// assert_eq!(bounds.cell_count(), 12);
    /// assert!(GridBounds::new(0, 3).is_err());
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if width > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 1 && cell.y >= 1 && cell.x <= self.width as i32 && cell.y <= self.height as i32
    }

    /// Validate `cell`, returning it unchanged when in bounds.
    pub fn check(&self, cell: Cell) -> Result<Cell, SpaceError> {
        if self.contains(cell) {
            Ok(cell)
        } else {
            Err(SpaceError::CellOutOfBounds {
                cell,
                bounds: self.to_string(),
            })
        }
    }

    /// Position of `cell` in the canonical x-major ordering, or `None`
    /// when out of bounds.
    pub fn canonical_rank(&self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        let col = (cell.x - 1) as usize;
        let row = (cell.y - 1) as usize;
        Some(col * self.height as usize + row)
    }

    /// Inverse of [`canonical_rank`](Self::canonical_rank).
    pub fn cell_at(&self, rank: usize) -> Option<Cell> {
        if rank >= self.cell_count() {
            return None;
        }
        let h = self.height as usize;
        Some(Cell::new((rank / h) as i32 + 1, (rank % h) as i32 + 1))
    }

    /// Iterate every cell in canonical x-major order.
    pub fn cells(&self) -> Cells {
        Cells {
            bounds: *self,
            next: 0,
        }
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl fmt::Display for GridBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[1, {}] x [1, {}]", self.width, self.height)
    }
}

/// Iterator over all cells of a grid in canonical order.
///
/// Restartable by calling [`GridBounds::cells`] again; holds no borrow.
#[derive(Clone, Debug)]
pub struct Cells {
    bounds: GridBounds,
    next: usize,
}

impl Iterator for Cells {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.bounds.cell_at(self.next)?;
        self.next += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.bounds.cell_count().saturating_sub(self.next);
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Cells {}
