//! Error types for grid construction and cell validation.

use std::fmt;
use wumpus_core::Cell;

/// Errors arising from grid construction or cell validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// A cell lies outside the grid bounds.
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Attempted to construct a grid with zero cells.
    EmptySpace,
    /// A dimension exceeds the representable coordinate range.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutOfBounds { cell, bounds } => {
                write!(f, "cell {cell} out of bounds: {bounds}")
            }
            Self::EmptySpace => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
