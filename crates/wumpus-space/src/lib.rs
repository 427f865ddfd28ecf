//! Grid topology for Wumpus World caves.
//!
//! This crate defines the bounded, 4-connected grid every other crate
//! works over: [`GridBounds`] validates and enumerates cells,
//! [`neighbours`] computes the boundary-clipped adjacency of one cell,
//! and [`AdjacencyTable`] precomputes it for a whole grid so it can be
//! shared read-only. [`CellSet`] is the fixed-size membership arena used
//! for evidence and suspect sets.
//!
//! # Canonical order
//!
//! Cells enumerate x-major: `(1,1), (1,2), ..., (1,h), (2,1), ...`.
//! Neighbours enumerate in the fixed [`Direction::ALL`] order
//! (east, west, north, south).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adjacency;
pub mod bounds;
pub mod cell_set;
pub mod direction;
pub mod error;
pub mod square4;

#[cfg(test)]
pub(crate) mod compliance;

pub use adjacency::AdjacencyTable;
pub use bounds::{Cells, GridBounds};
pub use cell_set::{CellSet, CellSetIter};
pub use direction::Direction;
pub use error::SpaceError;
pub use square4::{adjacency_table, neighbours};
