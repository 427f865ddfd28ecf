//! Test utilities for Wumpus World development.
//!
//! Provides a [`ScriptedWorld`] oracle with hand-placed hazards and
//! helpers that drive a [`KnowledgeBase`] through the per-turn sequence
//! without a full agent.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{explore, observe, record_visit, ScriptedWorld};

use std::sync::Arc;

use wumpus_core::Cell;
use wumpus_kb::KnowledgeBase;
use wumpus_space::{AdjacencyTable, GridBounds};

/// Shorthand for `Cell::new(x, y)`.
pub fn c(x: i32, y: i32) -> Cell {
    Cell::new(x, y)
}

/// An empty knowledge base over a `width × height` grid.
///
/// Panics on invalid bounds; tests pass literals.
pub fn kb(width: u32, height: u32) -> KnowledgeBase {
    let bounds = GridBounds::new(width, height).expect("test grid bounds must be valid");
    KnowledgeBase::with_adjacency(Arc::new(AdjacencyTable::new(bounds)))
}
