//! The interface through which ground truth is read from a world model.

use crate::cell::Cell;

/// Read-only ground-truth queries over a cave.
///
/// Implemented by world models; consumed by the agent when it perceives
/// the cell it stands in. All predicates are keyed by the same coordinate
/// space as the grid topology.
pub trait WorldOracle {
    /// Whether `cell` holds a pit.
    fn is_pit(&self, cell: Cell) -> bool;

    /// Whether a breeze can be felt in `cell`.
    fn is_breezy(&self, cell: Cell) -> bool;

    /// Whether the monster can be smelled in `cell`.
    fn is_smelly(&self, cell: Cell) -> bool;

    /// Whether `cell` holds the monster.
    fn is_monster(&self, cell: Cell) -> bool;

    /// Whether `cell` holds the gold.
    fn is_gold(&self, cell: Cell) -> bool;
}
