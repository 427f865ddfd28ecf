//! The ring inference rule shared by pit and monster deduction.

use crate::evidence::EvidencePair;
use wumpus_core::Cell;

/// Decide whether the cell surrounded by `ring` may hold the hazard that
/// `percept` announces.
///
/// A hazard produces its percept in every adjacent cell, so one
/// neighbour observed without the percept clears the cell outright. A
/// neighbour observed with the percept only raises suspicion: the scan
/// continues so that a later clean neighbour can still clear it. With no
/// signal in either direction there is no basis to suspect anything.
pub(crate) fn ring_suspects(ring: &[Cell], percept: &EvidencePair) -> bool {
    let mut suspected = false;
    for &neighbour in ring {
        if percept.is_absent(neighbour) {
            return false;
        } else if percept.is_present(neighbour) {
            suspected = true;
        }
    }
    suspected
}
