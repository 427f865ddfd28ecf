//! Adjacency table compliance test helpers.
//!
//! These functions verify that an [`AdjacencyTable`] satisfies the
//! invariants the inference engine relies on. Reused across grid shapes.

use crate::adjacency::AdjacencyTable;
use indexmap::IndexSet;

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(table: &AdjacencyTable) {
    for (cell, nbs) in table.iter() {
        for &nb in nbs {
            assert!(
                table.neighbours(nb).contains(&cell),
                "neighbour symmetry violated: {nb} in N({cell}) but {cell} not in N({nb})"
            );
        }
    }
}

/// Assert that every neighbour is in bounds, distinct, and one step away.
pub fn assert_neighbours_in_bounds(table: &AdjacencyTable) {
    let bounds = table.bounds();
    for (cell, nbs) in table.iter() {
        let unique: IndexSet<_> = nbs.iter().collect();
        assert_eq!(unique.len(), nbs.len(), "duplicate neighbours of {cell}");
        for &nb in nbs {
            assert!(bounds.contains(nb), "{nb} (neighbour of {cell}) out of bounds");
            let manhattan = (nb.x - cell.x).abs() + (nb.y - cell.y).abs();
            assert_eq!(manhattan, 1, "{nb} is not adjacent to {cell}");
        }
    }
}

/// Assert the 2/3/4 degree pattern of an absorbing boundary.
pub fn assert_boundary_degrees(table: &AdjacencyTable) {
    let bounds = table.bounds();
    let (w, h) = (bounds.width() as i32, bounds.height() as i32);
    for (cell, nbs) in table.iter() {
        let x_free = (cell.x > 1) as usize + (cell.x < w) as usize;
        let y_free = (cell.y > 1) as usize + (cell.y < h) as usize;
        assert_eq!(
            nbs.len(),
            x_free + y_free,
            "unexpected degree {} for {cell} on {bounds}",
            nbs.len()
        );
    }
}

/// Assert that the table enumerates exactly `cell_count` unique cells.
pub fn assert_cells_complete(table: &AdjacencyTable) {
    let cells: IndexSet<_> = table.cells().collect();
    assert_eq!(cells.len(), table.bounds().cell_count());
    assert_eq!(table.len(), table.bounds().cell_count());
}

/// Run all compliance checks on a table.
pub fn run_full_compliance(table: &AdjacencyTable) {
    assert_neighbours_symmetric(table);
    assert_neighbours_in_bounds(table);
    assert_boundary_degrees(table);
    assert_cells_complete(table);
}
