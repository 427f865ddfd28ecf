//! [`CellSet`]: a fixed-size membership bitset over a grid.

use crate::bounds::GridBounds;
use std::fmt;
use wumpus_core::Cell;

/// A set of cells backed by one bit per grid cell.
///
/// The domain is the fixed, small grid, so membership is an O(1) bit test
/// indexed by canonical rank and iteration yields cells in canonical
/// order. Cells outside the grid are never members; inserting one is a
/// caller bug and is ignored in release builds.
#[derive(Clone, PartialEq, Eq)]
pub struct CellSet {
    bounds: GridBounds,
    bits: Vec<u64>,
    len: usize,
}

impl CellSet {
    const BITS_PER_WORD: usize = 64;

    /// Create an empty set over `bounds`.
    pub fn new(bounds: GridBounds) -> Self {
        let words = bounds.cell_count().div_ceil(Self::BITS_PER_WORD);
        Self {
            bounds,
            bits: vec![0; words],
            len: 0,
        }
    }

    /// Create a set over `bounds` holding `cells`.
    pub fn from_cells(bounds: GridBounds, cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut set = Self::new(bounds);
        set.extend(cells);
        set
    }

    /// The grid this set ranges over.
    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Insert `cell`. Returns `true` if it was not already present.
    pub fn insert(&mut self, cell: Cell) -> bool {
        let Some(rank) = self.bounds.canonical_rank(cell) else {
            debug_assert!(false, "cell {cell} outside {}", self.bounds);
            return false;
        };
        let word = rank / Self::BITS_PER_WORD;
        let mask = 1u64 << (rank % Self::BITS_PER_WORD);
        if self.bits[word] & mask != 0 {
            return false;
        }
        self.bits[word] |= mask;
        self.len += 1;
        true
    }

    /// Whether `cell` is a member.
    pub fn contains(&self, cell: Cell) -> bool {
        match self.bounds.canonical_rank(cell) {
            Some(rank) => {
                let word = rank / Self::BITS_PER_WORD;
                self.bits[word] & (1u64 << (rank % Self::BITS_PER_WORD)) != 0
            }
            None => false,
        }
    }

    /// Remove every member.
    pub fn clear(&mut self) {
        self.bits.fill(0);
        self.len = 0;
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether every member of `self` is also in `other`.
    pub fn is_subset(&self, other: &CellSet) -> bool {
        self.iter().all(|cell| other.contains(cell))
    }

    /// Iterate members in canonical order.
    pub fn iter(&self) -> CellSetIter<'_> {
        CellSetIter {
            set: self,
            rank: 0,
        }
    }
}

impl Extend<Cell> for CellSet {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        for cell in iter {
            self.insert(cell);
        }
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = Cell;
    type IntoIter = CellSetIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the members of a [`CellSet`], in canonical order.
pub struct CellSetIter<'a> {
    set: &'a CellSet,
    rank: usize,
}

impl Iterator for CellSetIter<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        let total = self.set.bounds.cell_count();
        while self.rank < total {
            let rank = self.rank;
            let word = self.set.bits[rank / CellSet::BITS_PER_WORD];
            if word == 0 {
                // Skip the rest of an empty word.
                self.rank = (rank / CellSet::BITS_PER_WORD + 1) * CellSet::BITS_PER_WORD;
                continue;
            }
            self.rank += 1;
            if word & (1u64 << (rank % CellSet::BITS_PER_WORD)) != 0 {
                return self.set.bounds.cell_at(rank);
            }
        }
        None
    }
}
