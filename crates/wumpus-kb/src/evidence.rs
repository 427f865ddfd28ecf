//! Accumulated percept evidence.
//!
//! Every [`EvidenceKind`] owns one [`EvidencePair`]: the cells where the
//! fact was observed and the cells where its absence was observed. Both
//! halves only ever grow. A single observation per cell keeps the halves
//! disjoint.

use wumpus_core::{Cell, EvidenceKind, PerceptKind};
use wumpus_space::{CellSet, GridBounds};

/// Positive and negative observations of one evidence kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvidencePair {
    present: CellSet,
    absent: CellSet,
}

impl EvidencePair {
    /// An empty pair over `bounds`.
    pub fn new(bounds: GridBounds) -> Self {
        Self {
            present: CellSet::new(bounds),
            absent: CellSet::new(bounds),
        }
    }

    /// Record one observation. Returns `true` if it was new.
    pub fn record(&mut self, cell: Cell, present: bool) -> bool {
        if present {
            self.present.insert(cell)
        } else {
            self.absent.insert(cell)
        }
    }

    /// Whether the fact was observed at `cell`.
    pub fn is_present(&self, cell: Cell) -> bool {
        self.present.contains(cell)
    }

    /// Whether the fact's absence was observed at `cell`.
    pub fn is_absent(&self, cell: Cell) -> bool {
        self.absent.contains(cell)
    }

    /// Cells where the fact was observed.
    pub fn present(&self) -> &CellSet {
        &self.present
    }

    /// Cells where the fact's absence was observed.
    pub fn absent(&self) -> &CellSet {
        &self.absent
    }
}

/// The three evidence pairs, addressed by [`EvidenceKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evidence {
    smell: EvidencePair,
    breeze: EvidencePair,
    safety: EvidencePair,
}

impl Evidence {
    /// Empty evidence over `bounds`.
    pub fn new(bounds: GridBounds) -> Self {
        Self {
            smell: EvidencePair::new(bounds),
            breeze: EvidencePair::new(bounds),
            safety: EvidencePair::new(bounds),
        }
    }

    /// The pair for `kind`.
    pub fn pair(&self, kind: EvidenceKind) -> &EvidencePair {
        match kind {
            EvidenceKind::Smell => &self.smell,
            EvidenceKind::Breeze => &self.breeze,
            EvidenceKind::Safe => &self.safety,
        }
    }

    /// Mutable access to the pair for `kind`.
    pub fn pair_mut(&mut self, kind: EvidenceKind) -> &mut EvidencePair {
        match kind {
            EvidenceKind::Smell => &mut self.smell,
            EvidenceKind::Breeze => &mut self.breeze,
            EvidenceKind::Safe => &mut self.safety,
        }
    }

    /// The pair for a percept.
    pub fn percept(&self, kind: PerceptKind) -> &EvidencePair {
        self.pair(kind.into())
    }

    /// Cells proven safe.
    pub fn safe(&self) -> &CellSet {
        self.safety.present()
    }
}
