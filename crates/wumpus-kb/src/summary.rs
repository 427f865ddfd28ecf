//! A printable snapshot of everything a knowledge base holds.

use std::fmt;

use wumpus_core::{Cell, EvidenceKind, HazardKind};

use crate::kb::KnowledgeBase;
use crate::suggest::write_cells;

/// Every evidence and suspect set of a [`KnowledgeBase`], cells listed in
/// canonical order.
///
/// Two summaries compare equal exactly when the knowledge bases they were
/// taken from hold the same facts and suspicions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KbSummary {
    /// Cells where smell was observed.
    pub smelly: Vec<Cell>,
    /// Cells observed without smell.
    pub not_smelly: Vec<Cell>,
    /// Cells where breeze was observed.
    pub breezy: Vec<Cell>,
    /// Cells observed without breeze.
    pub not_breezy: Vec<Cell>,
    /// Cells proven safe.
    pub safe: Vec<Cell>,
    /// Cells explicitly ruled unsafe.
    pub ruled_unsafe: Vec<Cell>,
    /// Current pit suspects.
    pub pit_suspects: Vec<Cell>,
    /// Current monster suspects.
    pub monster_suspects: Vec<Cell>,
}

impl KbSummary {
    pub(crate) fn of(kb: &KnowledgeBase) -> Self {
        let smell = kb.evidence(EvidenceKind::Smell);
        let breeze = kb.evidence(EvidenceKind::Breeze);
        let safety = kb.evidence(EvidenceKind::Safe);
        Self {
            smelly: smell.present().iter().collect(),
            not_smelly: smell.absent().iter().collect(),
            breezy: breeze.present().iter().collect(),
            not_breezy: breeze.absent().iter().collect(),
            safe: safety.present().iter().collect(),
            ruled_unsafe: safety.absent().iter().collect(),
            pit_suspects: kb.suspects(HazardKind::Pit).iter().collect(),
            monster_suspects: kb.suspects(HazardKind::Monster).iter().collect(),
        }
    }
}

impl fmt::Display for KbSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: [(&str, &[Cell]); 8] = [
            ("Smelly rooms", self.smelly.as_slice()),
            ("Breezy rooms", self.breezy.as_slice()),
            ("Not smelly rooms", self.not_smelly.as_slice()),
            ("Not breezy rooms", self.not_breezy.as_slice()),
            ("Safe", self.safe.as_slice()),
            ("Ruled unsafe", self.ruled_unsafe.as_slice()),
            ("Current monster guess", self.monster_suspects.as_slice()),
            ("Current pits guess", self.pit_suspects.as_slice()),
        ];
        for (i, (name, cells)) in rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{name}: ")?;
            write_cells(f, cells)?;
        }
        Ok(())
    }
}
