//! Per-cell perception labels.

use std::fmt;

use wumpus_core::{Cell, EvidenceKind, HazardKind, PerceptKind};
use wumpus_space::Cells;

use crate::kb::KnowledgeBase;

/// What is known or suspected about one cell.
///
/// Rendered as up to four comma-joined tags in fixed order: `S` (smelly),
/// `B` (breezy), `P?` (pit suspect), `W?` (monster suspect).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PerceptLabel {
    /// Smell observed here.
    pub smelly: bool,
    /// Breeze observed here.
    pub breezy: bool,
    /// Currently suspected of holding a pit.
    pub pit_suspect: bool,
    /// Currently suspected of holding the monster.
    pub monster_suspect: bool,
}

impl PerceptLabel {
    /// Whether no tag applies.
    pub fn is_empty(&self) -> bool {
        !(self.smelly || self.breezy || self.pit_suspect || self.monster_suspect)
    }

    fn percept(&self, kind: PerceptKind) -> bool {
        match kind {
            PerceptKind::Smell => self.smelly,
            PerceptKind::Breeze => self.breezy,
        }
    }

    fn suspect(&self, kind: HazardKind) -> bool {
        match kind {
            HazardKind::Pit => self.pit_suspect,
            HazardKind::Monster => self.monster_suspect,
        }
    }

    /// The applicable tags, in label order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        let percepts = PerceptKind::ALL
            .into_iter()
            .filter(|&p| self.percept(p))
            .map(PerceptKind::tag);
        let suspects = HazardKind::ALL
            .into_iter()
            .filter(|&h| self.suspect(h))
            .map(HazardKind::suspect_tag);
        percepts.chain(suspects)
    }
}

impl fmt::Display for PerceptLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tag) in self.tags().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(tag)?;
        }
        Ok(())
    }
}

/// Lazy iterator over the labelled cells of a knowledge base, in
/// canonical order. Cells with an empty label are skipped.
///
/// Returned by [`KnowledgeBase::perceptions`]; call it again for a fresh
/// pass reflecting the current state.
pub struct Perceptions<'a> {
    kb: &'a KnowledgeBase,
    cells: Cells,
}

impl<'a> Perceptions<'a> {
    pub(crate) fn new(kb: &'a KnowledgeBase) -> Self {
        Self {
            kb,
            cells: kb.bounds().cells(),
        }
    }
}

impl Iterator for Perceptions<'_> {
    type Item = (Cell, PerceptLabel);

    fn next(&mut self) -> Option<Self::Item> {
        for cell in self.cells.by_ref() {
            let label = PerceptLabel {
                smelly: self.kb.ask(cell, EvidenceKind::Smell),
                breezy: self.kb.ask(cell, EvidenceKind::Breeze),
                pit_suspect: self.kb.is_suspect(cell, HazardKind::Pit),
                monster_suspect: self.kb.is_suspect(cell, HazardKind::Monster),
            };
            if !label.is_empty() {
                return Some((cell, label));
            }
        }
        None
    }
}
