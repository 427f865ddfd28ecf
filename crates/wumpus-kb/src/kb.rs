//! The [`KnowledgeBase`]: evidence ingestion and fixed-point deduction.

use std::sync::Arc;

use tracing::{debug, trace};
use wumpus_core::{Cell, EvidenceKind, HazardKind, KbError};
use wumpus_space::{AdjacencyTable, CellSet, GridBounds};

use crate::config::{ConfigError, KbConfig};
use crate::evidence::{Evidence, EvidencePair};
use crate::inference::ring_suspects;
use crate::perception::Perceptions;
use crate::suggest::Suggestions;
use crate::summary::KbSummary;

/// Per-hazard suspect sets, rebuilt from scratch by every
/// [`KnowledgeBase::update_kb`].
#[derive(Clone, Debug)]
struct Suspects {
    pits: CellSet,
    monsters: CellSet,
}

impl Suspects {
    fn new(bounds: GridBounds) -> Self {
        Self {
            pits: CellSet::new(bounds),
            monsters: CellSet::new(bounds),
        }
    }

    fn get(&self, hazard: HazardKind) -> &CellSet {
        match hazard {
            HazardKind::Pit => &self.pits,
            HazardKind::Monster => &self.monsters,
        }
    }

    fn get_mut(&mut self, hazard: HazardKind) -> &mut CellSet {
        match hazard {
            HazardKind::Pit => &mut self.pits,
            HazardKind::Monster => &mut self.monsters,
        }
    }

    fn clear(&mut self) {
        self.pits.clear();
        self.monsters.clear();
    }
}

/// Percept evidence and the deductions drawn from it, for one agent.
///
/// Created empty apart from the shared adjacency table. Evidence and the
/// safe set grow monotonically through [`tell`](Self::tell) and
/// [`tell_safe`](Self::tell_safe); the suspect sets are derived and are
/// replaced on every [`update_kb`](Self::update_kb).
///
/// Cells passed to any method are expected to come from the adjacency
/// table's grid. Out-of-bounds cells are not defended against beyond
/// having no neighbours and never being members of any set.
#[derive(Clone, Debug)]
pub struct KnowledgeBase {
    rooms: Arc<AdjacencyTable>,
    evidence: Evidence,
    suspects: Suspects,
}

impl KnowledgeBase {
    /// Create an empty knowledge base for the configured grid.
    pub fn new(config: &KbConfig) -> Result<Self, ConfigError> {
        let bounds = config.validate()?;
        Ok(Self::with_adjacency(Arc::new(AdjacencyTable::new(bounds))))
    }

    /// Create an empty knowledge base over an existing adjacency table.
    pub fn with_adjacency(rooms: Arc<AdjacencyTable>) -> Self {
        let bounds = rooms.bounds();
        Self {
            rooms,
            evidence: Evidence::new(bounds),
            suspects: Suspects::new(bounds),
        }
    }

    /// The adjacency table this knowledge base reasons over.
    pub fn adjacency(&self) -> &Arc<AdjacencyTable> {
        &self.rooms
    }

    /// The grid bounds.
    pub fn bounds(&self) -> GridBounds {
        self.rooms.bounds()
    }

    // ── Evidence ingestion ──────────────────────────────────────

    /// Record that `kind` was (or was not) observed at `cell`.
    ///
    /// Recording the same fact twice has no further effect.
    /// `tell(cell, false, EvidenceKind::Safe)` marks the cell as ruled
    /// unsafe, which is reported but takes no part in inference.
    pub fn tell(&mut self, cell: Cell, present: bool, kind: EvidenceKind) {
        if self.evidence.pair_mut(kind).record(cell, present) {
            trace!(%cell, present, %kind, "evidence recorded");
        }
    }

    /// Like [`tell`](Self::tell), with the kind given as a tag.
    ///
    /// An unknown tag is a caller bug; the error is returned before
    /// anything is recorded.
    pub fn tell_tagged(&mut self, cell: Cell, present: bool, tag: &str) -> Result<(), KbError> {
        let kind: EvidenceKind = tag.parse()?;
        self.tell(cell, present, kind);
        Ok(())
    }

    /// Record that `cell` is safe, typically because the agent survived
    /// visiting it.
    pub fn tell_safe(&mut self, cell: Cell) {
        self.tell(cell, true, EvidenceKind::Safe);
    }

    // ── Lookups ─────────────────────────────────────────────────

    /// Whether `cell` is in the positive evidence set of `kind`.
    ///
    /// Pure lookup, no inference.
    pub fn ask(&self, cell: Cell, kind: EvidenceKind) -> bool {
        self.evidence.pair(kind).is_present(cell)
    }

    /// Like [`ask`](Self::ask), with the kind given as a tag.
    pub fn ask_tagged(&self, cell: Cell, tag: &str) -> Result<bool, KbError> {
        let kind: EvidenceKind = tag.parse()?;
        Ok(self.ask(cell, kind))
    }

    /// The recorded evidence for `kind`.
    pub fn evidence(&self, kind: EvidenceKind) -> &EvidencePair {
        self.evidence.pair(kind)
    }

    /// Cells proven safe so far.
    pub fn safe_cells(&self) -> &CellSet {
        self.evidence.safe()
    }

    /// Cells flagged as possibly holding `hazard` by the last
    /// [`update_kb`](Self::update_kb).
    pub fn suspects(&self, hazard: HazardKind) -> &CellSet {
        self.suspects.get(hazard)
    }

    /// Whether the last [`update_kb`](Self::update_kb) flagged `cell` for
    /// `hazard`.
    pub fn is_suspect(&self, cell: Cell, hazard: HazardKind) -> bool {
        self.suspects.get(hazard).contains(cell)
    }

    // ── Deduction ───────────────────────────────────────────────

    /// Whether `cell` can be proven free of both hazards.
    ///
    /// A cell that may hold a hazard is never safe. Otherwise it is safe
    /// when it was visited and felt neither smell nor breeze, or when every
    /// one of its neighbours is already known safe.
    pub fn ask_if_safe(&self, cell: Cell, visited: bool) -> bool {
        if self.infers_monster(cell) || self.infers_pit(cell) {
            return false;
        }
        let quiet = visited
            && !self.ask(cell, EvidenceKind::Breeze)
            && !self.ask(cell, EvidenceKind::Smell);
        let safe = self.evidence.safe();
        quiet || self.rooms.neighbours(cell).iter().all(|&n| safe.contains(n))
    }

    /// Whether the evidence around `cell` points at `hazard`.
    ///
    /// Known-safe cells are never suspected.
    pub fn infers_hazard(&self, cell: Cell, hazard: HazardKind) -> bool {
        if self.evidence.safe().contains(cell) {
            return false;
        }
        ring_suspects(
            self.rooms.neighbours(cell),
            self.evidence.percept(hazard.percept()),
        )
    }

    /// Whether the smell evidence around `cell` points at the monster.
    pub fn infers_monster(&self, cell: Cell) -> bool {
        self.infers_hazard(cell, HazardKind::Monster)
    }

    /// Whether the breeze evidence around `cell` points at a pit.
    pub fn infers_pit(&self, cell: Cell) -> bool {
        self.infers_hazard(cell, HazardKind::Pit)
    }

    /// Propagate safety outward from the visited cells until no more cells
    /// can be proven safe. Returns how many cells were added.
    ///
    /// Each pass tests every not-yet-safe neighbour of every visited cell.
    /// The safe set only grows and is bounded by the grid, so the loop
    /// terminates.
    pub fn update_safety(&mut self, visited: &[Cell]) -> usize {
        let rooms = Arc::clone(&self.rooms);
        let was_visited = CellSet::from_cells(rooms.bounds(), visited.iter().copied());
        let mut added = 0;
        let mut passes = 0;
        let mut changed = true;
        while changed {
            changed = false;
            passes += 1;
            for &room in visited {
                for &n in rooms.neighbours(room) {
                    if self.evidence.safe().contains(n) {
                        continue;
                    }
                    if self.ask_if_safe(n, was_visited.contains(n)) {
                        self.tell_safe(n);
                        trace!(cell = %n, "proven safe");
                        added += 1;
                        changed = true;
                    }
                }
            }
        }
        debug!(passes, added, safe = self.evidence.safe().len(), "safety propagation converged");
        added
    }

    /// Rebuild both suspect sets from scratch over every cell of the grid.
    /// Returns the total number of flagged cells.
    ///
    /// Stale suspicions must not survive new evidence, so nothing carries
    /// over from the previous call. Run after
    /// [`update_safety`](Self::update_safety): hazard inference defers to
    /// the safe set.
    pub fn update_kb(&mut self) -> usize {
        self.suspects.clear();
        let mut passes = 0;
        let mut changed = true;
        while changed {
            changed = false;
            passes += 1;
            for cell in self.rooms.cells() {
                for hazard in HazardKind::ALL {
                    if !self.suspects.get(hazard).contains(cell) && self.infers_hazard(cell, hazard)
                    {
                        self.suspects.get_mut(hazard).insert(cell);
                        trace!(%cell, %hazard, "suspected");
                        changed = true;
                    }
                }
            }
        }
        let pits = self.suspects.pits.len();
        let monsters = self.suspects.monsters.len();
        debug!(passes, pits, monsters, "suspect refresh converged");
        pits + monsters
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Classify the neighbours of `cell`: provably safe, or else possibly
    /// holding a pit and/or the monster. Read-only.
    pub fn suggest(&self, cell: Cell, visited: &[Cell]) -> Suggestions {
        let mut out = Suggestions::default();
        for &room in self.rooms.neighbours(cell) {
            if self.ask_if_safe(room, visited.contains(&room)) {
                out.safe.push(room);
            } else {
                if self.infers_monster(room) {
                    out.monsters.push(room);
                }
                if self.infers_pit(room) {
                    out.pits.push(room);
                }
            }
        }
        out
    }

    /// Label every cell that is smelly, breezy or currently suspected.
    ///
    /// Computed lazily and afresh on each call.
    pub fn perceptions(&self) -> Perceptions<'_> {
        Perceptions::new(self)
    }

    /// Snapshot of every evidence and suspect set.
    pub fn summary(&self) -> KbSummary {
        KbSummary::of(self)
    }
}

impl Default for KnowledgeBase {
    /// An empty knowledge base over the classic 4×4 grid.
    fn default() -> Self {
        Self::with_adjacency(Arc::new(AdjacencyTable::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Cell {
        Cell::new(x, y)
    }

    /// Record a survived visit with the given percepts.
    fn visit(kb: &mut KnowledgeBase, cell: Cell, smell: bool, breeze: bool) {
        kb.tell(cell, smell, EvidenceKind::Smell);
        kb.tell(cell, breeze, EvidenceKind::Breeze);
        kb.tell_safe(cell);
    }

    // ── Ingestion ───────────────────────────────────────────────

    #[test]
    fn tell_then_ask() {
        let mut kb = KnowledgeBase::default();
        kb.tell(c(1, 2), true, EvidenceKind::Smell);
        assert!(kb.ask(c(1, 2), EvidenceKind::Smell));
        assert!(!kb.ask(c(1, 2), EvidenceKind::Breeze));
        assert!(!kb.ask(c(1, 2), EvidenceKind::Safe));
    }

    #[test]
    fn negative_tell_is_not_a_positive_ask() {
        let mut kb = KnowledgeBase::default();
        kb.tell(c(1, 2), false, EvidenceKind::Breeze);
        assert!(!kb.ask(c(1, 2), EvidenceKind::Breeze));
        assert!(kb.evidence(EvidenceKind::Breeze).is_absent(c(1, 2)));
    }

    #[test]
    fn tell_is_idempotent() {
        let mut kb = KnowledgeBase::default();
        kb.tell(c(2, 2), true, EvidenceKind::Breeze);
        let before = kb.summary();
        kb.tell(c(2, 2), true, EvidenceKind::Breeze);
        assert_eq!(kb.summary(), before);
    }

    #[test]
    fn tell_safe_is_idempotent() {
        let mut kb = KnowledgeBase::default();
        kb.tell_safe(c(1, 1));
        kb.tell_safe(c(1, 1));
        assert_eq!(kb.safe_cells().len(), 1);
        assert!(kb.ask(c(1, 1), EvidenceKind::Safe));
    }

    #[test]
    fn tell_safe_false_rules_unsafe() {
        let mut kb = KnowledgeBase::default();
        kb.tell(c(3, 3), false, EvidenceKind::Safe);
        assert!(!kb.ask(c(3, 3), EvidenceKind::Safe));
        assert!(kb.evidence(EvidenceKind::Safe).is_absent(c(3, 3)));
    }

    #[test]
    fn tagged_tell_accepts_known_tags() {
        let mut kb = KnowledgeBase::default();
        kb.tell_tagged(c(1, 1), true, "SMELL").unwrap();
        kb.tell_tagged(c(1, 1), true, "BREEZE").unwrap();
        kb.tell_tagged(c(1, 1), true, "SAFE").unwrap();
        assert!(kb.ask_tagged(c(1, 1), "SMELL").unwrap());
        assert!(kb.ask_tagged(c(1, 1), "BREEZE").unwrap());
        assert!(kb.ask_tagged(c(1, 1), "SAFE").unwrap());
    }

    #[test]
    fn tagged_tell_rejects_unknown_tag_without_recording() {
        let mut kb = KnowledgeBase::default();
        let before = kb.summary();
        let err = kb.tell_tagged(c(1, 1), true, "GOLD").unwrap_err();
        assert_eq!(err, KbError::InvalidEvidenceKind { tag: "GOLD".into() });
        assert_eq!(kb.summary(), before);
        assert!(kb.ask_tagged(c(1, 1), "GOLD").is_err());
    }

    // ── Hazard inference ────────────────────────────────────────

    #[test]
    fn no_evidence_no_hazard() {
        let kb = KnowledgeBase::default();
        for cell in kb.adjacency().cells() {
            assert!(!kb.infers_pit(cell));
            assert!(!kb.infers_monster(cell));
        }
    }

    #[test]
    fn breeze_neighbour_suspects_pit_only() {
        let mut kb = KnowledgeBase::default();
        kb.tell(c(1, 2), true, EvidenceKind::Breeze);
        assert!(kb.infers_pit(c(2, 2)));
        assert!(kb.infers_pit(c(1, 3)));
        assert!(kb.infers_pit(c(1, 1)));
        assert!(!kb.infers_monster(c(2, 2)));
        // Not adjacent.
        assert!(!kb.infers_pit(c(3, 3)));
    }

    #[test]
    fn smell_neighbour_suspects_monster_only() {
        let mut kb = KnowledgeBase::default();
        kb.tell(c(2, 1), true, EvidenceKind::Smell);
        assert!(kb.infers_monster(c(3, 1)));
        assert!(!kb.infers_pit(c(3, 1)));
    }

    #[test]
    fn one_clean_neighbour_clears_suspicion() {
        let mut kb = KnowledgeBase::default();
        kb.tell(c(1, 2), true, EvidenceKind::Breeze);
        assert!(kb.infers_pit(c(2, 2)));
        kb.tell(c(2, 3), false, EvidenceKind::Breeze);
        assert!(!kb.infers_pit(c(2, 2)));
    }

    #[test]
    fn clean_neighbour_overrides_earlier_positive_in_scan() {
        // (2,2) scans east, west, north, south: (3,2), (1,2), (2,3), (2,1).
        // Smell at (1,2) is seen before the clean south neighbour (2,1).
        let mut kb = KnowledgeBase::default();
        kb.tell(c(1, 2), true, EvidenceKind::Smell);
        kb.tell(c(2, 1), false, EvidenceKind::Smell);
        assert!(!kb.infers_monster(c(2, 2)));
    }

    #[test]
    fn safe_cell_is_never_suspected() {
        let mut kb = KnowledgeBase::default();
        kb.tell(c(1, 2), true, EvidenceKind::Breeze);
        kb.tell(c(1, 2), true, EvidenceKind::Smell);
        kb.tell_safe(c(2, 2));
        assert!(!kb.infers_pit(c(2, 2)));
        assert!(!kb.infers_monster(c(2, 2)));
    }

    // ── Safety predicate ────────────────────────────────────────

    #[test]
    fn quiet_visited_cell_is_safe() {
        let mut kb = KnowledgeBase::default();
        kb.tell(c(1, 2), false, EvidenceKind::Smell);
        kb.tell(c(1, 2), false, EvidenceKind::Breeze);
        assert!(kb.ask_if_safe(c(1, 2), true));
    }

    #[test]
    fn quiet_cell_needs_the_visit() {
        let mut kb = KnowledgeBase::default();
        kb.tell(c(1, 2), false, EvidenceKind::Smell);
        kb.tell(c(1, 2), false, EvidenceKind::Breeze);
        assert!(!kb.ask_if_safe(c(1, 2), false));
    }

    #[test]
    fn breezy_visited_cell_needs_safe_ring() {
        let mut kb = KnowledgeBase::default();
        kb.tell(c(1, 1), true, EvidenceKind::Breeze);
        assert!(!kb.ask_if_safe(c(1, 1), true));
        kb.tell_safe(c(2, 1));
        kb.tell_safe(c(1, 2));
        assert!(kb.ask_if_safe(c(1, 1), true));
    }

    #[test]
    fn suspected_cell_is_not_safe_even_with_safe_ring() {
        let mut kb = KnowledgeBase::default();
        kb.tell(c(2, 1), true, EvidenceKind::Breeze);
        kb.tell_safe(c(2, 1));
        kb.tell_safe(c(1, 2));
        // (1,1) has both neighbours safe but (2,1) is breezy.
        assert!(kb.infers_pit(c(1, 1)));
        assert!(!kb.ask_if_safe(c(1, 1), false));
    }

    // ── Safety propagation ──────────────────────────────────────

    #[test]
    fn quiet_start_alone_does_not_prove_unvisited_neighbours() {
        // Neither hazard is suspected at (2,1) or (1,2), but neither was
        // visited and neither has an all-safe ring.
        let mut kb = KnowledgeBase::default();
        visit(&mut kb, c(1, 1), false, false);
        assert_eq!(kb.update_safety(&[c(1, 1)]), 0);
        assert!(!kb.safe_cells().contains(c(2, 1)));
        assert!(!kb.infers_pit(c(2, 1)));
        assert!(!kb.infers_monster(c(2, 1)));
    }

    #[test]
    fn quiet_visit_is_proven_by_propagation() {
        let mut kb = KnowledgeBase::default();
        visit(&mut kb, c(1, 1), false, false);
        kb.tell(c(2, 1), false, EvidenceKind::Smell);
        kb.tell(c(2, 1), false, EvidenceKind::Breeze);
        assert_eq!(kb.update_safety(&[c(1, 1), c(2, 1)]), 1);
        assert!(kb.safe_cells().contains(c(2, 1)));
    }

    #[test]
    fn breezy_start_proves_nothing() {
        let mut kb = KnowledgeBase::default();
        visit(&mut kb, c(1, 1), false, true);
        assert_eq!(kb.update_safety(&[c(1, 1)]), 0);
        assert_eq!(kb.safe_cells().len(), 1);
    }

    #[test]
    fn safety_closes_over_ring() {
        let mut kb = KnowledgeBase::default();
        for cell in [c(1, 1), c(2, 1), c(1, 2), c(3, 2), c(2, 3)] {
            kb.tell_safe(cell);
        }
        kb.update_safety(&[c(1, 1), c(2, 1), c(1, 2)]);
        assert!(kb.safe_cells().contains(c(2, 2)));
    }

    #[test]
    fn update_safety_is_a_fixed_point() {
        let mut kb = KnowledgeBase::default();
        visit(&mut kb, c(1, 1), false, false);
        visit(&mut kb, c(2, 1), false, true);
        let visited = [c(1, 1), c(2, 1)];
        kb.update_safety(&visited);
        let once = kb.summary();
        assert_eq!(kb.update_safety(&visited), 0);
        assert_eq!(kb.summary(), once);
    }

    // ── Suspect refresh ─────────────────────────────────────────

    #[test]
    fn update_kb_flags_and_is_recomputed() {
        let mut kb = KnowledgeBase::default();
        visit(&mut kb, c(1, 1), false, true);
        kb.update_safety(&[c(1, 1)]);
        assert_eq!(kb.update_kb(), 2);
        assert!(kb.is_suspect(c(2, 1), HazardKind::Pit));
        assert!(kb.is_suspect(c(1, 2), HazardKind::Pit));

        // A quiet visit to (1,2) clears only (1,2): the ring of (2,1) is
        // (3,1), (1,1), (2,2) and still holds the breeze at (1,1).
        visit(&mut kb, c(1, 2), false, false);
        kb.update_safety(&[c(1, 1), c(1, 2)]);
        kb.update_kb();
        assert!(!kb.is_suspect(c(1, 2), HazardKind::Pit));
        assert!(kb.is_suspect(c(2, 1), HazardKind::Pit));
        assert_eq!(kb.suspects(HazardKind::Pit).len(), 1);
    }

    #[test]
    fn update_kb_twice_is_identical() {
        let mut kb = KnowledgeBase::default();
        visit(&mut kb, c(1, 1), true, true);
        kb.update_safety(&[c(1, 1)]);
        kb.update_kb();
        let once = kb.summary();
        kb.update_kb();
        assert_eq!(kb.summary(), once);
    }

    #[test]
    fn cell_may_be_suspected_for_both_hazards() {
        let mut kb = KnowledgeBase::default();
        visit(&mut kb, c(1, 1), true, true);
        kb.update_safety(&[c(1, 1)]);
        kb.update_kb();
        assert!(kb.is_suspect(c(2, 1), HazardKind::Pit));
        assert!(kb.is_suspect(c(2, 1), HazardKind::Monster));
    }

    // ── Suggestions ─────────────────────────────────────────────

    #[test]
    fn suggest_classifies_neighbours() {
        let mut kb = KnowledgeBase::default();
        visit(&mut kb, c(1, 1), false, true);
        kb.update_safety(&[c(1, 1)]);
        kb.update_kb();
        let s = kb.suggest(c(1, 1), &[c(1, 1)]);
        assert!(s.safe.is_empty());
        assert_eq!(s.pits.as_slice(), &[c(2, 1), c(1, 2)]);
        assert!(s.monsters.is_empty());
    }

    #[test]
    fn suggest_is_read_only() {
        let mut kb = KnowledgeBase::default();
        visit(&mut kb, c(1, 1), false, false);
        kb.tell(c(2, 1), false, EvidenceKind::Smell);
        kb.tell(c(2, 1), false, EvidenceKind::Breeze);
        let before = kb.summary();
        let s = kb.suggest(c(1, 1), &[c(1, 1), c(2, 1)]);
        assert_eq!(s.safe.as_slice(), &[c(2, 1)]);
        assert!(s.pits.is_empty());
        assert!(s.monsters.is_empty());
        assert_eq!(kb.summary(), before);
    }

    #[test]
    fn new_rejects_invalid_config() {
        let cfg = KbConfig {
            width: 4,
            height: 0,
        };
        assert!(KnowledgeBase::new(&cfg).is_err());
        let kb = KnowledgeBase::new(&KbConfig {
            width: 6,
            height: 2,
        })
        .unwrap();
        assert_eq!(kb.bounds().cell_count(), 12);
    }
}
