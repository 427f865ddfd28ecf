//! Reusable worlds and knowledge-base drivers.
//!
//! - [`ScriptedWorld`]: hazards placed by hand, percepts derived from them.
//! - [`record_visit`]: tell one survived visit with explicit percepts.
//! - [`observe`] / [`explore`]: tell what a world reveals and run the
//!   full turn sequence along a path.

use wumpus_core::{Cell, EvidenceKind, WorldOracle};
use wumpus_kb::KnowledgeBase;
use wumpus_space::{AdjacencyTable, CellSet, GridBounds};

/// A world whose hazards are placed explicitly.
///
/// Breeze and smell are derived from the placed hazards through the
/// grid's adjacency, so percepts are always consistent with the layout.
#[derive(Clone, Debug)]
pub struct ScriptedWorld {
    rooms: AdjacencyTable,
    pits: CellSet,
    monster: Option<Cell>,
    gold: Option<Cell>,
}

impl ScriptedWorld {
    pub fn new(bounds: GridBounds) -> Self {
        Self {
            rooms: AdjacencyTable::new(bounds),
            pits: CellSet::new(bounds),
            monster: None,
            gold: None,
        }
    }

    /// The 4×4 layout of the classic example: pits at (3,1), (3,3),
    /// (4,4), gold at (2,3), monster at (1,3).
    pub fn classic() -> Self {
        Self::new(GridBounds::CLASSIC)
            .with_pit(Cell::new(3, 1))
            .with_pit(Cell::new(3, 3))
            .with_pit(Cell::new(4, 4))
            .with_monster(Cell::new(1, 3))
            .with_gold(Cell::new(2, 3))
    }

    pub fn with_pit(mut self, cell: Cell) -> Self {
        self.pits.insert(cell);
        self
    }

    pub fn with_monster(mut self, cell: Cell) -> Self {
        self.monster = Some(cell);
        self
    }

    pub fn with_gold(mut self, cell: Cell) -> Self {
        self.gold = Some(cell);
        self
    }

    pub fn bounds(&self) -> GridBounds {
        self.rooms.bounds()
    }

    /// Whether entering `cell` is survivable.
    pub fn is_lethal(&self, cell: Cell) -> bool {
        self.is_pit(cell) || self.is_monster(cell)
    }
}

impl WorldOracle for ScriptedWorld {
    fn is_pit(&self, cell: Cell) -> bool {
        self.pits.contains(cell)
    }

    fn is_breezy(&self, cell: Cell) -> bool {
        self.rooms
            .neighbours(cell)
            .iter()
            .any(|&n| self.pits.contains(n))
    }

    fn is_smelly(&self, cell: Cell) -> bool {
        self.monster
            .is_some_and(|m| self.rooms.neighbours(cell).contains(&m))
    }

    fn is_monster(&self, cell: Cell) -> bool {
        self.monster == Some(cell)
    }

    fn is_gold(&self, cell: Cell) -> bool {
        self.gold == Some(cell)
    }
}

/// Tell one survived visit to `cell` with the given percepts.
pub fn record_visit(kb: &mut KnowledgeBase, cell: Cell, smell: bool, breeze: bool) {
    kb.tell(cell, smell, EvidenceKind::Smell);
    kb.tell(cell, breeze, EvidenceKind::Breeze);
    kb.tell_safe(cell);
}

/// Tell what `world` reveals at `cell`, as an agent standing there would.
pub fn observe(kb: &mut KnowledgeBase, world: &impl WorldOracle, cell: Cell) {
    record_visit(kb, cell, world.is_smelly(cell), world.is_breezy(cell));
}

/// Walk `path` through `world`, running the full turn sequence at each
/// cell. Stops before the first lethal cell. Returns the visited cells.
pub fn explore(kb: &mut KnowledgeBase, world: &ScriptedWorld, path: &[Cell]) -> Vec<Cell> {
    let mut visited = Vec::new();
    for &cell in path {
        if world.is_lethal(cell) {
            break;
        }
        if !visited.contains(&cell) {
            visited.push(cell);
        }
        observe(kb, world, cell);
        kb.update_safety(&visited);
        kb.update_kb();
    }
    visited
}
