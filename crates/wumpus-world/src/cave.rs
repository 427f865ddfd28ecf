//! The [`Cave`]: ground truth the agent explores.
//!
//! A cave holds pits, at most one monster and at most one pile of gold on
//! a bounded grid. Percepts are derived from the layout through the
//! grid's adjacency, so a cave is always internally consistent.

use std::fmt;
use std::sync::Arc;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tracing::debug;
use wumpus_core::{Cell, WorldOracle};
use wumpus_space::{AdjacencyTable, CellSet, GridBounds};

use crate::config::CaveConfig;
use crate::error::WorldError;

/// A Wumpus World cave.
#[derive(Clone, Debug)]
pub struct Cave {
    rooms: Arc<AdjacencyTable>,
    pits: CellSet,
    monster: Option<Cell>,
    gold: Option<Cell>,
    explorer: Cell,
}

/// Builder for [`Cave`] with an explicit layout.
///
/// Placements are checked against the bounds in [`build`](Self::build).
#[derive(Clone, Debug)]
pub struct CaveBuilder {
    bounds: GridBounds,
    pits: Vec<Cell>,
    monster: Option<Cell>,
    gold: Option<Cell>,
}

impl Cave {
    /// Start a builder for a cave over `bounds`.
    pub fn builder(bounds: GridBounds) -> CaveBuilder {
        CaveBuilder {
            bounds,
            pits: Vec::new(),
            monster: None,
            gold: None,
        }
    }

    /// The fixed 4×4 textbook layout: pits at (3,1), (3,3) and (4,4), gold
    /// at (2,3), the monster at (1,3).
    pub fn classic() -> Self {
        let rooms = Arc::new(AdjacencyTable::new(GridBounds::CLASSIC));
        let pits = CellSet::from_cells(
            GridBounds::CLASSIC,
            [Cell::new(3, 1), Cell::new(3, 3), Cell::new(4, 4)],
        );
        Self {
            rooms,
            pits,
            monster: Some(Cell::new(1, 3)),
            gold: Some(Cell::new(2, 3)),
            explorer: Cell::START,
        }
    }

    /// Generate a random layout from `config`.
    ///
    /// Every cell other than the start holds a pit with probability
    /// `pit_probability`. The monster and the gold each land on a
    /// uniformly chosen cell other than the start; a single-cell cave has
    /// neither.
    pub fn generate(config: &CaveConfig) -> Result<Self, WorldError> {
        let bounds = config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

        let mut pits = CellSet::new(bounds);
        for cell in bounds.cells() {
            if cell != Cell::START && rng.random_bool(config.pit_probability) {
                pits.insert(cell);
            }
        }

        // Rank 0 is the start cell in canonical order.
        let count = bounds.cell_count();
        let mut pick = || {
            if count > 1 {
                bounds.cell_at(rng.random_range(1..count))
            } else {
                None
            }
        };
        let monster = pick();
        let gold = pick();

        debug!(
            seed = config.seed,
            pits = pits.len(),
            monster = ?monster,
            gold = ?gold,
            "cave generated"
        );
        Ok(Self {
            rooms: Arc::new(AdjacencyTable::new(bounds)),
            pits,
            monster,
            gold,
            explorer: Cell::START,
        })
    }

    /// The grid bounds.
    pub fn bounds(&self) -> GridBounds {
        self.rooms.bounds()
    }

    /// The shared adjacency table, for building a matching knowledge base.
    pub fn adjacency(&self) -> &Arc<AdjacencyTable> {
        &self.rooms
    }

    /// The pits, in canonical order.
    pub fn pits(&self) -> impl Iterator<Item = Cell> + '_ {
        self.pits.iter()
    }

    /// Where the monster lives, if there is one.
    pub fn monster(&self) -> Option<Cell> {
        self.monster
    }

    /// Where the gold lies, if there is any.
    pub fn gold(&self) -> Option<Cell> {
        self.gold
    }

    /// Where the explorer is drawn on the map.
    pub fn explorer(&self) -> Cell {
        self.explorer
    }

    /// Move the explorer marker.
    pub fn set_explorer(&mut self, cell: Cell) -> Result<(), WorldError> {
        if !self.bounds().contains(cell) {
            return Err(WorldError::MoveOutOfBounds { cell });
        }
        self.explorer = cell;
        Ok(())
    }

    pub(crate) fn reset_explorer(&mut self) {
        self.explorer = Cell::START;
    }

    /// Whether entering `cell` kills the explorer.
    pub fn is_lethal(&self, cell: Cell) -> bool {
        self.is_pit(cell) || self.is_monster(cell)
    }
}

impl Default for Cave {
    fn default() -> Self {
        Self::classic()
    }
}

impl CaveBuilder {
    /// Add a pit.
    pub fn pit(mut self, cell: Cell) -> Self {
        self.pits.push(cell);
        self
    }

    /// Place the monster, replacing any earlier placement.
    pub fn monster(mut self, cell: Cell) -> Self {
        self.monster = Some(cell);
        self
    }

    /// Place the gold, replacing any earlier placement.
    pub fn gold(mut self, cell: Cell) -> Self {
        self.gold = Some(cell);
        self
    }

    /// Build the cave.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Placement`] for the first item placed outside
    /// the bounds.
    pub fn build(self) -> Result<Cave, WorldError> {
        let bounds = self.bounds;
        let check = |item: &'static str, cell: Cell| {
            if bounds.contains(cell) {
                Ok(cell)
            } else {
                Err(WorldError::Placement { item, cell })
            }
        };

        let mut pits = CellSet::new(bounds);
        for &cell in &self.pits {
            pits.insert(check("pit", cell)?);
        }
        let monster = self.monster.map(|c| check("monster", c)).transpose()?;
        let gold = self.gold.map(|c| check("gold", c)).transpose()?;

        Ok(Cave {
            rooms: Arc::new(AdjacencyTable::new(bounds)),
            pits,
            monster,
            gold,
            explorer: Cell::START,
        })
    }
}

impl WorldOracle for Cave {
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

/// The map, top row first. The explorer hides gold, gold hides the
/// monster, and the monster hides a pit.
impl fmt::Display for Cave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bounds = self.bounds();
        for y in (1..=bounds.height() as i32).rev() {
            f.write_str("|")?;
            for x in 1..=bounds.width() as i32 {
                let cell = Cell::new(x, y);
                let mark = if self.explorer == cell {
                    " E "
                } else if self.is_gold(cell) {
                    " G "
                } else if self.is_monster(cell) {
                    " W "
                } else if self.is_pit(cell) {
                    " P "
                } else {
                    "   "
                };
                write!(f, "{mark}|")?;
            }
            if y > 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
