//! The exploring [`Agent`] and the per-turn sequence it drives.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};
use wumpus_core::{Cell, EvidenceKind, HazardKind, WorldOracle};
use wumpus_kb::{KbSummary, KnowledgeBase, Perceptions, Suggestions};
use wumpus_space::{AdjacencyTable, Direction};

use crate::error::WorldError;

/// Whether the agent can still act.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentStatus {
    /// Still exploring.
    Alive,
    /// Entered a hazardous cell.
    Dead {
        /// What killed it.
        cause: HazardKind,
    },
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alive => f.write_str("alive"),
            Self::Dead { cause } => write!(f, "dead ({cause})"),
        }
    }
}

/// An explorer carrying its own knowledge base.
///
/// Every move runs the turn sequence: perceive the new cell, then, if the
/// agent survived, propagate safety and refresh the suspects.
#[derive(Clone, Debug)]
pub struct Agent {
    kb: KnowledgeBase,
    position: Cell,
    visited: Vec<Cell>,
    has_gold: bool,
    status: AgentStatus,
    turns: usize,
}

impl Agent {
    /// An agent standing alive at the start cell, which counts as
    /// visited, with nothing known yet.
    pub fn new(rooms: Arc<AdjacencyTable>) -> Self {
        Self {
            kb: KnowledgeBase::with_adjacency(rooms),
            position: Cell::START,
            visited: vec![Cell::START],
            has_gold: false,
            status: AgentStatus::Alive,
            turns: 0,
        }
    }

    /// Sense the current cell.
    ///
    /// Dies on the monster or a pit. Otherwise picks up any gold and tells
    /// the knowledge base the percepts and that the cell is safe.
    pub fn perceive(&mut self, world: &impl WorldOracle) {
        let here = self.position;
        let cause = if world.is_monster(here) {
            Some(HazardKind::Monster)
        } else if world.is_pit(here) {
            Some(HazardKind::Pit)
        } else {
            None
        };
        if let Some(cause) = cause {
            self.status = AgentStatus::Dead { cause };
            warn!(cell = %here, %cause, turns = self.turns, "agent killed");
            return;
        }

        if world.is_gold(here) && !self.has_gold {
            self.has_gold = true;
            info!(cell = %here, "gold picked up");
        }
        self.kb.tell(here, world.is_smelly(here), EvidenceKind::Smell);
        self.kb.tell(here, world.is_breezy(here), EvidenceKind::Breeze);
        self.kb.tell_safe(here);
    }

    /// Propagate safety from the visited cells, then refresh the suspects.
    pub fn deduce(&mut self) {
        self.kb.update_safety(&self.visited);
        self.kb.update_kb();
    }

    /// Move to `cell` and run the turn sequence there.
    ///
    /// # Errors
    ///
    /// [`WorldError::AgentDead`] once the agent has died, and
    /// [`WorldError::MoveOutOfBounds`] for a target outside the grid.
    /// Nothing changes on error.
    pub fn move_to(&mut self, cell: Cell, world: &impl WorldOracle) -> Result<(), WorldError> {
        if !self.is_alive() {
            return Err(WorldError::AgentDead);
        }
        if !self.kb.bounds().contains(cell) {
            return Err(WorldError::MoveOutOfBounds { cell });
        }

        self.turns += 1;
        self.position = cell;
        if !self.visited.contains(&cell) {
            self.visited.push(cell);
        }
        self.perceive(world);
        if self.is_alive() {
            self.deduce();
        }
        debug!(turn = self.turns, cell = %cell, status = %self.status, "turn complete");
        Ok(())
    }

    /// Move one cell in `direction`. Walking into the wall leaves the
    /// agent where it is but still takes a turn.
    pub fn step(&mut self, direction: Direction, world: &impl WorldOracle) -> Result<(), WorldError> {
        let next = direction.step(self.position);
        let target = if self.kb.bounds().contains(next) {
            next
        } else {
            debug!(cell = %self.position, %direction, "bumped into the wall");
            self.position
        };
        self.move_to(target, world)
    }

    /// Classification of the current cell's neighbours, or `None` once
    /// the agent is dead.
    pub fn suggestions(&self) -> Option<Suggestions> {
        self.is_alive()
            .then(|| self.kb.suggest(self.position, &self.visited))
    }

    /// Whether the agent is back at the start holding the gold.
    pub fn can_climb(&self) -> bool {
        self.is_alive() && self.has_gold && self.position == Cell::START
    }

    /// Per-cell percept and suspicion labels.
    pub fn perceptions(&self) -> Perceptions<'_> {
        self.kb.perceptions()
    }

    /// Snapshot of the agent's knowledge.
    pub fn summary(&self) -> KbSummary {
        self.kb.summary()
    }

    /// The knowledge base.
    pub fn kb(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Alive or dead, and why.
    pub fn status(&self) -> AgentStatus {
        self.status
    }

    /// Shorthand for `status() == AgentStatus::Alive`.
    pub fn is_alive(&self) -> bool {
        self.status == AgentStatus::Alive
    }

    /// Current cell.
    pub fn position(&self) -> Cell {
        self.position
    }

    /// Whether the gold has been picked up.
    pub fn has_gold(&self) -> bool {
        self.has_gold
    }

    /// Cells visited so far, in first-visit order.
    pub fn visited(&self) -> &[Cell] {
        &self.visited
    }

    /// Moves taken, wall bumps included.
    pub fn turns(&self) -> usize {
        self.turns
    }
}
