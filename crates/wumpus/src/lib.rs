//! Wumpus World: a percept-driven knowledge base exploring a hazardous cave.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Wumpus sub-crates, and ships the `wumpus` command-line game.
//!
//! # Quick start
//!
//! ```rust
//! use wumpus::prelude::*;
//!
//! let mut exp = Expedition::new(Cave::classic());
//! exp.step(Direction::North).unwrap();
//!
//! // (1,2) smells, so either unexplored neighbour may hold the monster.
//! let agent = exp.agent();
//! assert!(agent.kb().is_suspect(Cell::new(1, 3), HazardKind::Monster));
//! let s = agent.suggestions().unwrap();
//! assert_eq!(s.monsters.as_slice(), &[Cell::new(2, 2), Cell::new(1, 3)]);
//! assert_eq!(s.safe.as_slice(), &[Cell::START]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `wumpus-core` | `Cell`, percept/hazard/evidence kinds, `WorldOracle` |
//! | [`space`] | `wumpus-space` | Grid bounds, adjacency, cell sets, directions |
//! | [`kb`] | `wumpus-kb` | The knowledge base and its deduction passes |
//! | [`world`] | `wumpus-world` | Caves, the agent and expeditions |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and the world oracle trait (`wumpus-core`).
pub use wumpus_core as types;

/// Grid topology (`wumpus-space`).
///
/// [`space::GridBounds`] validates dimensions, [`space::AdjacencyTable`]
/// precomputes 4-neighbourhoods and [`space::CellSet`] stores membership.
pub use wumpus_space as space;

/// Knowledge base and inference (`wumpus-kb`).
pub use wumpus_kb as kb;

/// Cave model and exploring agent (`wumpus-world`).
pub use wumpus_world as world;

/// Common imports for typical Wumpus usage.
///
/// ```rust
/// use wumpus::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use wumpus_core::{Cell, EvidenceKind, HazardKind, PerceptKind, WorldOracle};

    // Space
    pub use wumpus_space::{AdjacencyTable, Direction, GridBounds};

    // Knowledge base
    pub use wumpus_kb::{KbConfig, KbSummary, KnowledgeBase, PerceptLabel, Suggestions};

    // World
    pub use wumpus_world::{Agent, AgentStatus, Cave, CaveConfig, Expedition, Outcome};

    // Errors
    pub use wumpus_core::KbError;
    pub use wumpus_kb::ConfigError;
    pub use wumpus_space::SpaceError;
    pub use wumpus_world::WorldError;
}
