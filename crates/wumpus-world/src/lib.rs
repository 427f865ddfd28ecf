//! Cave model and exploring agent for Wumpus World.
//!
//! A [`Cave`] is the ground truth: pits, the monster and the gold on a
//! bounded grid, exposed to the agent only through
//! [`WorldOracle`](wumpus_core::WorldOracle) percepts. An [`Agent`] walks
//! the cave and drives its own
//! [`KnowledgeBase`](wumpus_kb::KnowledgeBase) through the turn sequence
//! on every move. An [`Expedition`] pairs the two for interactive play.
//!
//! # Example
//!
//! ```
//! use wumpus_space::Direction;
//! use wumpus_world::{Cave, Expedition, Outcome};
//!
//! let mut exp = Expedition::new(Cave::classic());
//! assert_eq!(exp.step(Direction::East).unwrap(), Outcome::Exploring);
//! let s = exp.agent().suggestions().unwrap();
//! assert_eq!(s.to_string(), "safe: [(1, 1)]; possible pit: [(3, 1), (2, 2)]; possible monster: []");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod cave;
pub mod config;
pub mod error;
pub mod expedition;

pub use agent::{Agent, AgentStatus};
pub use cave::{Cave, CaveBuilder};
pub use config::CaveConfig;
pub use error::WorldError;
pub use expedition::{Expedition, Outcome};
