//! Forward-chaining knowledge base for Wumpus World.
//!
//! The [`KnowledgeBase`] accumulates percept evidence from the cells an
//! agent has visited and deduces which unvisited cells are provably safe
//! and which may hold a pit or the monster. All inference is binary and
//! grid-local: a cell's status is decided from the evidence recorded in
//! its neighbours.
//!
//! # Turn order
//!
//! Each move of the agent must drive the engine in this order:
//!
//! 1. [`tell`](KnowledgeBase::tell) the new percepts and
//!    [`tell_safe`](KnowledgeBase::tell_safe) the visited cell.
//! 2. [`update_safety`](KnowledgeBase::update_safety): fixed-point safety
//!    propagation outward from the visited cells.
//! 3. [`update_kb`](KnowledgeBase::update_kb): rebuild the pit and monster
//!    suspect sets from scratch. Hazard inference defers to the safe set,
//!    so this must follow step 2.
//!
//! # Example
//!
//! ```
//! use wumpus_core::{Cell, EvidenceKind};
//! use wumpus_kb::KnowledgeBase;
//!
//! let mut kb = KnowledgeBase::default();
//! let start = Cell::new(1, 1);
//! kb.tell(start, false, EvidenceKind::Smell);
//! kb.tell(start, true, EvidenceKind::Breeze);
//! kb.tell_safe(start);
//! kb.update_safety(&[start]);
//! kb.update_kb();
//!
//! assert!(kb.infers_pit(Cell::new(2, 1)));
//! assert!(!kb.infers_monster(Cell::new(2, 1)));
//! let labels: Vec<String> = kb.perceptions().map(|(_, l)| l.to_string()).collect();
//! assert_eq!(labels, ["B", "P?", "P?"]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod evidence;
mod inference;
pub mod kb;
pub mod perception;
pub mod suggest;
pub mod summary;

pub use config::{ConfigError, KbConfig};
pub use evidence::{Evidence, EvidencePair};
pub use kb::KnowledgeBase;
pub use perception::{PerceptLabel, Perceptions};
pub use suggest::Suggestions;
pub use summary::KbSummary;
