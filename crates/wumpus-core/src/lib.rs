//! Core types and traits for the Wumpus World inference engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the workspace: the
//! [`Cell`] coordinate, the closed percept/hazard/evidence enumerations,
//! the core error type, and the [`WorldOracle`] trait through which
//! ground truth is read from a world model.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod kind;
pub mod traits;

pub use cell::Cell;
pub use error::KbError;
pub use kind::{EvidenceKind, HazardKind, PerceptKind};
pub use traits::WorldOracle;
