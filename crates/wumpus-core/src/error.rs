//! Error types for the knowledge base.

use std::error::Error;
use std::fmt;

/// Errors raised by the knowledge base ingestion path.
///
/// The only failure the inference engine defines is a contract violation
/// by the caller; every other operation is total over in-bounds cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KbError {
    /// An evidence tag outside `{SMELL, BREEZE, SAFE}` was supplied.
    InvalidEvidenceKind {
        /// The rejected tag, verbatim.
        tag: String,
    },
}

impl fmt::Display for KbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEvidenceKind { tag } => {
                write!(f, "'{tag}' is not a valid evidence kind")
            }
        }
    }
}

impl Error for KbError {}
