//! Errors raised while building caves and moving the agent.

use std::error::Error;
use std::fmt;

use wumpus_core::Cell;
use wumpus_space::SpaceError;

/// Errors from cave construction and agent movement.
#[derive(Clone, Debug, PartialEq)]
pub enum WorldError {
    /// The cave dimensions are invalid.
    Space(SpaceError),
    /// A pit, the monster or the gold was placed outside the grid.
    Placement {
        /// What was being placed (`"pit"`, `"monster"` or `"gold"`).
        item: &'static str,
        /// The out-of-bounds cell.
        cell: Cell,
    },
    /// The pit probability is not a number in `[0, 1]`.
    InvalidPitProbability {
        /// The rejected value.
        value: f64,
    },
    /// The agent is dead and can no longer move.
    AgentDead,
    /// A move targeted a cell outside the grid.
    MoveOutOfBounds {
        /// The rejected target.
        cell: Cell,
    },
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
            Self::Placement { item, cell } => write!(f, "{item} placed outside the cave at {cell}"),
            Self::InvalidPitProbability { value } => {
                write!(f, "pit probability must be in [0, 1], got {value}")
            }
            Self::AgentDead => write!(f, "the agent is dead"),
            Self::MoveOutOfBounds { cell } => write!(f, "cannot move to {cell}: outside the cave"),
        }
    }
}

impl Error for WorldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for WorldError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = WorldError::Placement {
            item: "pit",
            cell: Cell::new(5, 1),
        };
        assert_eq!(e.to_string(), "pit placed outside the cave at (5, 1)");
        let e = WorldError::InvalidPitProbability { value: 1.5 };
        assert_eq!(e.to_string(), "pit probability must be in [0, 1], got 1.5");
        assert!(e.source().is_none());
    }

    #[test]
    fn space_error_is_the_source() {
        let e = WorldError::from(SpaceError::EmptySpace);
        assert!(e.source().is_some());
        assert_eq!(e.to_string(), "space: grid must have at least one cell");
    }
}
