//! Knowledge base configuration and validation.

use std::error::Error;
use std::fmt;

use wumpus_space::{GridBounds, SpaceError};

/// Grid dimensions a [`KnowledgeBase`](crate::KnowledgeBase) reasons over.
///
/// Fixed for the lifetime of one engine instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KbConfig {
    /// Number of columns. Default: 4.
    pub width: u32,
    /// Number of rows. Default: 4.
    pub height: u32,
}

impl Default for KbConfig {
    fn default() -> Self {
        Self {
            width: 4,
            height: 4,
        }
    }
}

impl KbConfig {
    /// Check the dimensions and return the validated bounds.
    pub fn validate(&self) -> Result<GridBounds, ConfigError> {
        Ok(GridBounds::new(self.width, self.height)?)
    }
}

/// Errors detected during [`KbConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The grid dimensions are invalid.
    Space(SpaceError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}
