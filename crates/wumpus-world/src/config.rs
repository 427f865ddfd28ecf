//! Random cave generation parameters.

use wumpus_space::GridBounds;

use crate::error::WorldError;

/// Parameters for [`Cave::generate`](crate::Cave::generate).
///
/// Generation is deterministic: the same config always yields the same
/// cave.
#[derive(Clone, Debug, PartialEq)]
pub struct CaveConfig {
    /// Number of columns. Default: 4.
    pub width: u32,
    /// Number of rows. Default: 4.
    pub height: u32,
    /// Chance that any cell other than the start holds a pit. Default: 0.2.
    pub pit_probability: f64,
    /// RNG seed. Default: 0.
    pub seed: u64,
}

impl Default for CaveConfig {
    fn default() -> Self {
        Self {
            width: 4,
            height: 4,
            pit_probability: 0.2,
            seed: 0,
        }
    }
}

impl CaveConfig {
    /// Check every field and return the validated bounds.
    pub fn validate(&self) -> Result<GridBounds, WorldError> {
        let bounds = GridBounds::new(self.width, self.height)?;
        if !(0.0..=1.0).contains(&self.pit_probability) {
            return Err(WorldError::InvalidPitProbability {
                value: self.pit_probability,
            });
        }
        Ok(bounds)
    }
}
