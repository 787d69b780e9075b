//! Engine configuration.

use crate::error::PlacementResult;
use crate::snap::GridSize;
use serde::{Deserialize, Serialize};

/// Tunable engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PegboardConfig {
    /// Grid pitch that placements snap to. Defaults to 20.
    pub grid_size: GridSize,
}

impl PegboardConfig {
    /// Configuration with a custom grid size.
    pub fn with_grid_size(grid_size: i64) -> PlacementResult<Self> {
        Ok(Self {
            grid_size: GridSize::new(grid_size)?,
        })
    }

    /// Parse configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
