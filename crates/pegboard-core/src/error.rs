//! Error types for the placement engine.

use crate::placement::InstanceId;
use thiserror::Error;

/// Placement engine errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// Grid size was zero or negative. Fatal at setup.
    #[error("Invalid configuration: grid size must be a positive integer, got {grid_size}")]
    InvalidConfiguration { grid_size: i64 },
    /// No placed instance carries this id.
    #[error("Instance not found: {0}")]
    NotFound(InstanceId),
}

/// Result type for placement operations.
pub type PlacementResult<T> = Result<T, PlacementError>;
