//! Pegboard Core Library
//!
//! Placement engine for the pegboard customizer: turns drag events into
//! grid-aligned placements and keeps a single-level undo history.
//! Rendering, asset loading and form submission live outside this crate.

pub mod board;
pub mod catalog;
pub mod config;
pub mod drag;
pub mod error;
pub mod history;
pub mod placement;
pub mod snap;
pub mod surface;

pub use board::Pegboard;
pub use catalog::{Catalog, CatalogEntry, PieceType};
pub use config::PegboardConfig;
pub use drag::{DragController, DragOrigin, DragPreview, DragSession, DragState, DropOutcome};
pub use error::{PlacementError, PlacementResult};
pub use history::{HistoryEntry, HistoryTracker};
pub use placement::{InstanceId, PlacedInstance, PlacementStore};
pub use snap::{GridPoint, GridSize, snap, snap_point, GRID_SIZE};
