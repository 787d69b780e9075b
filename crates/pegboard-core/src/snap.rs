//! Snap functionality for aligning positions to the pegboard grid.

use crate::error::{PlacementError, PlacementResult};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default grid size (pitch between pegboard holes).
pub const GRID_SIZE: i64 = 20;

/// A validated, strictly positive grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct GridSize(i64);

impl GridSize {
    /// Create a grid size, rejecting zero and negative values.
    pub fn new(size: i64) -> PlacementResult<Self> {
        if size > 0 {
            Ok(Self(size))
        } else {
            Err(PlacementError::InvalidConfiguration { grid_size: size })
        }
    }

    /// The grid pitch in surface units.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self(GRID_SIZE)
    }
}

impl TryFrom<i64> for GridSize {
    type Error = PlacementError;

    fn try_from(size: i64) -> PlacementResult<Self> {
        Self::new(size)
    }
}

impl From<GridSize> for i64 {
    fn from(size: GridSize) -> Self {
        size.0
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An integer position on the surface, aligned to the grid when produced by [`snap_point`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: i64,
    pub y: i64,
}

impl GridPoint {
    pub const ZERO: GridPoint = GridPoint { x: 0, y: 0 };

    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Check that both coordinates sit on a grid line.
    pub fn is_aligned(self, grid: GridSize) -> bool {
        self.x % grid.get() == 0 && self.y % grid.get() == 0
    }

    /// Convert to a floating point position for rendering.
    pub fn to_point(self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }
}

/// Snap a single coordinate to the nearest grid line.
///
/// Exact midpoints always round down, so `snap(10.0, 20)` is `0` and
/// `snap(30.0, 20)` is `20`. Out-of-range values clamp to the furthest
/// representable grid line and NaN snaps to `0`; the result is always a
/// multiple of `grid`.
pub fn snap(value: f64, grid: GridSize) -> i64 {
    let size = grid.get();
    let steps = (value / size as f64 - 0.5).ceil() as i64;
    let max_steps = i64::MAX / size;
    steps.clamp(-max_steps, max_steps) * size
}

/// Snap a point to the nearest grid intersection.
pub fn snap_point(point: Point, grid: GridSize) -> GridPoint {
    GridPoint::new(snap(point.x, grid), snap(point.y, grid))
}
