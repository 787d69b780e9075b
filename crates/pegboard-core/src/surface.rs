//! Surface geometry: mapping pointer positions into surface-local space.
//!
//! Bounds are passed in on every query. The surface may move or resize
//! between events without notice, so nothing here is cached.

use kurbo::{Point, Rect, Size};

/// Convert a global pointer position to surface-local coordinates.
pub fn to_local(global: Point, surface: Rect) -> Point {
    let surface = surface.abs();
    Point::new(global.x - surface.x0, global.y - surface.y0)
}

/// Check whether a local point lies on the surface.
///
/// The origin edges are inclusive, the far edges exclusive.
pub fn contains(local: Point, size: Size) -> bool {
    local.x >= 0.0 && local.x < size.width && local.y >= 0.0 && local.y < size.height
}

/// Check whether a global pointer position is over the surface.
pub fn is_over(global: Point, surface: Rect) -> bool {
    contains(to_local(global, surface), surface.abs().size())
}
