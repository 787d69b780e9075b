//! Placement store: the ordered collection of pieces on the surface.

use crate::catalog::PieceType;
use crate::error::{PlacementError, PlacementResult};
use crate::snap::{GridPoint, GridSize, snap_point};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a placed instance.
pub type InstanceId = Uuid;

/// One piece placed on the surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedInstance {
    /// Unique instance identifier.
    pub id: InstanceId,
    /// Catalog piece type.
    pub type_id: PieceType,
    /// Grid-aligned, surface-local position.
    pub position: GridPoint,
    /// Insertion sequence number. Strictly increasing, never reused.
    pub order: u64,
}

/// Owns the placed instances, kept sorted by `order` ascending.
#[derive(Debug, Clone)]
pub struct PlacementStore {
    grid: GridSize,
    instances: Vec<PlacedInstance>,
    next_order: u64,
}

impl Default for PlacementStore {
    fn default() -> Self {
        Self::new(GridSize::default())
    }
}

impl PlacementStore {
    /// Create an empty store snapping to `grid`.
    pub fn new(grid: GridSize) -> Self {
        Self {
            grid,
            instances: Vec::new(),
            next_order: 0,
        }
    }

    /// The grid this store snaps to.
    pub fn grid_size(&self) -> GridSize {
        self.grid
    }

    /// Snap `local` to the grid and append a new instance of `type_id`.
    pub fn place(&mut self, type_id: PieceType, local: Point) -> PlacedInstance {
        let instance = PlacedInstance {
            id: Uuid::new_v4(),
            type_id,
            position: snap_point(local, self.grid),
            order: self.next_order,
        };
        self.next_order += 1;
        self.instances.push(instance.clone());
        instance
    }

    /// Remove an instance, keeping the relative order of the rest.
    pub fn remove(&mut self, id: InstanceId) -> PlacementResult<PlacedInstance> {
        let index = self
            .instances
            .iter()
            .position(|i| i.id == id)
            .ok_or(PlacementError::NotFound(id))?;
        Ok(self.instances.remove(index))
    }

    /// Put a previously removed instance back at its ordered position.
    ///
    /// Returns false if an instance with the same id is already present.
    pub(crate) fn restore(&mut self, instance: PlacedInstance) -> bool {
        if self.contains(instance.id) {
            return false;
        }
        let index = self.instances.partition_point(|i| i.order < instance.order);
        self.next_order = self.next_order.max(instance.order + 1);
        self.instances.insert(index, instance);
        true
    }

    /// Instances ordered by `order` ascending.
    pub fn list(&self) -> &[PlacedInstance] {
        &self.instances
    }

    /// Get an instance by id.
    pub fn get(&self, id: InstanceId) -> Option<&PlacedInstance> {
        self.instances.iter().find(|i| i.id == id)
    }

    /// Check if an instance is on the surface.
    pub fn contains(&self, id: InstanceId) -> bool {
        self.get(id).is_some()
    }

    /// Remove every instance.
    ///
    /// The order counter keeps counting, so orders are never reused.
    pub fn reset(&mut self) {
        self.instances.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }
}
