//! The pegboard: placement store, undo history and drag controller behind
//! one set of input events.

use crate::catalog::{Catalog, PieceType};
use crate::config::PegboardConfig;
use crate::drag::{DragController, DragOrigin, DragPreview, DragState, DropOutcome};
use crate::error::PlacementResult;
use crate::history::{HistoryEntry, HistoryTracker};
use crate::placement::{InstanceId, PlacedInstance, PlacementStore};
use crate::snap::GridSize;
use kurbo::{Point, Rect};

/// Placement engine consumed by the view layer.
///
/// The view wires raw pointer events to `begin_drag`, `update_over`, `drop`
/// and `cancel`, and buttons to `undo` and `reset`. It renders `list()` and
/// the drag preview.
#[derive(Debug, Clone)]
pub struct Pegboard {
    config: PegboardConfig,
    catalog: Catalog,
    store: PlacementStore,
    history: HistoryTracker,
    drag: DragController,
}

impl Default for Pegboard {
    fn default() -> Self {
        Self::new(PegboardConfig::default())
    }
}

impl Pegboard {
    /// Create an empty pegboard with the stock catalog.
    pub fn new(config: PegboardConfig) -> Self {
        Self::with_catalog(config, Catalog::default())
    }

    /// Create an empty pegboard offering `catalog`.
    pub fn with_catalog(config: PegboardConfig, catalog: Catalog) -> Self {
        Self {
            config,
            catalog,
            store: PlacementStore::new(config.grid_size),
            history: HistoryTracker::new(),
            drag: DragController::new(),
        }
    }

    /// Create an empty pegboard snapping to `grid_size`.
    pub fn with_grid_size(grid_size: i64) -> PlacementResult<Self> {
        Ok(Self::new(PegboardConfig::with_grid_size(grid_size)?))
    }

    pub fn config(&self) -> &PegboardConfig {
        &self.config
    }

    pub fn grid_size(&self) -> GridSize {
        self.config.grid_size
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Start dragging a piece. Ignored while another drag is active.
    pub fn begin_drag(&mut self, type_id: impl Into<PieceType>, origin: DragOrigin) -> bool {
        self.drag.begin_drag(type_id.into(), origin)
    }

    /// Start dragging a piece that is already on the surface.
    /// Returns false if the instance is unknown or a drag is active.
    pub fn begin_move(&mut self, id: InstanceId) -> bool {
        let Some(instance) = self.store.get(id) else {
            log::warn!("Cannot drag unknown instance {}", id);
            return false;
        };
        let type_id = instance.type_id.clone();
        self.drag.begin_drag(type_id, DragOrigin::Surface(id))
    }

    /// Pointer moved during a drag.
    pub fn update_over(&mut self, global: Point) {
        self.drag.update_over(global);
    }

    /// Pointer released over `global`; `surface` is the current surface bounds.
    pub fn drop(&mut self, global: Point, surface: Rect) -> DropOutcome {
        self.drag.drop(global, surface, &mut self.store, &mut self.history)
    }

    /// Abort the current drag.
    pub fn cancel(&mut self) {
        self.drag.cancel();
    }

    /// Revert the last placement or removal.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.store)
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Remove an instance, recording the removal for undo.
    pub fn remove(&mut self, id: InstanceId) -> PlacementResult<PlacedInstance> {
        let removed = self.store.remove(id)?;
        self.history.record(HistoryEntry::Remove(removed.clone()));
        Ok(removed)
    }

    /// Clear the layout, the history and any drag in progress.
    pub fn reset(&mut self) {
        log::debug!("Reset pegboard ({} instances)", self.store.len());
        self.drag.cancel();
        self.store.reset();
        self.history.clear();
    }

    /// Placed instances in render order.
    pub fn list(&self) -> &[PlacedInstance] {
        self.store.list()
    }

    pub fn get(&self, id: InstanceId) -> Option<&PlacedInstance> {
        self.store.get(id)
    }

    pub fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    /// Hover feedback for the drag overlay.
    pub fn preview(&self, surface: Rect) -> Option<DragPreview> {
        self.drag.preview(surface, self.config.grid_size)
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlacementError;
    use crate::snap::GridPoint;

    fn surface() -> Rect {
        Rect::new(0.0, 0.0, 600.0, 400.0)
    }

    fn place(board: &mut Pegboard, type_id: &str, x: f64, y: f64) -> PlacedInstance {
        board.begin_drag(type_id, DragOrigin::Catalog);
        match board.drop(Point::new(x, y), surface()) {
            DropOutcome::Placed(instance) => instance,
            other => panic!("expected placement, got {:?}", other),
        }
    }

    fn ids(board: &Pegboard) -> Vec<InstanceId> {
        board.list().iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_invalid_grid_prevents_construction() {
        assert_eq!(
            Pegboard::with_grid_size(0).unwrap_err(),
            PlacementError::InvalidConfiguration { grid_size: 0 }
        );
        assert!(Pegboard::with_grid_size(-1).is_err());
    }

    #[test]
    fn test_drop_on_empty_surface() {
        let mut board = Pegboard::with_grid_size(20).unwrap();
        let instance = place(&mut board, "3-Peg", 103.0, 47.0);
        assert_eq!(instance.position, GridPoint::new(100, 40));
        assert_eq!(instance.type_id.as_str(), "3-Peg");
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_drag_off_surface_deletes() {
        let mut board = Pegboard::with_grid_size(20).unwrap();
        let bounds = Rect::new(100.0, 100.0, 700.0, 500.0);
        board.begin_drag("3-Peg", DragOrigin::Catalog);
        let DropOutcome::Placed(instance) = board.drop(Point::new(203.0, 147.0), bounds) else {
            panic!("expected placement");
        };
        assert_eq!(instance.position, GridPoint::new(100, 40));

        board.begin_drag("3-Peg", DragOrigin::Surface(instance.id));
        let outcome = board.drop(Point::new(15.0, 15.0), bounds);
        assert_eq!(outcome, DropOutcome::Removed(instance));
        assert!(board.list().is_empty());
    }

    #[test]
    fn test_undo_removes_only_last_drop() {
        let mut board = Pegboard::with_grid_size(20).unwrap();
        let first = place(&mut board, "Tray", 10.0, 10.0);
        let second = place(&mut board, "Tray", 200.0, 200.0);
        assert_eq!(first.position, GridPoint::new(0, 0));
        assert_eq!(second.position, GridPoint::new(200, 200));

        assert!(board.undo());
        assert_eq!(board.list(), &[first]);
    }

    #[test]
    fn test_second_begin_drag_keeps_first_session() {
        let mut board = Pegboard::default();
        let existing = place(&mut board, "Hooks", 40.0, 40.0);

        assert!(board.begin_drag("Platform", DragOrigin::Catalog));
        assert!(!board.begin_drag("Hooks", DragOrigin::Surface(existing.id)));

        let outcome = board.drop(Point::new(300.0, 300.0), surface());
        let DropOutcome::Placed(instance) = outcome else {
            panic!("expected placement, got {:?}", outcome);
        };
        assert_eq!(instance.type_id.as_str(), "Platform");
        assert_eq!(board.len(), 2);
        assert!(board.get(existing.id).is_some());
    }

    #[test]
    fn test_place_then_undo_restores_contents() {
        let mut board = Pegboard::default();
        place(&mut board, "Tray", 20.0, 20.0);
        place(&mut board, "Hooks", 80.0, 20.0);
        let before: Vec<PlacedInstance> = board.list().to_vec();

        place(&mut board, "Platform", 140.0, 20.0);
        assert!(board.undo());
        assert_eq!(board.list(), before.as_slice());
    }

    #[test]
    fn test_second_undo_is_noop() {
        let mut board = Pegboard::default();
        place(&mut board, "Tray", 20.0, 20.0);
        assert!(board.can_undo());
        assert!(board.undo());
        assert!(!board.can_undo());
        assert!(!board.undo());
    }

    #[test]
    fn test_reset_then_place() {
        let mut board = Pegboard::default();
        let old = place(&mut board, "Tray", 20.0, 20.0);
        place(&mut board, "Hooks", 60.0, 20.0);

        board.reset();
        assert!(board.list().is_empty());
        assert!(!board.undo());

        let fresh = place(&mut board, "Tray", 20.0, 20.0);
        assert_ne!(fresh.id, old.id);
        assert_eq!(ids(&board), vec![fresh.id]);
    }

    #[test]
    fn test_reset_cancels_drag() {
        let mut board = Pegboard::default();
        board.begin_drag("Tray", DragOrigin::Catalog);
        board.reset();
        assert_eq!(board.drag_state(), &DragState::Idle);
        assert_eq!(board.drop(Point::new(20.0, 20.0), surface()), DropOutcome::Ignored);
        assert!(board.is_empty());
    }

    #[test]
    fn test_cancel_leaves_layout_untouched() {
        let mut board = Pegboard::default();
        let placed = place(&mut board, "Tray", 20.0, 20.0);

        board.begin_move(placed.id);
        board.update_over(Point::new(900.0, 900.0));
        board.cancel();
        assert_eq!(board.list(), &[placed.clone()]);
        assert_eq!(board.drop(Point::new(900.0, 900.0), surface()), DropOutcome::Ignored);
        assert_eq!(board.list(), &[placed]);
    }

    #[test]
    fn test_catalog_drop_outside_records_nothing() {
        let mut board = Pegboard::default();
        let placed = place(&mut board, "Tray", 20.0, 20.0);

        board.begin_drag("Hooks", DragOrigin::Catalog);
        assert_eq!(board.drop(Point::new(-40.0, 20.0), surface()), DropOutcome::Discarded);
        assert!(board.undo());
        assert!(board.get(placed.id).is_none());
    }

    #[test]
    fn test_begin_move_uses_instance_type() {
        let mut board = Pegboard::default();
        let placed = place(&mut board, "Hooks", 20.0, 20.0);
        assert!(board.begin_move(placed.id));

        board.update_over(Point::new(95.0, 41.0));
        let preview = board.preview(surface()).unwrap();
        assert_eq!(preview.type_id.as_str(), "Hooks");
        assert_eq!(preview.position, GridPoint::new(100, 40));
        assert!(preview.over_surface);

        let DropOutcome::Moved { from, to } = board.drop(Point::new(95.0, 41.0), surface()) else {
            panic!("expected move");
        };
        assert_eq!(from.id, placed.id);
        assert_eq!(ids(&board), vec![to.id]);
    }

    #[test]
    fn test_begin_move_unknown_instance() {
        let mut board = Pegboard::default();
        assert!(!board.begin_move(uuid::Uuid::new_v4()));
        assert!(!board.drag_state().is_dragging());
    }

    #[test]
    fn test_remove_and_undo() {
        let mut board = Pegboard::default();
        let a = place(&mut board, "Tray", 20.0, 20.0);
        let b = place(&mut board, "Hooks", 60.0, 20.0);

        assert_eq!(board.remove(a.id).unwrap(), a);
        assert_eq!(board.list(), &[b.clone()]);
        assert!(board.undo());
        assert_eq!(board.list(), &[a, b]);
    }

    #[test]
    fn test_remove_unknown_leaves_history() {
        let mut board = Pegboard::default();
        let a = place(&mut board, "Tray", 20.0, 20.0);
        let unknown = uuid::Uuid::new_v4();

        assert_eq!(board.remove(unknown), Err(PlacementError::NotFound(unknown)));
        assert!(board.undo());
        assert!(board.get(a.id).is_none());
    }

    #[test]
    fn test_surface_bounds_change_between_events() {
        let mut board = Pegboard::default();
        board.begin_drag("Tray", DragOrigin::Catalog);
        board.update_over(Point::new(150.0, 150.0));
        assert!(!board.preview(Rect::new(200.0, 200.0, 400.0, 400.0)).unwrap().over_surface);

        let outcome = board.drop(Point::new(150.0, 150.0), Rect::new(100.0, 100.0, 300.0, 300.0));
        let DropOutcome::Placed(instance) = outcome else {
            panic!("expected placement, got {:?}", outcome);
        };
        assert_eq!(instance.position, GridPoint::new(40, 40));
    }
}
