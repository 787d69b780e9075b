//! Drag lifecycle state machine.
//!
//! `Idle --begin_drag--> Dragging --drop/cancel--> Idle`. Only one gesture is
//! tracked at a time; events that do not apply to the current state are
//! ignored rather than reported as errors.

use crate::catalog::PieceType;
use crate::history::{HistoryEntry, HistoryTracker};
use crate::placement::{InstanceId, PlacedInstance, PlacementStore};
use crate::snap::{GridPoint, GridSize, snap_point};
use crate::surface;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Where a drag gesture started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragOrigin {
    /// From the inventory. Dropping on the surface spawns a new instance.
    Catalog,
    /// From an instance already on the surface.
    Surface(InstanceId),
}

/// State of an in-progress drag gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Piece type being dragged.
    pub type_id: PieceType,
    /// Where the drag started.
    pub origin: DragOrigin,
    /// Last pointer position reported by `update_over`, in global coordinates.
    pub pointer: Option<Point>,
}

/// Drag controller state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A gesture is in progress.
    Dragging(DragSession),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }
}

/// Hover feedback for rendering the drag overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPreview {
    pub type_id: PieceType,
    /// Where the piece would land if dropped now.
    pub position: GridPoint,
    /// Whether the pointer is over the surface.
    pub over_surface: bool,
}

/// What a drop did to the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// No gesture was active, or the dragged instance no longer exists.
    Ignored,
    /// A catalog piece was placed.
    Placed(PlacedInstance),
    /// A surface piece was re-placed. `to` is a new instance.
    Moved {
        from: PlacedInstance,
        to: PlacedInstance,
    },
    /// A surface piece was dragged off the surface and deleted.
    Removed(PlacedInstance),
    /// A catalog piece was dropped outside the surface.
    Discarded,
}

/// Drives the drag lifecycle and applies drops to the store.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state, for rendering a drag preview.
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// The active session, if dragging.
    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Start a drag gesture.
    /// Returns false (and changes nothing) if a gesture is already active.
    pub fn begin_drag(&mut self, type_id: PieceType, origin: DragOrigin) -> bool {
        if self.is_dragging() {
            log::debug!("Ignoring begin_drag for {}: drag already in progress", type_id);
            return false;
        }
        log::debug!("Begin drag {} from {:?}", type_id, origin);
        self.state = DragState::Dragging(DragSession {
            type_id,
            origin,
            pointer: None,
        });
        true
    }

    /// Record the pointer position for hover feedback.
    pub fn update_over(&mut self, global: Point) {
        if let DragState::Dragging(session) = &mut self.state {
            session.pointer = Some(global);
        }
    }

    /// Where the dragged piece would land at the last reported pointer position.
    pub fn preview(&self, surface: Rect, grid: GridSize) -> Option<DragPreview> {
        let session = self.session()?;
        let pointer = session.pointer?;
        let local = surface::to_local(pointer, surface);
        Some(DragPreview {
            type_id: session.type_id.clone(),
            position: snap_point(local, grid),
            over_surface: surface::is_over(pointer, surface),
        })
    }

    /// Finish the gesture at `global`, applying it to `store` and `history`.
    ///
    /// Always returns to `Idle`.
    pub fn drop(
        &mut self,
        global: Point,
        surface: Rect,
        store: &mut PlacementStore,
        history: &mut HistoryTracker,
    ) -> DropOutcome {
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return DropOutcome::Ignored;
        };

        let local = surface::to_local(global, surface);
        let inside = surface::is_over(global, surface);

        match (session.origin, inside) {
            (DragOrigin::Catalog, true) => {
                let instance = store.place(session.type_id, local);
                log::debug!("Placed {} at {:?}", instance.type_id, instance.position);
                history.record(HistoryEntry::Add(instance.clone()));
                DropOutcome::Placed(instance)
            }
            (DragOrigin::Catalog, false) => {
                log::debug!("Discarded {} dropped outside the surface", session.type_id);
                DropOutcome::Discarded
            }
            (DragOrigin::Surface(id), true) => {
                let from = match store.remove(id) {
                    Ok(from) => from,
                    Err(e) => {
                        log::warn!("Ignoring drop of stale drag: {}", e);
                        return DropOutcome::Ignored;
                    }
                };
                let to = store.place(from.type_id.clone(), local);
                log::debug!("Moved {} from {:?} to {:?}", to.type_id, from.position, to.position);
                history.record(HistoryEntry::Add(to.clone()));
                DropOutcome::Moved { from, to }
            }
            (DragOrigin::Surface(id), false) => match store.remove(id) {
                Ok(removed) => {
                    history.forget(removed.id);
                    log::debug!("Removed {} dragged off the surface", removed.type_id);
                    DropOutcome::Removed(removed)
                }
                Err(e) => {
                    log::warn!("Ignoring drop of stale drag: {}", e);
                    DropOutcome::Ignored
                }
            },
        }
    }

    /// Abort the gesture without touching the layout.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            log::debug!("Drag cancelled");
        }
        self.state = DragState::Idle;
    }
}
