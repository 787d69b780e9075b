//! Input scripts: the events a view layer would deliver, in order.

use kurbo::{Point, Rect};
use pegboard_core::{
    Catalog, DragOrigin, DropOutcome, InstanceId, Pegboard, PegboardConfig, PieceType,
    PlacementError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid script: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Step {step}: no placed instance at index {index}")]
    UnknownInstance { step: usize, index: usize },
    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// A recorded session against one surface.
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub config: PegboardConfig,
    /// Inventory override. The stock pegboard pieces are used when absent.
    #[serde(default)]
    pub catalog: Option<Catalog>,
    /// Surface bounds in global coordinates.
    pub surface: Rect,
    pub events: Vec<ScriptEvent>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One input event.
///
/// Placed instances are referenced by their index in the current layout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    BeginDrag {
        type_id: PieceType,
        #[serde(default)]
        instance: Option<usize>,
    },
    UpdateOver { x: f64, y: f64 },
    Drop { x: f64, y: f64 },
    Cancel,
    Undo,
    Reset,
    Remove { instance: usize },
    /// The surface moved or was resized.
    Resize { surface: Rect },
}

fn instance_at(board: &Pegboard, step: usize, index: usize) -> Result<InstanceId, AppError> {
    board
        .list()
        .get(index)
        .map(|i| i.id)
        .ok_or(AppError::UnknownInstance { step, index })
}

/// Feed every event of `script` to a fresh pegboard.
pub fn replay(script: &Script) -> Result<Pegboard, AppError> {
    let catalog = script.catalog.clone().unwrap_or_default();
    let mut board = Pegboard::with_catalog(script.config, catalog);
    let mut surface = script.surface;

    for (step, event) in script.events.iter().enumerate() {
        match event {
            ScriptEvent::BeginDrag { type_id, instance } => {
                let origin = match instance {
                    Some(index) => DragOrigin::Surface(instance_at(&board, step, *index)?),
                    None => DragOrigin::Catalog,
                };
                if !board.begin_drag(type_id.clone(), origin) {
                    log::info!("Step {}: drag already in progress", step);
                }
            }
            ScriptEvent::UpdateOver { x, y } => board.update_over(Point::new(*x, *y)),
            ScriptEvent::Drop { x, y } => match board.drop(Point::new(*x, *y), surface) {
                DropOutcome::Ignored => log::info!("Step {}: drop ignored", step),
                DropOutcome::Placed(i) => log::info!(
                    "Step {}: placed {} at ({}, {})",
                    step,
                    i.type_id,
                    i.position.x,
                    i.position.y
                ),
                DropOutcome::Moved { from, to } => log::info!(
                    "Step {}: moved {} to ({}, {})",
                    step,
                    from.type_id,
                    to.position.x,
                    to.position.y
                ),
                DropOutcome::Removed(i) => log::info!("Step {}: removed {}", step, i.type_id),
                DropOutcome::Discarded => log::info!("Step {}: dropped outside the surface", step),
            },
            ScriptEvent::Cancel => board.cancel(),
            ScriptEvent::Undo => {
                if !board.undo() {
                    log::info!("Step {}: nothing to undo", step);
                }
            }
            ScriptEvent::Reset => board.reset(),
            ScriptEvent::Remove { instance } => {
                let id = instance_at(&board, step, *instance)?;
                board.remove(id)?;
            }
            ScriptEvent::Resize { surface: bounds } => surface = *bounds,
        }
    }

    Ok(board)
}

/// A placed piece as rendered in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutItem {
    pub id: InstanceId,
    pub type_id: PieceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub x: i64,
    pub y: i64,
    pub order: u64,
}

/// The final layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub grid_size: i64,
    pub can_undo: bool,
    pub items: Vec<LayoutItem>,
}

/// Render the board state.
pub fn layout(board: &Pegboard) -> Layout {
    let items = board
        .list()
        .iter()
        .map(|i| LayoutItem {
            id: i.id,
            type_id: i.type_id.clone(),
            label: board.catalog().label(&i.type_id).map(str::to_string),
            x: i.position.x,
            y: i.position.y,
            order: i.order,
        })
        .collect();
    Layout {
        grid_size: board.grid_size().get(),
        can_undo: board.can_undo(),
        items,
    }
}
