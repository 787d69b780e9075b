//! Pegboard Application
//!
//! Headless shell around the placement engine: replays a scripted sequence
//! of input events and renders the resulting layout as JSON.

mod script;

pub use script::{AppError, Layout, LayoutItem, Script, ScriptEvent, layout, replay};
