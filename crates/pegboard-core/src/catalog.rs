//! Catalog of placeable piece types.
//!
//! The catalog is supplied by the view layer and is never mutated by the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a catalog piece type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceType(String);

impl PieceType {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PieceType {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PieceType {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A piece type offered in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Stable identifier referenced by placed instances.
    pub type_id: PieceType,
    /// Human readable name (shown as the hover tooltip).
    pub label: String,
    /// Reference to the artwork, resolved by the view layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_ref: Option<String>,
}

impl CatalogEntry {
    pub fn new(type_id: impl Into<PieceType>, label: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            label: label.into(),
            asset_ref: None,
        }
    }

    /// Attach an asset reference.
    pub fn with_asset(mut self, asset_ref: impl Into<String>) -> Self {
        self.asset_ref = Some(asset_ref.into());
        self
    }
}

/// Ordered, read-only list of piece types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CatalogEntry>", into = "Vec<CatalogEntry>")]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Default for Catalog {
    /// The stock pegboard inventory.
    fn default() -> Self {
        Self::new(vec![
            CatalogEntry::new("Platform", "3-Peg Platform"),
            CatalogEntry::new("Tray", "Flat Tray"),
            CatalogEntry::new("Hooks", "Double Hooks"),
        ])
    }
}

impl From<Vec<CatalogEntry>> for Catalog {
    fn from(entries: Vec<CatalogEntry>) -> Self {
        Self::new(entries)
    }
}

impl From<Catalog> for Vec<CatalogEntry> {
    fn from(catalog: Catalog) -> Self {
        catalog.entries
    }
}

impl Catalog {
    /// Build a catalog. Later entries with a duplicate type id are dropped.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let mut unique: Vec<CatalogEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if unique.iter().any(|e| e.type_id == entry.type_id) {
                log::warn!("Duplicate catalog entry ignored: {}", entry.type_id);
                continue;
            }
            unique.push(entry);
        }
        Self { entries: unique }
    }

    /// Look up an entry by type id.
    pub fn get(&self, type_id: &PieceType) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| &e.type_id == type_id)
    }

    /// Label for a type id, if it is in the catalog.
    pub fn label(&self, type_id: &PieceType) -> Option<&str> {
        self.get(type_id).map(|e| e.label.as_str())
    }

    /// Entries in inventory order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
