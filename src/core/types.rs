//! Shared types used across Packpick modules
//!
//! Contains the weighted package item and the solver's selection result.

use serde::{Deserialize, Serialize};

/// Sentinel emitted when the solver selects nothing
pub const EMPTY_SELECTION: &str = "No viable packages";

/// A weighted package item in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique single-letter identifier within a catalog
    pub id: char,
    /// Mass of the item, strictly positive
    pub weight: u32,
    /// Worth of the item, strictly positive
    pub value: u32,
}

impl Item {
    /// Create a new catalog item
    pub const fn new(id: char, weight: u32, value: u32) -> Self {
        Self { id, weight, value }
    }
}

/// The solver's chosen subset, stored sorted by identifier ascending
///
/// Backtrack discovery order is discarded at construction; only the
/// identifier ordering is observable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    items: Vec<Item>,
}

impl Selection {
    /// Create a selection from the solver's reconstructed items
    pub fn new(mut items: Vec<Item>) -> Self {
        items.sort_by_key(|item| item.id);
        Self { items }
    }

    /// The selected items, sorted by identifier
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Whether no item was selected
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of weights over the selected items
    pub fn total_weight(&self) -> u32 {
        self.items.iter().map(|item| item.weight).sum()
    }

    /// Sum of values over the selected items
    pub fn total_value(&self) -> u32 {
        self.items.iter().map(|item| item.value).sum()
    }
}

impl std::fmt::Display for Selection {
    /// Formats as comma-joined identifiers, or the empty-selection sentinel
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.items.is_empty() {
            return write!(f, "{}", EMPTY_SELECTION);
        }
        let ids: Vec<String> = self.items.iter().map(|item| item.id.to_string()).collect();
        write!(f, "{}", ids.join(","))
    }
}
