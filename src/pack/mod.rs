//! Pack module - catalog derivation and knapsack optimization
//!
//! Contains the seed-driven catalog builder and the exact 0/1 knapsack
//! solver, consumed in sequence by [`select`].

pub mod catalog;
pub mod solver;

pub use catalog::CAPACITY;

use crate::core::{PackError, Result, Selection};

/// Run the full selection pipeline over one input string.
///
/// Builds the 8-item catalog from `input`, solves the knapsack at the
/// fixed capacity, and returns the identifier-sorted selection. Pure:
/// identical inputs always yield identical selections.
pub fn select(input: &str) -> Result<Selection> {
    if input.is_empty() {
        return Err(PackError::EmptyInput);
    }

    let items = catalog::build(input);
    let chosen = solver::solve(&items, CAPACITY);
    Ok(Selection::new(chosen))
}
