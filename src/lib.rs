//! Packpick - Deterministic Package Selection
//!
//! A command-line optimizer that derives a weighted package catalog from an
//! input string and computes the exact maximum-value subset under a fixed
//! capacity using 0/1 knapsack dynamic programming.
//!
//! # Architecture
//!
//! - **Core**: Shared types and error handling
//! - **Pack**: Catalog derivation (LCG seed mixing) and the knapsack solver
//!
//! # Usage
//!
//! ```rust
//! use packpick::select;
//!
//! let selection = select("user@example.com").unwrap();
//! println!("{}", selection);
//! ```

pub mod core;
pub mod pack;

// Re-export commonly used items
pub use crate::core::{Item, PackError, Result, Selection};
pub use crate::pack::{select, CAPACITY};
