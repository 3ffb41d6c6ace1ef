//! Core module - shared infrastructure for Packpick
//!
//! This module contains the foundational data types and error handling
//! used throughout the application.

pub mod error;
pub mod types;

pub use error::{PackError, Result};
pub use types::*;
