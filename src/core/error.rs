//! Custom error types for Packpick
//!
//! Both variants are fatal at the CLI boundary: the input is syntactically
//! invalid, not transiently unavailable, so nothing is retried. Every stage
//! past input validation is a total function with no failure modes.

use thiserror::Error;

/// Main error type for Packpick operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    /// No positional argument supplied
    #[error("no input string supplied. Usage: packpick <INPUT>")]
    MissingInput,

    /// Argument supplied but has zero length
    #[error("input string must not be empty")]
    EmptyInput,
}

/// Convenience Result type for Packpick operations
pub type Result<T> = std::result::Result<T, PackError>;
