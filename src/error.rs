//! Error types for xmlschema-core
//!
//! This module defines the error taxonomy shared by the qualified name
//! functions and the attribute validators. It mirrors the value/type
//! exception split of the Python xmlschema package.

use thiserror::Error;

/// Result type alias using xmlschema-core Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for xmlschema-core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed qualified name structure (unbalanced or ambiguous
    /// brace-delimited namespace segment, multiple colons)
    #[error("format error: {0}")]
    Format(String),

    /// A value that is not string-like was supplied where a qualified name
    /// was required. Unreachable through this crate's `&str` signatures;
    /// kept for embedders that convert dynamically typed node values.
    #[error("type error: {0}")]
    Type(String),

    /// An attribute value outside its permitted token set, or a numeric
    /// value with an invalid lexical form
    #[error("constraint error: {0}")]
    Constraint(String),
}
