//! Error types for the roster-protocol crate.
//!
//! This module defines the error types that can occur when working with
//! protocol types, such as parsing enumeration codes or formatting labels.

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// An enumeration code did not match any known variant.
    #[error("unknown {kind} code: {code:?}")]
    UnknownVariant {
        /// The enumeration being parsed (e.g. "salutation").
        kind: &'static str,
        /// The code that was rejected.
        code: String,
    },

    /// An enumeration label was requested for an empty string.
    #[error("cannot capitalize an empty label")]
    EmptyLabel,
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
