//! Core error types.

use thiserror::Error;

/// Errors raised by this crate.
///
/// Codec misses are not errors; they come back as `None`. Resolver failures
/// are returned as the resolver's own error type and never wrapped here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A canonical label did not match any variant.
    #[error("unknown {kind} label: {label:?}")]
    UnknownLabel {
        /// Which enumeration was being parsed.
        kind: &'static str,
        /// The rejected input.
        label: String,
    },

    /// A naming template is malformed.
    #[error("invalid naming template: {0}")]
    InvalidTemplate(String),
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
