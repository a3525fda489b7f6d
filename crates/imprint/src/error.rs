//! Error types for formatting.

use imprint_directive::SyntaxError;
use thiserror::Error;

/// Errors surfaced by [`format`](crate::format).
///
/// The first error encountered during a scan aborts the call; a call either
/// returns the complete output or one of these, never partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Malformed directive, with the offending substring and its byte offset.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// An argument index, explicit or implicit, beyond the supplied list.
    #[error("argument index {index} out of range: {supplied} argument(s) supplied")]
    Index { index: usize, supplied: usize },

    /// The argument's runtime type does not support the requested conversion.
    #[error("cannot render a {value_type} value as {conversion}")]
    TypeMismatch {
        conversion: &'static str,
        value_type: &'static str,
    },
}

/// Result type for formatting operations.
pub type Result<T> = std::result::Result<T, FormatError>;
