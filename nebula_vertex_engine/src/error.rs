//! Error types for the Nebula vertex engine
//!
//! This module defines the error types used throughout the engine. The three
//! layout-planning variants are configuration errors: they are raised
//! synchronously at pipeline construction time and are not retryable, the
//! caller is expected to fix the declaration and reconstruct.

use std::fmt;

/// Result type for Nebula vertex engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Nebula vertex engine errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex attribute references a buffer index beyond the supplied layout list
    AttributeBufferIndexOutOfRange {
        /// Name of the offending attribute
        attribute: String,
        /// Buffer index the attribute asked for
        buffer_index: u32,
        /// Number of buffer layouts that were supplied
        buffer_count: usize,
    },

    /// The shader program declares no vertex input with this name
    AttributeNameNotFound(String),

    /// A computed binding slot exceeds the pre-sized binding table
    ///
    /// Implies a mismatch between slot-count accounting and per-attribute
    /// resolution (e.g. attribute locations aliasing into more distinct slots
    /// than were reserved).
    SlotIndexOutOfRange {
        /// Name of the attribute being resolved
        attribute: String,
        /// The out-of-range slot index
        slot: u32,
        /// Total number of slots reserved for the plan
        slot_count: usize,
    },

    /// Invalid resource (buffer, shader, pipeline) or invalid resource usage
    InvalidResource(String),

    /// Backend-specific error
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AttributeBufferIndexOutOfRange { attribute, buffer_index, buffer_count } => {
                write!(
                    f,
                    "Vertex attribute '{}' references buffer index {} but only {} buffer layout(s) were supplied",
                    attribute, buffer_index, buffer_count
                )
            }
            Error::AttributeNameNotFound(name) => {
                write!(f, "Vertex attribute '{}' not found in shader program", name)
            }
            Error::SlotIndexOutOfRange { attribute, slot, slot_count } => {
                write!(
                    f,
                    "Vertex attribute '{}' resolved to slot {} but the layout reserves only {} slot(s)",
                    attribute, slot, slot_count
                )
            }
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error through the engine logger and return it from the enclosing function
///
/// # Example
///
/// ```ignore
/// if offset + data.len() as u64 > self.size {
///     engine_bail!("nebula::headless", Error::InvalidResource("update past end".to_string()));
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $err:expr) => {{
        let error = $err;
        $crate::engine_error!($source, "{}", error);
        return Err(error);
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
