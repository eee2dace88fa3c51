//! Error types for node operations.
//!
//! Path-driven operations never fail: a missing path or a node of the wrong
//! shape turns the operation into a no-op. These errors are reserved for the
//! entry points whose caller must hand over a node of a particular shape.

use std::fmt;

/// Errors raised when a caller's shape precondition does not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    /// An object was required.
    NotAnObject { found: &'static str },
    /// A document root must be an object or an array.
    InvalidRoot { found: &'static str },
}

impl fmt::Display for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeError::NotAnObject { found } => {
                write!(f, "Expected an object, found {}", found)
            }
            NodeError::InvalidRoot { found } => {
                write!(
                    f,
                    "Document root must be an object or an array, found {}",
                    found
                )
            }
        }
    }
}

impl std::error::Error for NodeError {}
