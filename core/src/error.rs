//! Error types for textual id lookups.
//!
//! # Design
//! The store operations themselves report absence with `bool` or `Option`.
//! `TodoError` only exists for callers that start from a string, where a
//! malformed id and a missing item are worth telling apart.

use std::fmt;

use uuid::Uuid;

/// Errors returned by `TodoService::find` and `parse_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// The input could not be parsed as a UUID.
    InvalidId(String),

    /// No stored item has this id.
    NotFound(Uuid),
}

impl fmt::Display for TodoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoError::InvalidId(input) => write!(f, "invalid todo id: {input:?}"),
            TodoError::NotFound(id) => write!(f, "todo {id} not found"),
        }
    }
}

impl std::error::Error for TodoError {}
