//! Repository error types
//!
//! `SnippetNotFound` is the only domain error. It is returned by `delete`,
//! `toggle_favorite` and `tag` when the id does not exist; `get` reports a
//! missing id as `Ok(None)` instead.
//!
//! Every other variant wraps a storage failure unchanged so callers see the
//! original cause.

use thiserror::Error;

/// Repository errors
#[derive(Debug, Error)]
pub enum RepoError {
    /// No snippet with this id exists
    #[error("Snippet with ID {0} not found")]
    SnippetNotFound(i64),

    /// SQLite backend failure
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// File I/O failure in the JSON backend
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON store could not be encoded or decoded
    #[error("Error while (de)serializing JSON store: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend could not be opened from the given location
    #[error("Invalid storage location: {0}")]
    InvalidLocation(String),
}

impl RepoError {
    /// Whether this is the domain "not found" condition rather than a storage failure
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::SnippetNotFound(_))
    }
}
