//! Snipster - a code snippet manager
//!
//! Snippets (title, code, language, description, tags, favorite flag) are kept
//! in one of three interchangeable stores behind the
//! [`repo::SnippetRepository`] trait: in-memory, a JSON file, or SQLite.
//! Search supports exact and fuzzy matching with tag and language filters.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod output;
pub mod repo;
pub mod search;
pub mod seed;

#[cfg(test)]
pub mod testing;

/// Process exit code for a missing snippet
pub const EXIT_NOT_FOUND: i32 = 2;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum SnipsterError {
    /// Storage error, including a missing snippet
    #[error("{0}")]
    RepoError(#[from] repo::RepoError),
    /// Invalid snippet or tag data
    #[error("Invalid data: {0}")]
    ModelError(#[from] models::ModelError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SnipsterError {
    /// Exit code for the binary: 2 when a snippet id was not found, 1 otherwise
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::RepoError(e) if e.is_not_found() => EXIT_NOT_FOUND,
            _ => 1,
        }
    }
}
