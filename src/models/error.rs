//! Validation errors for the entity model
//!
//! These are raised when a `Snippet`, `Tag` or `Language` is constructed or
//! parsed, independently of any repository.

use thiserror::Error;

/// Errors raised while building or parsing entities
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Snippet title was empty or only whitespace
    #[error("Snippet title must not be empty")]
    EmptyTitle,

    /// Tag name was empty after normalization
    #[error("Tag name must not be empty")]
    EmptyTagName,

    /// Tag name exceeds the maximum length after normalization
    #[error("Tag name '{name}' is {len} characters long (max {max})", max = super::tag::MAX_TAG_LEN)]
    TagNameTooLong { name: String, len: usize },

    /// Language string did not match any supported language
    #[error("Unknown language: {0} (expected one of: py, sql, rs)")]
    UnknownLanguage(String),
}
