//! Tag entity and name normalization

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ModelError;

/// Maximum length of a normalized tag name, in characters
pub const MAX_TAG_LEN: usize = 20;

/// A label attached to snippets
///
/// The name is normalized when the tag is built, so every layer that
/// deduplicates by name sees the same key: `"Test Tag"` and `"test  tag"`
/// both become `test-tag`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    /// Row id, assigned by the relational backend. Embedded tags have none.
    #[serde(default)]
    pub id: Option<i64>,
    name: String,
    /// Stored but not acted upon
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

impl Tag {
    /// Build a tag from raw user input
    ///
    /// # Errors
    ///
    /// Returns `ModelError::EmptyTagName` if nothing is left after
    /// normalization, or `ModelError::TagNameTooLong` if the normalized name
    /// exceeds [`MAX_TAG_LEN`] characters.
    pub fn new(name: &str) -> Result<Self, ModelError> {
        Ok(Self {
            id: None,
            name: validate_name(name)?,
            active: true,
        })
    }

    /// Rebuild a tag from a stored row without renormalizing
    pub(crate) fn from_stored(id: i64, name: String, active: bool) -> Self {
        Self {
            id: Some(id),
            name,
            active,
        }
    }

    /// The normalized name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build tags from a list of raw names, failing on the first invalid one
    ///
    /// # Errors
    ///
    /// Returns the `ModelError` of the first name that fails validation.
    pub fn parse_all<S: AsRef<str>>(names: &[S]) -> Result<Vec<Self>, ModelError> {
        names.iter().map(|n| Self::new(n.as_ref())).collect()
    }
}

/// Tags are identified by their normalized name; the row id is storage detail.
impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.active == other.active
    }
}

impl Eq for Tag {}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Trim, lower-case and collapse internal whitespace runs into one hyphen
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn validate_name(raw: &str) -> Result<String, ModelError> {
    let name = normalize_name(raw);
    let len = name.chars().count();
    if len == 0 {
        return Err(ModelError::EmptyTagName);
    }
    if len > MAX_TAG_LEN {
        return Err(ModelError::TagNameTooLong { name, len });
    }
    Ok(name)
}
