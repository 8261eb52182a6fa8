//! Snippet entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::error::ModelError;
use super::language::Language;
use super::tag::Tag;

/// A stored piece of code with its metadata
///
/// `id` is `None` until a repository stores the snippet. `updated_at` stays
/// `None` until the first mutation after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snippet {
    pub id: Option<i64>,
    pub title: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    pub language: Language,
    #[serde(default)]
    pub favorite: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Snippet {
    /// Create a new, unsaved snippet stamped with the current time
    ///
    /// # Errors
    ///
    /// Returns `ModelError::EmptyTitle` if the title is empty or blank.
    pub fn new(
        title: impl Into<String>,
        code: impl Into<String>,
        language: Language,
    ) -> Result<Self, ModelError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ModelError::EmptyTitle);
        }

        Ok(Self {
            id: None,
            title,
            code: code.into(),
            description: None,
            language,
            favorite: false,
            created_at: Utc::now(),
            updated_at: None,
            tags: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    #[must_use]
    pub const fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    /// Stamp `updated_at` with the current time
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }

    /// Whether a tag with this exact name is attached
    #[must_use]
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name() == name)
    }

    /// Tag names in stored order
    #[must_use]
    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(Tag::name).collect()
    }

    /// Drop repeated tag names, keeping the first occurrence
    pub(crate) fn dedup_tags(&mut self) {
        let mut seen = HashSet::with_capacity(self.tags.len());
        self.tags.retain(|t| seen.insert(t.name().to_string()));
    }
}

/// Field-for-field equality, with tags compared as a set.
impl PartialEq for Snippet {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.code == other.code
            && self.description == other.description
            && self.language == other.language
            && self.favorite == other.favorite
            && self.created_at == other.created_at
            && self.updated_at == other.updated_at
            && same_tag_set(&self.tags, &other.tags)
    }
}

impl Eq for Snippet {}

fn same_tag_set(a: &[Tag], b: &[Tag]) -> bool {
    let left: HashSet<(&str, bool)> = a.iter().map(|t| (t.name(), t.active)).collect();
    let right: HashSet<(&str, bool)> = b.iter().map(|t| (t.name(), t.active)).collect();
    left == right
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(name: &str) -> Tag {
        Tag::new(name).unwrap()
    }

    #[test]
    fn test_new_snippet_defaults() {
        let snippet = Snippet::new("Hello", "print('hi')", Language::Python).unwrap();
        assert_eq!(snippet.id, None);
        assert!(!snippet.favorite);
        assert!(snippet.updated_at.is_none());
        assert!(snippet.tags.is_empty());
        assert!(snippet.description.is_none());
    }

    #[test]
    fn test_blank_title_rejected() {
        assert_eq!(
            Snippet::new("  ", "x", Language::Rust),
            Err(ModelError::EmptyTitle)
        );
    }

    #[test]
    fn test_tag_order_does_not_affect_equality() {
        let base = Snippet::new("t", "c", Language::Sql).unwrap();
        let a = base.clone().with_tags(vec![tag("one"), tag("two")]);
        let b = base.with_tags(vec![tag("two"), tag("one")]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_tags_are_not_equal() {
        let base = Snippet::new("t", "c", Language::Sql).unwrap();
        let a = base.clone().with_tags(vec![tag("one")]);
        let b = base.with_tags(vec![tag("one"), tag("two")]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_touch_sets_updated_at() {
        let mut snippet = Snippet::new("t", "c", Language::Rust).unwrap();
        snippet.touch();
        assert!(snippet.updated_at.is_some());
    }

    #[test]
    fn test_dedup_tags_keeps_first() {
        let mut snippet = Snippet::new("t", "c", Language::Rust)
            .unwrap()
            .with_tags(vec![tag("a"), tag("b"), tag("A")]);
        snippet.dedup_tags();
        assert_eq!(snippet.tag_names(), vec!["a", "b"]);
    }

    #[test]
    fn test_missing_tags_deserialize_as_empty() {
        let json = r#"{
            "id": 3,
            "title": "t",
            "code": "c",
            "language": "rs",
            "created_at": "2025-05-29T13:14:33Z"
        }"#;
        let snippet: Snippet = serde_json::from_str(json).unwrap();
        assert!(snippet.tags.is_empty());
        assert!(!snippet.favorite);
        assert!(snippet.updated_at.is_none());
    }
}
