//! Set-based reconciliation of a snippet's tags
//!
//! Shared by every backend so add/remove semantics are identical regardless
//! of storage.

use std::collections::HashSet;

use crate::models::Tag;

/// Whether incoming tags are added to or removed from a snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagMode {
    #[default]
    Add,
    Remove,
}

impl TagMode {
    #[must_use]
    pub const fn from_remove_flag(remove: bool) -> Self {
        if remove { Self::Remove } else { Self::Add }
    }
}

/// Compute the new tag set for a snippet
///
/// - `Add`: existing tags keep their order, followed by incoming tags whose
///   name is not present yet, in first-seen order.
/// - `Remove`: existing tags minus any whose name appears in `incoming`.
///   Names that are not attached are ignored.
///
/// Runs in `O(current + incoming)` using a name set.
#[must_use]
pub fn reconcile(current: &[Tag], incoming: &[Tag], mode: TagMode) -> Vec<Tag> {
    match mode {
        TagMode::Add => {
            let mut seen: HashSet<&str> = current.iter().map(Tag::name).collect();
            let mut result = current.to_vec();
            for tag in incoming {
                if seen.insert(tag.name()) {
                    result.push(tag.clone());
                }
            }
            result
        }
        TagMode::Remove => {
            let doomed: HashSet<&str> = incoming.iter().map(Tag::name).collect();
            current
                .iter()
                .filter(|t| !doomed.contains(t.name()))
                .cloned()
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<Tag> {
        Tag::parse_all(names).unwrap()
    }

    fn names(tags: &[Tag]) -> Vec<&str> {
        tags.iter().map(Tag::name).collect()
    }

    #[test]
    fn test_add_to_empty() {
        let result = reconcile(&[], &tags(&["a", "b"]), TagMode::Add);
        assert_eq!(names(&result), vec!["a", "b"]);
    }

    #[test]
    fn test_add_collapses_incoming_duplicates() {
        let result = reconcile(&[], &tags(&["training", "training"]), TagMode::Add);
        assert_eq!(names(&result), vec!["training"]);
    }

    #[test]
    fn test_add_is_idempotent() {
        let once = reconcile(&[], &tags(&["training"]), TagMode::Add);
        let twice = reconcile(&once, &tags(&["training"]), TagMode::Add);
        assert_eq!(names(&twice), vec!["training"]);
    }

    #[test]
    fn test_add_preserves_existing_order() {
        let current = tags(&["z", "a"]);
        let result = reconcile(&current, &tags(&["m", "a", "b"]), TagMode::Add);
        assert_eq!(names(&result), vec!["z", "a", "m", "b"]);
    }

    #[test]
    fn test_add_keeps_stored_ids() {
        let current = vec![Tag::from_stored(4, "query".into(), true)];
        let result = reconcile(&current, &tags(&["query"]), TagMode::Add);
        assert_eq!(result[0].id, Some(4));
    }

    #[test]
    fn test_remove() {
        let current = tags(&["a", "b", "c"]);
        let result = reconcile(&current, &tags(&["a", "c"]), TagMode::Remove);
        assert_eq!(names(&result), vec!["b"]);
    }

    #[test]
    fn test_remove_missing_name_is_noop() {
        let current = tags(&["a"]);
        let result = reconcile(&current, &tags(&["nope"]), TagMode::Remove);
        assert_eq!(names(&result), vec!["a"]);
    }

    #[test]
    fn test_remove_matches_normalized_names() {
        let current = tags(&["Test Tag", "Test Tag 2"]);
        let result = reconcile(&current, &tags(&["test   TAG"]), TagMode::Remove);
        assert_eq!(names(&result), vec!["test-tag-2"]);
    }

    #[test]
    fn test_mode_from_flag() {
        assert_eq!(TagMode::from_remove_flag(true), TagMode::Remove);
        assert_eq!(TagMode::from_remove_flag(false), TagMode::Add);
    }
}
