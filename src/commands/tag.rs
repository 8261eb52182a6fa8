//! Tag command - add or remove tags on a snippet

use tracing::info;

use crate::SnipsterError;
use crate::models::{Snippet, Tag};
use crate::repo::{SnippetRepository, TagMode};

type Result<T> = std::result::Result<T, SnipsterError>;

/// Execute the tag command, returning the updated snippet
///
/// # Errors
/// Returns an error if no tag is given or a tag name is invalid,
/// `RepoError::SnippetNotFound` if the id does not exist, or an error if the
/// repository cannot be written.
pub fn execute(
    repo: &mut dyn SnippetRepository,
    id: i64,
    names: &[String],
    remove: bool,
    quiet: bool,
) -> Result<Snippet> {
    if names.is_empty() {
        return Err(SnipsterError::InvalidInput("No tags provided".into()));
    }

    let tags = Tag::parse_all(names)?;
    let mode = TagMode::from_remove_flag(remove);
    let snippet = repo.tag(id, &tags, mode)?;
    info!(id, ?mode, count = tags.len(), "tags reconciled");

    if !quiet {
        let names = snippet.tag_names();
        if names.is_empty() {
            println!("Snippet {id} has no tags");
        } else {
            println!("Snippet {id} tags: {}", names.join(", "));
        }
    }
    Ok(snippet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ALL_BACKENDS, TestRepo};

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_add_then_remove() {
        for backend in ALL_BACKENDS {
            let mut test_repo = TestRepo::seeded(backend);
            let updated = execute(test_repo.repo_mut(), 2, &names(&["Query", "sql"]), false, true).unwrap();
            assert_eq!(updated.tag_names(), vec!["query", "sql"], "{backend}");

            let updated = execute(test_repo.repo_mut(), 2, &names(&["query"]), true, true).unwrap();
            assert_eq!(updated.tag_names(), vec!["sql"], "{backend}");
            assert_eq!(test_repo.repo().get(2).unwrap().unwrap().tag_names(), vec!["sql"]);
        }
    }

    #[test]
    fn test_requires_names() {
        let mut test_repo = TestRepo::seeded(crate::repo::Backend::Memory);
        assert!(matches!(
            execute(test_repo.repo_mut(), 1, &[], false, true),
            Err(SnipsterError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_missing_snippet() {
        let mut test_repo = TestRepo::new(crate::repo::Backend::Sqlite);
        let err = execute(test_repo.repo_mut(), 4, &names(&["x"]), false, true).unwrap_err();
        assert_eq!(err.exit_code(), crate::EXIT_NOT_FOUND);
    }
}
