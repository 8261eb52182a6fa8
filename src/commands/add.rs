//! Add command - store a new snippet

use tracing::info;

use crate::SnipsterError;
use crate::models::{Language, Snippet, Tag};
use crate::repo::SnippetRepository;

type Result<T> = std::result::Result<T, SnipsterError>;

/// Parsed arguments of the add command
#[derive(Debug, Clone)]
pub struct AddArgs {
    pub title: String,
    pub code: String,
    pub language: Language,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub favorite: bool,
}

/// Execute the add command, returning the new snippet's id
///
/// # Errors
/// Returns an error if the title or a tag name is invalid, or the repository
/// cannot store the snippet.
pub fn execute(repo: &mut dyn SnippetRepository, args: AddArgs, quiet: bool) -> Result<i64> {
    let tags = Tag::parse_all(args.tags.as_slice())?;
    let mut snippet = Snippet::new(args.title, args.code, args.language)?
        .with_tags(tags)
        .with_favorite(args.favorite);
    if let Some(description) = args.description {
        snippet = snippet.with_description(description);
    }

    repo.add(&mut snippet)?;
    let id = snippet
        .id
        .ok_or_else(|| SnipsterError::InvalidInput("Repository did not assign an id".into()))?;
    info!(id, title = %snippet.title, "snippet added");

    if quiet {
        println!("{id}");
    } else {
        println!("Snippet '{}' added with id {id}", snippet.title);
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModelError;
    use crate::repo::MemoryRepository;

    fn args(title: &str, tags: &[&str]) -> AddArgs {
        AddArgs {
            title: title.into(),
            code: "print('hello world')".into(),
            language: Language::Python,
            description: Some("Good day, Snipster!".into()),
            tags: tags.iter().map(ToString::to_string).collect(),
            favorite: true,
        }
    }

    #[test]
    fn test_add_stores_snippet() {
        let mut repo = MemoryRepository::new();
        let id = execute(&mut repo, args("Test Snippet", &["Beginner", "training"]), true).unwrap();
        assert_eq!(id, 1);

        let stored = repo.get(1).unwrap().unwrap();
        assert_eq!(stored.title, "Test Snippet");
        assert_eq!(stored.description.as_deref(), Some("Good day, Snipster!"));
        assert_eq!(stored.tag_names(), vec!["beginner", "training"]);
        assert!(stored.favorite);
    }

    #[test]
    fn test_add_rejects_blank_title() {
        let mut repo = MemoryRepository::new();
        let err = execute(&mut repo, args("  ", &[]), true).unwrap_err();
        assert!(matches!(err, SnipsterError::ModelError(ModelError::EmptyTitle)));
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_add_rejects_long_tag() {
        let mut repo = MemoryRepository::new();
        let err = execute(&mut repo, args("t", &["a-very-long-tag-name-indeed"]), true).unwrap_err();
        assert!(matches!(
            err,
            SnipsterError::ModelError(ModelError::TagNameTooLong { .. })
        ));
    }
}
