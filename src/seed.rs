//! Sample snippets for a fresh store

use crate::models::{Language, ModelError, Snippet, Tag};
use crate::repo::{RepoError, SnippetRepository};

/// The four sample snippets: two Python, one SQL, one Rust
///
/// # Errors
///
/// Returns `ModelError` only if a built-in title or tag fails validation.
pub fn sample_snippets() -> Result<Vec<Snippet>, ModelError> {
    let beginner = Tag::new("beginner")?;
    let training = Tag::new("training")?;
    let query = Tag::new("query")?;

    Ok(vec![
        Snippet::new("List comprehension", "[x*x for x in range(10)]", Language::Python)?
            .with_description("Python's one-liner for generating lists")
            .with_tags(vec![beginner, training.clone()]),
        Snippet::new(
            "Filter a table",
            "SELECT * FROM users WHERE age > 30;",
            Language::Sql,
        )?
        .with_description("Basic SQL query to select users older than 30")
        .with_tags(vec![query])
        .with_favorite(true),
        Snippet::new(
            "F-Strings",
            "name = 'Harry'\nprint(f'Hello, {name}!')",
            Language::Python,
        )?
        .with_description("Python 3.6+ supports in-line string formatting")
        .with_tags(vec![training.clone()])
        .with_favorite(true),
        Snippet::new(
            "Traits",
            "trait Greet {\n    fn greet(&self);\n}",
            Language::Rust,
        )?
        .with_description("Traits define shared behavior in Rust")
        .with_tags(vec![training]),
    ])
}

/// Add the sample snippets to `repo`, returning their ids
///
/// # Errors
///
/// Returns `RepoError` if the repository cannot store a snippet.
pub fn seed(repo: &mut dyn SnippetRepository, snippets: Vec<Snippet>) -> Result<Vec<i64>, RepoError> {
    let mut ids = Vec::with_capacity(snippets.len());
    for mut snippet in snippets {
        repo.add(&mut snippet)?;
        ids.extend(snippet.id);
    }
    Ok(ids)
}
