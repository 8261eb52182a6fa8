//! List command - print every stored snippet

use crate::repo::{RepoError, SnippetRepository};
use crate::{SnipsterError, output};

type Result<T> = std::result::Result<T, SnipsterError>;

/// Execute the list command
///
/// # Errors
/// Returns an error if the repository cannot be read.
pub fn execute(repo: &dyn SnippetRepository, json: bool, quiet: bool) -> Result<usize> {
    let snippets = repo.list()?;

    if json {
        println!("{}", output::to_json(&snippets).map_err(RepoError::from)?);
    } else if snippets.is_empty() {
        if !quiet {
            println!("No snippets found.");
        }
    } else {
        println!("{}", output::snippet_list(&snippets, quiet));
    }
    Ok(snippets.len())
}
