//! Favorite command - toggle the favorite flag

use crate::SnipsterError;
use crate::repo::SnippetRepository;

type Result<T> = std::result::Result<T, SnipsterError>;

/// Execute the favorite command, returning the new flag value
///
/// # Errors
/// Returns `RepoError::SnippetNotFound` if the id does not exist, or an error
/// if the repository cannot be written.
pub fn execute(repo: &mut dyn SnippetRepository, id: i64, quiet: bool) -> Result<bool> {
    let snippet = repo.toggle_favorite(id)?;

    if !quiet {
        if snippet.favorite {
            println!("Snippet {id} marked as favorite");
        } else {
            println!("Snippet {id} removed from favorites");
        }
    }
    Ok(snippet.favorite)
}
