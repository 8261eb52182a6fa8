//! Seed command - load the sample snippets

use crate::{SnipsterError, seed};
use crate::repo::SnippetRepository;

type Result<T> = std::result::Result<T, SnipsterError>;

/// Execute the seed command, returning the ids of the added snippets
///
/// # Errors
/// Returns an error if the repository cannot be written.
pub fn execute(repo: &mut dyn SnippetRepository, quiet: bool) -> Result<Vec<i64>> {
    let ids = seed::seed(repo, seed::sample_snippets()?)?;

    if quiet {
        for id in &ids {
            println!("{id}");
        }
    } else {
        println!("Added {} sample snippet(s)", ids.len());
    }
    Ok(ids)
}
