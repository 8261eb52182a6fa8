//! Show command - print one snippet in full

use crate::repo::{RepoError, SnippetRepository};
use crate::{SnipsterError, output};

type Result<T> = std::result::Result<T, SnipsterError>;

/// Execute the show command
///
/// # Errors
/// Returns `RepoError::SnippetNotFound` if the id does not exist, or an error
/// if the repository cannot be read.
pub fn execute(repo: &dyn SnippetRepository, id: i64, json: bool, highlight: bool) -> Result<()> {
    let snippet = repo.get(id)?.ok_or(RepoError::SnippetNotFound(id))?;

    if json {
        println!("{}", output::to_json(&snippet).map_err(RepoError::from)?);
    } else {
        print!("{}", output::snippet_detail(&snippet, highlight));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::Backend;
    use crate::testing::TestRepo;

    #[test]
    fn test_show_existing() {
        let test_repo = TestRepo::seeded(Backend::Sqlite);
        assert!(execute(test_repo.repo(), 2, false, false).is_ok());
        assert!(execute(test_repo.repo(), 2, true, false).is_ok());
    }

    #[test]
    fn test_show_missing_is_not_found() {
        let test_repo = TestRepo::seeded(Backend::Memory);
        let err = execute(test_repo.repo(), 99, false, false).unwrap_err();
        assert_eq!(err.exit_code(), crate::EXIT_NOT_FOUND);
    }
}
