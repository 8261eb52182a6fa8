//! Delete command - remove a snippet after confirmation

use dialoguer::Confirm;
use tracing::info;

use crate::SnipsterError;
use crate::repo::{RepoError, SnippetRepository};

type Result<T> = std::result::Result<T, SnipsterError>;

/// Execute the delete command, returning whether the snippet was removed
///
/// Unless `yes` or `quiet` is set the user is asked to confirm; declining
/// leaves the store untouched.
///
/// # Errors
/// Returns `RepoError::SnippetNotFound` if the id does not exist, or an error
/// if the prompt cannot be shown or the repository cannot be written.
pub fn execute(repo: &mut dyn SnippetRepository, id: i64, yes: bool, quiet: bool) -> Result<bool> {
    if !yes && !quiet {
        let snippet = repo.get(id)?.ok_or(RepoError::SnippetNotFound(id))?;
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete snippet #{id} '{}'?", snippet.title))
            .default(false)
            .interact()
            .map_err(|e| SnipsterError::InvalidInput(format!("Failed to read confirmation: {e}")))?;

        if !confirmed {
            if !quiet {
                println!("Aborted.");
            }
            return Ok(false);
        }
    }

    repo.delete(id)?;
    info!(id, "snippet deleted");
    if !quiet {
        println!("Snippet {id} deleted");
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ALL_BACKENDS, TestRepo};

    #[test]
    fn test_delete_with_yes() {
        for backend in ALL_BACKENDS {
            let mut test_repo = TestRepo::seeded(backend);
            assert!(execute(test_repo.repo_mut(), 1, true, true).unwrap());
            assert!(test_repo.repo().get(1).unwrap().is_none(), "{backend}");
            assert_eq!(test_repo.repo().list().unwrap().len(), 2);
        }
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let mut test_repo = TestRepo::seeded(crate::repo::Backend::Json);
        let err = execute(test_repo.repo_mut(), 99, true, true).unwrap_err();
        assert_eq!(err.exit_code(), crate::EXIT_NOT_FOUND);
    }
}
