//! Search command - find snippets by term, tag and language

use crate::models::{Language, Snippet, normalize_name};
use crate::repo::{RepoError, SnippetRepository};
use crate::search::SearchQuery;
use crate::{SnipsterError, output};

type Result<T> = std::result::Result<T, SnipsterError>;

/// Parsed arguments of the search command
#[derive(Debug, Clone, Default)]
pub struct SearchArgs {
    pub term: String,
    pub tag: Option<String>,
    pub language: Option<Language>,
    pub fuzzy: bool,
}

impl SearchArgs {
    /// Build the repository query; the tag filter is normalized like stored tag names
    #[must_use]
    pub fn to_query(&self) -> SearchQuery {
        let mut query = SearchQuery::new(self.term.as_str()).fuzzy(self.fuzzy);
        if let Some(tag) = &self.tag {
            query = query.tag(normalize_name(tag));
        }
        if let Some(language) = self.language {
            query = query.language(language);
        }
        query
    }
}

/// Execute the search command, returning the matches
///
/// # Errors
/// Returns an error if the repository cannot be read.
pub fn execute(
    repo: &dyn SnippetRepository,
    args: &SearchArgs,
    json: bool,
    quiet: bool,
) -> Result<Vec<Snippet>> {
    let results = repo.search(&args.to_query())?;

    if json {
        println!("{}", output::to_json(&results).map_err(RepoError::from)?);
    } else if results.is_empty() {
        if !quiet {
            println!("No snippets match '{}'.", args.term);
        }
    } else {
        if !quiet {
            println!("Found {} snippet(s):", results.len());
        }
        println!("{}", output::snippet_list(&results, quiet));
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ALL_BACKENDS, TestRepo};

    fn titles(results: &[Snippet]) -> Vec<&str> {
        results.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_search_term_and_language() {
        for backend in ALL_BACKENDS {
            let test_repo = TestRepo::seeded(backend);
            let args = SearchArgs {
                term: "records".into(),
                language: Some(Language::Sql),
                ..SearchArgs::default()
            };
            let results = execute(test_repo.repo(), &args, false, true).unwrap();
            assert_eq!(titles(&results), vec!["Get it all", "Get some of it"], "{backend}");
        }
    }

    #[test]
    fn test_search_tag_is_normalized() {
        let test_repo = TestRepo::seeded(crate::repo::Backend::Sqlite);
        let args = SearchArgs {
            tag: Some("  Beginner ".into()),
            ..SearchArgs::default()
        };
        let results = execute(test_repo.repo(), &args, true, false).unwrap();
        assert_eq!(titles(&results), vec!["First snip"]);
    }

    #[test]
    fn test_search_fuzzy() {
        let test_repo = TestRepo::seeded(crate::repo::Backend::Memory);
        let args = SearchArgs {
            term: "ehllo world".into(),
            fuzzy: true,
            ..SearchArgs::default()
        };
        let results = execute(test_repo.repo(), &args, false, true).unwrap();
        assert_eq!(titles(&results), vec!["First snip"]);
    }
}
