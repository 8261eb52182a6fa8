//! Snippet search shared by every repository backend
//!
//! Two strategies, selected by [`SearchQuery::fuzzy`]:
//!
//! - **Exact**: the lower-cased term is a substring of the lower-cased
//!   title, code or description. An empty term matches everything, which is
//!   how "filter by language/tag only" queries are expressed.
//! - **Fuzzy**: the [`similarity::ratio`] between the lower-cased term and at
//!   least one lower-cased field reaches [`FUZZY_THRESHOLD`].
//!
//! Language and tag filters are AND-combined with the term match in both
//! strategies.
//!
//! # Examples
//!
//! ```
//! use snipster::models::{Language, Snippet};
//! use snipster::search::{SearchQuery, filter_snippets};
//!
//! let snippets = vec![
//!     Snippet::new("Get it all", "SELECT * FROM t;", Language::Sql).unwrap(),
//!     Snippet::new("Hello", "print('hello world')", Language::Python).unwrap(),
//! ];
//!
//! let query = SearchQuery::new("select");
//! assert_eq!(filter_snippets(snippets.clone(), &query).len(), 1);
//!
//! let query = SearchQuery::new("").language(Language::Python);
//! assert_eq!(filter_snippets(snippets, &query).len(), 1);
//! ```

pub mod similarity;

use crate::models::{Language, Snippet};

/// Minimum similarity ratio for a fuzzy match
pub const FUZZY_THRESHOLD: f64 = 0.6;

/// Search term plus optional filters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    pub term: String,
    pub tag_name: Option<String>,
    pub language: Option<Language>,
    pub fuzzy: bool,
}

impl SearchQuery {
    #[must_use]
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    /// Only keep snippets carrying a tag with exactly this name
    #[must_use]
    pub fn tag(mut self, name: impl Into<String>) -> Self {
        self.tag_name = Some(name.into());
        self
    }

    /// Only keep snippets in this language
    #[must_use]
    pub const fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    #[must_use]
    pub const fn fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = fuzzy;
        self
    }

    /// Whether `snippet` satisfies the term and every filter given
    #[must_use]
    pub fn matches(&self, snippet: &Snippet) -> bool {
        if let Some(language) = self.language
            && snippet.language != language
        {
            return false;
        }

        if let Some(tag_name) = &self.tag_name
            && !snippet.has_tag(tag_name)
        {
            return false;
        }

        let term = self.term.to_lowercase();
        if self.fuzzy {
            fuzzy_match(&term, snippet)
        } else {
            exact_match(&term, snippet)
        }
    }
}

/// Keep the snippets matching `query`, preserving input order
pub fn filter_snippets(
    snippets: impl IntoIterator<Item = Snippet>,
    query: &SearchQuery,
) -> Vec<Snippet> {
    snippets.into_iter().filter(|s| query.matches(s)).collect()
}

/// Lower-cased title, code and description
fn searchable_fields(snippet: &Snippet) -> [String; 3] {
    [
        snippet.title.to_lowercase(),
        snippet.code.to_lowercase(),
        snippet.description.as_deref().unwrap_or_default().to_lowercase(),
    ]
}

fn exact_match(term: &str, snippet: &Snippet) -> bool {
    searchable_fields(snippet)
        .iter()
        .any(|field| field.contains(term))
}

fn fuzzy_match(term: &str, snippet: &Snippet) -> bool {
    searchable_fields(snippet)
        .iter()
        .any(|field| similarity::ratio(term, field) >= FUZZY_THRESHOLD)
}
