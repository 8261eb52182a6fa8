//! Snippet repository
//!
//! One contract, [`SnippetRepository`], implemented by three backends:
//!
//! - [`MemoryRepository`]: ordered map in process memory
//! - [`JsonRepository`]: single JSON file, full read-modify-write per call
//! - [`SqliteRepository`]: SQLite database, one transaction per call
//!
//! Search and tag reconciliation are shared free functions
//! ([`crate::search::filter_snippets`], [`reconcile::reconcile`]) so the
//! backends only differ in how they load and store snippets.
//!
//! # Examples
//!
//! ```
//! use snipster::models::{Language, Snippet, Tag};
//! use snipster::repo::{MemoryRepository, SnippetRepository, TagMode};
//!
//! let mut repo = MemoryRepository::new();
//! let mut snippet = Snippet::new("Hello", "print('hi')", Language::Python).unwrap();
//! repo.add(&mut snippet).unwrap();
//! assert_eq!(snippet.id, Some(1));
//!
//! let tags = Tag::parse_all(&["Beginner"]).unwrap();
//! let updated = repo.tag(1, &tags, TagMode::Add).unwrap();
//! assert_eq!(updated.tag_names(), vec!["beginner"]);
//!
//! assert!(repo.get(2).unwrap().is_none());
//! assert!(repo.delete(2).unwrap_err().is_not_found());
//! ```

pub mod error;
pub mod json;
pub mod memory;
pub mod reconcile;
pub mod sqlite;

pub use error::RepoError;
pub use json::JsonRepository;
pub use memory::MemoryRepository;
pub use reconcile::TagMode;
pub use sqlite::{DatabaseLocation, SqliteRepository};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::models::{Snippet, Tag};
use crate::search::SearchQuery;

/// Storage operations every backend provides
///
/// `get` reports a missing id as `Ok(None)`. `delete`, `toggle_favorite` and
/// `tag` report it as `RepoError::SnippetNotFound`. Any other error is a
/// storage failure passed through unchanged.
pub trait SnippetRepository {
    /// Store a snippet, assigning `max id + 1` when it has no id yet
    ///
    /// On return `snippet.id` is set. A snippet that already carries an id
    /// replaces any stored snippet with that id.
    ///
    /// # Errors
    ///
    /// Returns `RepoError` if the backing store cannot be written.
    fn add(&mut self, snippet: &mut Snippet) -> Result<(), RepoError>;

    /// All snippets in ascending id order
    ///
    /// # Errors
    ///
    /// Returns `RepoError` if the backing store cannot be read.
    fn list(&self) -> Result<Vec<Snippet>, RepoError>;

    /// The snippet with `id`, or `None`
    ///
    /// # Errors
    ///
    /// Returns `RepoError` only if the backing store cannot be read.
    fn get(&self, id: i64) -> Result<Option<Snippet>, RepoError>;

    /// Remove a snippet; its tags stay available to other snippets
    ///
    /// # Errors
    ///
    /// Returns `RepoError::SnippetNotFound` if no snippet has this id.
    fn delete(&mut self, id: i64) -> Result<(), RepoError>;

    /// Snippets matching `query`, in `list` order
    ///
    /// # Errors
    ///
    /// Returns `RepoError` if the backing store cannot be read.
    fn search(&self, query: &SearchQuery) -> Result<Vec<Snippet>, RepoError>;

    /// Flip `favorite` and stamp `updated_at`
    ///
    /// # Errors
    ///
    /// Returns `RepoError::SnippetNotFound` if no snippet has this id.
    fn toggle_favorite(&mut self, id: i64) -> Result<Snippet, RepoError>;

    /// Add or remove tags by name and stamp `updated_at` in the same write
    ///
    /// # Errors
    ///
    /// Returns `RepoError::SnippetNotFound` if no snippet has this id.
    fn tag(&mut self, id: i64, tags: &[Tag], mode: TagMode) -> Result<Snippet, RepoError>;
}

/// Next id under the "max existing id + 1" rule, 1 for an empty store
pub(crate) fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().map_or(1, |max| max + 1)
}

/// Which storage backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Memory,
    Json,
    #[default]
    Sqlite,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Memory => "memory",
            Self::Json => "json",
            Self::Sqlite => "sqlite",
        })
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "json" => Ok(Self::Json),
            "sqlite" | "db" => Ok(Self::Sqlite),
            other => Err(format!(
                "unknown backend '{other}' (expected memory, json or sqlite)"
            )),
        }
    }
}

/// Everything needed to bind a repository to its storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub backend: Backend,
    pub database: DatabaseLocation,
    pub json_dir: PathBuf,
}

/// Open the backend selected by `config`
///
/// # Errors
///
/// Returns `RepoError` if the selected backend cannot be opened.
pub fn open(config: &StorageConfig) -> Result<Box<dyn SnippetRepository>, RepoError> {
    tracing::debug!(backend = %config.backend, "opening snippet repository");
    Ok(match config.backend {
        Backend::Memory => Box::new(MemoryRepository::new()),
        Backend::Json => Box::new(JsonRepository::open(&config.json_dir)?),
        Backend::Sqlite => Box::new(SqliteRepository::from_location(&config.database)?),
    })
}
