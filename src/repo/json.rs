//! JSON file backend
//!
//! One file, `snippets.json`, inside the configured directory. The file holds
//! a single object keyed by stringified snippet id, each value being the full
//! snippet with its tags embedded.
//!
//! Every operation reads the whole file, modifies the map and writes the whole
//! file back. There is no locking: two processes writing at once can lose
//! updates. That is accepted for a single-user tool.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::reconcile::{TagMode, reconcile};
use super::{RepoError, SnippetRepository, next_id};
use crate::models::{Snippet, Tag};
use crate::search::{SearchQuery, filter_snippets};

/// File name of the store inside the configured directory
pub const STORE_FILE_NAME: &str = "snippets.json";

type Store = BTreeMap<i64, Snippet>;

/// Snippets persisted as one JSON document
#[derive(Debug, Clone)]
pub struct JsonRepository {
    path: PathBuf,
}

impl JsonRepository {
    /// Bind the repository to a directory
    ///
    /// The directory and file are created on the first write; a missing file
    /// reads as an empty store.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::InvalidLocation` if the path is empty or points at
    /// something that is not a directory.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, RepoError> {
        let dir = dir.as_ref();
        if dir.as_os_str().is_empty() {
            return Err(RepoError::InvalidLocation("empty JSON store directory".into()));
        }
        if dir.exists() && !dir.is_dir() {
            return Err(RepoError::InvalidLocation(format!(
                "{} is not a directory",
                dir.display()
            )));
        }

        Ok(Self {
            path: dir.join(STORE_FILE_NAME),
        })
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole store
    ///
    /// # Errors
    ///
    /// Returns `RepoError` if the file exists but cannot be read or parsed.
    pub fn read(&self) -> Result<Store, RepoError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(Store::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Store::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, store: &Store) -> Result<(), RepoError> {
        if !self.path.exists() {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            info!(path = %self.path.display(), "creating JSON snippet store");
        }

        let json = serde_json::to_string_pretty(store)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Read, apply `f` to the snippet with `id`, write back
    fn update<F>(&mut self, id: i64, f: F) -> Result<Snippet, RepoError>
    where
        F: FnOnce(&mut Snippet),
    {
        let mut store = self.read()?;
        let snippet = store.get_mut(&id).ok_or(RepoError::SnippetNotFound(id))?;
        f(snippet);
        let updated = snippet.clone();

        self.write(&store)?;
        Ok(updated)
    }
}

impl SnippetRepository for JsonRepository {
    fn add(&mut self, snippet: &mut Snippet) -> Result<(), RepoError> {
        let mut store = self.read()?;
        let id = *snippet
            .id
            .get_or_insert_with(|| next_id(store.keys().copied()));
        snippet.dedup_tags();

        debug!(id, path = %self.path.display(), "adding snippet to JSON store");
        store.insert(id, snippet.clone());
        self.write(&store)
    }

    fn list(&self) -> Result<Vec<Snippet>, RepoError> {
        Ok(self.read()?.into_values().collect())
    }

    fn get(&self, id: i64) -> Result<Option<Snippet>, RepoError> {
        Ok(self.read()?.remove(&id))
    }

    fn delete(&mut self, id: i64) -> Result<(), RepoError> {
        let mut store = self.read()?;
        if store.remove(&id).is_none() {
            return Err(RepoError::SnippetNotFound(id));
        }

        debug!(id, "deleting snippet from JSON store");
        self.write(&store)
    }

    fn search(&self, query: &SearchQuery) -> Result<Vec<Snippet>, RepoError> {
        Ok(filter_snippets(self.read()?.into_values(), query))
    }

    fn toggle_favorite(&mut self, id: i64) -> Result<Snippet, RepoError> {
        debug!(id, "toggling favorite in JSON store");
        self.update(id, |snippet| {
            snippet.favorite = !snippet.favorite;
            snippet.touch();
        })
    }

    fn tag(&mut self, id: i64, tags: &[Tag], mode: TagMode) -> Result<Snippet, RepoError> {
        debug!(id, ?mode, "reconciling tags in JSON store");
        self.update(id, |snippet| {
            snippet.tags = reconcile(&snippet.tags, tags, mode);
            snippet.touch();
        })
    }
}
