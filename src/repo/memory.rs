//! In-memory backend
//!
//! Holds snippets in an ordered map for the life of the process. No
//! durability; this is the reference implementation of the contract.

use std::collections::BTreeMap;

use tracing::debug;

use super::reconcile::{TagMode, reconcile};
use super::{RepoError, SnippetRepository, next_id};
use crate::models::{Snippet, Tag};
use crate::search::{SearchQuery, filter_snippets};

/// Snippets kept in process memory, ordered by id
#[derive(Debug, Default)]
pub struct MemoryRepository {
    snippets: BTreeMap<i64, Snippet>,
}

impl MemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn get_mut(&mut self, id: i64) -> Result<&mut Snippet, RepoError> {
        self.snippets
            .get_mut(&id)
            .ok_or(RepoError::SnippetNotFound(id))
    }
}

impl SnippetRepository for MemoryRepository {
    fn add(&mut self, snippet: &mut Snippet) -> Result<(), RepoError> {
        let id = *snippet
            .id
            .get_or_insert_with(|| next_id(self.snippets.keys().copied()));
        snippet.dedup_tags();

        debug!(id, "adding snippet to memory store");
        self.snippets.insert(id, snippet.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<Snippet>, RepoError> {
        Ok(self.snippets.values().cloned().collect())
    }

    fn get(&self, id: i64) -> Result<Option<Snippet>, RepoError> {
        Ok(self.snippets.get(&id).cloned())
    }

    fn delete(&mut self, id: i64) -> Result<(), RepoError> {
        debug!(id, "deleting snippet from memory store");
        self.snippets
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::SnippetNotFound(id))
    }

    fn search(&self, query: &SearchQuery) -> Result<Vec<Snippet>, RepoError> {
        Ok(filter_snippets(self.snippets.values().cloned(), query))
    }

    fn toggle_favorite(&mut self, id: i64) -> Result<Snippet, RepoError> {
        let snippet = self.get_mut(id)?;
        snippet.favorite = !snippet.favorite;
        snippet.touch();

        debug!(id, favorite = snippet.favorite, "toggled favorite");
        Ok(snippet.clone())
    }

    fn tag(&mut self, id: i64, tags: &[Tag], mode: TagMode) -> Result<Snippet, RepoError> {
        let snippet = self.get_mut(id)?;
        snippet.tags = reconcile(&snippet.tags, tags, mode);
        snippet.touch();

        debug!(id, ?mode, tags = snippet.tags.len(), "reconciled tags");
        Ok(snippet.clone())
    }
}
