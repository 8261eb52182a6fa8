//! Testing utilities for snipster
//!
//! `TestRepo` opens a repository for any backend over a temporary directory,
//! and the `example_*` functions build the fixture snippets used across
//! unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use std::path::Path;

use tempfile::TempDir;

use crate::models::{Language, Snippet, Tag};
use crate::repo::{Backend, JsonRepository, MemoryRepository, SnippetRepository, SqliteRepository};

/// All backends, for tests that run the same scenario against each
pub const ALL_BACKENDS: [Backend; 3] = [Backend::Memory, Backend::Json, Backend::Sqlite];

/// A repository bound to a temporary directory that is removed on drop
pub struct TestRepo {
    backend: Backend,
    dir: TempDir,
    repo: Box<dyn SnippetRepository>,
}

impl TestRepo {
    /// Open an empty repository of the given backend
    ///
    /// # Panics
    /// Panics if the temporary directory or the repository cannot be created.
    pub fn new(backend: Backend) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let repo = open_in(backend, dir.path());
        Self { backend, dir, repo }
    }

    /// Open a repository of the given backend with the example snippets added
    pub fn seeded(backend: Backend) -> Self {
        let mut test_repo = Self::new(backend);
        for mut snippet in example_snippets() {
            test_repo
                .repo_mut()
                .add(&mut snippet)
                .expect("Failed to add example snippet");
        }
        test_repo
    }

    /// Drop the open handle and open the same storage again
    ///
    /// The memory backend comes back empty.
    pub fn reopen(&mut self) {
        self.repo = open_in(self.backend, self.dir.path());
    }

    #[must_use]
    pub const fn backend(&self) -> Backend {
        self.backend
    }

    #[must_use]
    pub fn repo(&self) -> &dyn SnippetRepository {
        self.repo.as_ref()
    }

    pub fn repo_mut(&mut self) -> &mut dyn SnippetRepository {
        self.repo.as_mut()
    }
}

fn open_in(backend: Backend, dir: &Path) -> Box<dyn SnippetRepository> {
    match backend {
        Backend::Memory => Box::new(MemoryRepository::new()),
        Backend::Json => Box::new(JsonRepository::open(dir.join("json")).expect("Failed to open JSON store")),
        Backend::Sqlite => Box::new(
            SqliteRepository::open(dir.join("snipster.sqlite")).expect("Failed to open SQLite store"),
        ),
    }
}

/// Python snippet with two tags
pub fn example_snippet_1() -> Snippet {
    Snippet::new("First snip", "print('hello world')", Language::Python)
        .unwrap()
        .with_description("Good day, Snipster!")
        .with_tags(vec![Tag::new("beginner").unwrap(), Tag::new("training").unwrap()])
}

/// SQL snippet selecting every row
pub fn example_snippet_2() -> Snippet {
    Snippet::new("Get it all", "SELECT * FROM MY_TABLE;", Language::Sql)
        .unwrap()
        .with_description("Get all records from MY_TABLE")
}

/// SQL snippet with a LIMIT
pub fn example_snippet_3() -> Snippet {
    Snippet::new("Get some of it", "SELECT * FROM MY_TABLE LIMIT 10;", Language::Sql)
        .unwrap()
        .with_description("Get some records from MY_TABLE")
}

pub fn example_snippets() -> Vec<Snippet> {
    vec![example_snippet_1(), example_snippet_2(), example_snippet_3()]
}
