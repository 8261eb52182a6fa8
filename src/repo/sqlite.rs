//! SQLite backend
//!
//! Three tables: `snippet`, `tag` and the `snippettaglink` join table. Every
//! repository call runs inside its own transaction (begin, read/write,
//! commit); nothing is held open between calls.
//!
//! Tags are stored once per name. Tagging a snippet with a name that already
//! has a row links the existing row instead of inserting a duplicate.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::{debug, info};

use super::reconcile::{TagMode, reconcile};
use super::{RepoError, SnippetRepository};
use crate::models::{Language, Snippet, Tag};
use crate::search::{SearchQuery, filter_snippets};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS snippet (
        id INTEGER PRIMARY KEY,
        title TEXT NOT NULL,
        code TEXT NOT NULL,
        description TEXT,
        language TEXT NOT NULL CHECK (language IN ('py', 'sql', 'rs')),
        created_at TEXT NOT NULL,
        updated_at TEXT,
        favorite INTEGER NOT NULL DEFAULT 0
    );

    CREATE TABLE IF NOT EXISTS tag (
        id INTEGER PRIMARY KEY,
        name VARCHAR(20) NOT NULL UNIQUE,
        active INTEGER NOT NULL DEFAULT 1
    );

    CREATE TABLE IF NOT EXISTS snippettaglink (
        snippet_id INTEGER NOT NULL REFERENCES snippet(id),
        tag_id INTEGER NOT NULL REFERENCES tag(id),
        PRIMARY KEY (snippet_id, tag_id)
    );
";

const SNIPPET_COLUMNS: &str =
    "id, title, code, description, language, favorite, created_at, updated_at";

/// Where the SQLite database lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    /// Private in-memory database, gone when the repository is dropped
    Memory,
    /// Database file on disk
    File(PathBuf),
}

impl DatabaseLocation {
    /// Parse a database URL
    ///
    /// Accepts `sqlite:///relative/path`, `sqlite:////absolute/path`,
    /// `sqlite:///:memory:`, `:memory:` or a plain filesystem path.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::InvalidLocation` for an empty string or a URL with
    /// a scheme other than `sqlite`.
    pub fn parse(url: &str) -> Result<Self, RepoError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(RepoError::InvalidLocation("empty database URL".into()));
        }

        let path = if let Some(rest) = url.strip_prefix("sqlite://") {
            // "sqlite:///x" leaves "/x": the third slash separates the empty host
            rest.strip_prefix('/').unwrap_or(rest)
        } else if url.contains("://") {
            return Err(RepoError::InvalidLocation(format!(
                "unsupported database URL '{url}' (only sqlite is supported)"
            )));
        } else {
            url
        };

        match path {
            "" => Err(RepoError::InvalidLocation(format!("no path in database URL '{url}'"))),
            ":memory:" => Ok(Self::Memory),
            p => Ok(Self::File(PathBuf::from(p))),
        }
    }
}

/// Snippets stored in SQLite
#[derive(Debug)]
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open (or create) a database file and make sure the schema exists
    ///
    /// # Errors
    ///
    /// Returns `RepoError` if the parent directory cannot be created, the
    /// database cannot be opened, or the schema cannot be applied.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RepoError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        debug!(path = %path.display(), "opening SQLite snippet store");
        Self::with_connection(Connection::open(path)?)
    }

    /// Open a private in-memory database
    ///
    /// # Errors
    ///
    /// Returns `RepoError` if the schema cannot be applied.
    pub fn in_memory() -> Result<Self, RepoError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    /// Open whatever `location` points at
    ///
    /// # Errors
    ///
    /// See [`SqliteRepository::open`] and [`SqliteRepository::in_memory`].
    pub fn from_location(location: &DatabaseLocation) -> Result<Self, RepoError> {
        match location {
            DatabaseLocation::Memory => Self::in_memory(),
            DatabaseLocation::File(path) => Self::open(path),
        }
    }

    fn with_connection(conn: Connection) -> Result<Self, RepoError> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.execute_batch(SCHEMA)?;
        info!("SQLite snippet schema ready");
        Ok(Self { conn })
    }
}

impl SnippetRepository for SqliteRepository {
    fn add(&mut self, snippet: &mut Snippet) -> Result<(), RepoError> {
        snippet.dedup_tags();

        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO snippet (id, title, code, description, language, favorite, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                code = excluded.code,
                description = excluded.description,
                language = excluded.language,
                favorite = excluded.favorite,
                created_at = excluded.created_at,
                updated_at = excluded.updated_at",
            params![
                snippet.id,
                snippet.title,
                snippet.code,
                snippet.description,
                snippet.language,
                snippet.favorite,
                snippet.created_at,
                snippet.updated_at,
            ],
        )?;
        let id = snippet.id.unwrap_or_else(|| tx.last_insert_rowid());
        let tags = link_tags(&tx, id, &snippet.tags)?;
        tx.commit()?;

        debug!(id, tags = tags.len(), "added snippet to SQLite store");
        snippet.id = Some(id);
        snippet.tags = tags;
        Ok(())
    }

    fn list(&self) -> Result<Vec<Snippet>, RepoError> {
        let tx = self.conn.unchecked_transaction()?;
        let mut snippets = {
            let mut stmt =
                tx.prepare(&format!("SELECT {SNIPPET_COLUMNS} FROM snippet ORDER BY id"))?;
            stmt.query_map([], snippet_from_row)?
                .collect::<Result<Vec<_>, _>>()?
        };
        let mut tags = all_tags_by_snippet(&tx)?;
        tx.commit()?;

        for snippet in &mut snippets {
            if let Some(id) = snippet.id {
                snippet.tags = tags.remove(&id).unwrap_or_default();
            }
        }
        Ok(snippets)
    }

    fn get(&self, id: i64) -> Result<Option<Snippet>, RepoError> {
        let tx = self.conn.unchecked_transaction()?;
        let snippet = fetch(&tx, id)?;
        tx.commit()?;
        Ok(snippet)
    }

    fn delete(&mut self, id: i64) -> Result<(), RepoError> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM snippettaglink WHERE snippet_id = ?1", [id])?;
        if tx.execute("DELETE FROM snippet WHERE id = ?1", [id])? == 0 {
            return Err(RepoError::SnippetNotFound(id));
        }
        tx.commit()?;

        debug!(id, "deleted snippet from SQLite store");
        Ok(())
    }

    fn search(&self, query: &SearchQuery) -> Result<Vec<Snippet>, RepoError> {
        Ok(filter_snippets(self.list()?, query))
    }

    fn toggle_favorite(&mut self, id: i64) -> Result<Snippet, RepoError> {
        let tx = self.conn.transaction()?;
        let mut snippet = fetch(&tx, id)?.ok_or(RepoError::SnippetNotFound(id))?;
        snippet.favorite = !snippet.favorite;
        snippet.touch();

        tx.execute(
            "UPDATE snippet SET favorite = ?1, updated_at = ?2 WHERE id = ?3",
            params![snippet.favorite, snippet.updated_at, id],
        )?;
        tx.commit()?;

        debug!(id, favorite = snippet.favorite, "toggled favorite");
        Ok(snippet)
    }

    fn tag(&mut self, id: i64, tags: &[Tag], mode: TagMode) -> Result<Snippet, RepoError> {
        let tx = self.conn.transaction()?;
        let mut snippet = fetch(&tx, id)?.ok_or(RepoError::SnippetNotFound(id))?;

        let wanted = reconcile(&snippet.tags, tags, mode);
        snippet.tags = link_tags(&tx, id, &wanted)?;
        snippet.touch();

        tx.execute(
            "UPDATE snippet SET updated_at = ?1 WHERE id = ?2",
            params![snippet.updated_at, id],
        )?;
        tx.commit()?;

        debug!(id, ?mode, tags = snippet.tags.len(), "reconciled tags");
        Ok(snippet)
    }
}

/// Load one snippet with its tags
fn fetch(conn: &Connection, id: i64) -> rusqlite::Result<Option<Snippet>> {
    let snippet = conn
        .query_row(
            &format!("SELECT {SNIPPET_COLUMNS} FROM snippet WHERE id = ?1"),
            [id],
            snippet_from_row,
        )
        .optional()?;

    let Some(mut snippet) = snippet else {
        return Ok(None);
    };

    let mut stmt = conn.prepare_cached(
        "SELECT t.id, t.name, t.active
         FROM snippettaglink l JOIN tag t ON t.id = l.tag_id
         WHERE l.snippet_id = ?1
         ORDER BY l.rowid",
    )?;
    snippet.tags = stmt
        .query_map([id], |row| tag_from_row(row, 0))?
        .collect::<Result<_, _>>()?;

    Ok(Some(snippet))
}

/// Tags of every snippet, keyed by snippet id, in link order
fn all_tags_by_snippet(conn: &Connection) -> rusqlite::Result<HashMap<i64, Vec<Tag>>> {
    let mut stmt = conn.prepare(
        "SELECT l.snippet_id, t.id, t.name, t.active
         FROM snippettaglink l JOIN tag t ON t.id = l.tag_id
         ORDER BY l.rowid",
    )?;

    let mut by_snippet: HashMap<i64, Vec<Tag>> = HashMap::new();
    let rows = stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, tag_from_row(row, 1)?)))?;
    for row in rows {
        let (snippet_id, tag) = row?;
        by_snippet.entry(snippet_id).or_default().push(tag);
    }
    Ok(by_snippet)
}

/// Replace the links of `snippet_id` with `tags`, reusing tag rows by name
///
/// Returns the tags as stored, with their row ids.
fn link_tags(conn: &Connection, snippet_id: i64, tags: &[Tag]) -> rusqlite::Result<Vec<Tag>> {
    conn.execute("DELETE FROM snippettaglink WHERE snippet_id = ?1", [snippet_id])?;

    let mut link = conn.prepare_cached(
        "INSERT OR IGNORE INTO snippettaglink (snippet_id, tag_id) VALUES (?1, ?2)",
    )?;

    let mut stored = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = resolve_tag(conn, tag)?;
        if let Some(tag_id) = tag.id {
            link.execute(params![snippet_id, tag_id])?;
        }
        stored.push(tag);
    }
    Ok(stored)
}

/// Existing row for this tag name, or a freshly inserted one
fn resolve_tag(conn: &Connection, tag: &Tag) -> rusqlite::Result<Tag> {
    let existing = conn
        .prepare_cached("SELECT id, name, active FROM tag WHERE name = ?1")?
        .query_row([tag.name()], |row| tag_from_row(row, 0))
        .optional()?;

    if let Some(existing) = existing {
        return Ok(existing);
    }

    conn.prepare_cached("INSERT INTO tag (name, active) VALUES (?1, ?2)")?
        .execute(params![tag.name(), tag.active])?;
    debug!(name = tag.name(), "inserted new tag row");
    Ok(Tag::from_stored(
        conn.last_insert_rowid(),
        tag.name().to_string(),
        tag.active,
    ))
}

fn snippet_from_row(row: &Row<'_>) -> rusqlite::Result<Snippet> {
    Ok(Snippet {
        id: Some(row.get(0)?),
        title: row.get(1)?,
        code: row.get(2)?,
        description: row.get(3)?,
        language: row.get(4)?,
        favorite: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
        tags: Vec::new(),
    })
}

/// Read `(id, name, active)` starting at column `offset`
fn tag_from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<Tag> {
    Ok(Tag::from_stored(
        row.get(offset)?,
        row.get(offset + 1)?,
        row.get(offset + 2)?,
    ))
}

impl ToSql for Language {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.code()))
    }
}

impl FromSql for Language {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}
