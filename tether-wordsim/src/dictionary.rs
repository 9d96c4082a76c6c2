//! Pre-computed pairwise similarity dictionaries.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};
use rustc_hash::FxHashMap;
use tether_core::WordSimError;

use crate::pragmas::apply_read_pragmas;

/// Source of pre-computed term pair similarities.
pub trait SimilarityDictionary: Send + Sync {
    /// Similarity of the ordered pair, if the dictionary contains it.
    fn lookup(&self, first: &str, second: &str) -> Result<Option<f64>, WordSimError>;

    /// Normalized lookup: lowercases both terms and tries both orientations.
    /// Corpora are symmetric by construction; the double probe makes the
    /// result symmetric regardless.
    fn similarity_of(&self, first: &str, second: &str) -> Result<Option<f64>, WordSimError> {
        let first = first.to_lowercase();
        let second = second.to_lowercase();
        if let Some(similarity) = self.lookup(&first, &second)? {
            return Ok(Some(similarity));
        }
        self.lookup(&second, &first)
    }
}

/// Read-only SQLite dictionary over a
/// `wsim(term_1 TEXT, term_2 TEXT, similarity REAL)` table.
pub struct SqliteDictionary {
    conn: Mutex<Connection>,
}

impl SqliteDictionary {
    /// Open a dictionary database. Fails fast when the file is missing.
    pub fn open(path: &Path) -> Result<Self, WordSimError> {
        if !path.exists() {
            return Err(WordSimError::StoreNotFound {
                path: path.display().to_string(),
            });
        }
        let conn = Connection::open_with_flags(
            path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY
                | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| WordSimError::Sqlite { message: e.to_string() })?;
        apply_read_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<F, T>(&self, f: F) -> Result<T, WordSimError>
    where
        F: FnOnce(&Connection) -> Result<T, WordSimError>,
    {
        let guard = self.conn.lock().map_err(|_| WordSimError::Sqlite {
            message: "dictionary lock poisoned".to_string(),
        })?;
        f(&guard)
    }
}

impl SimilarityDictionary for SqliteDictionary {
    fn lookup(&self, first: &str, second: &str) -> Result<Option<f64>, WordSimError> {
        self.with_conn(|conn| {
            let mut stmt = conn
                .prepare_cached("SELECT similarity FROM wsim WHERE term_1 = ?1 AND term_2 = ?2")
                .map_err(|e| WordSimError::Sqlite { message: e.to_string() })?;
            stmt.query_row(params![first, second], |row| row.get(0))
                .optional()
                .map_err(|e| WordSimError::Sqlite { message: e.to_string() })
        })
    }
}

impl std::fmt::Debug for SqliteDictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteDictionary").finish_non_exhaustive()
    }
}

/// Map-backed dictionary for tests and small curated corpora. Terms are
/// lowercased on insert to match the store convention.
#[derive(Debug, Default)]
pub struct InMemoryDictionary {
    pairs: FxHashMap<(String, String), f64>,
}

impl InMemoryDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, first: &str, second: &str, similarity: f64) {
        self.pairs
            .insert((first.to_lowercase(), second.to_lowercase()), similarity);
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl SimilarityDictionary for InMemoryDictionary {
    fn lookup(&self, first: &str, second: &str) -> Result<Option<f64>, WordSimError> {
        Ok(self
            .pairs
            .get(&(first.to_string(), second.to_string()))
            .copied())
    }
}
