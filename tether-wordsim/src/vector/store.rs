//! Word vector stores.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};
use rustc_hash::FxHashMap;
use tether_core::WordSimError;

use crate::pragmas::apply_read_pragmas;

/// Backing store for word embeddings.
///
/// A miss is `Ok(None)`, never an error; errors mean the store itself
/// failed.
pub trait VectorStore: Send + Sync {
    /// The embedding for `word`, or `None` when the store has no entry.
    fn vector_of(&self, word: &str) -> Result<Option<Vec<f32>>, WordSimError>;

    /// Number of components per vector. 0 for an empty store.
    fn dimension(&self) -> usize;
}

/// Read-only SQLite store over a `words(word TEXT PRIMARY KEY, vec BLOB)`
/// table. Vector payloads are big-endian f32 components.
pub struct SqliteVectorStore {
    conn: Mutex<Connection>,
    dimension: usize,
}

impl SqliteVectorStore {
    /// Open a vector database. Fails fast when the file is missing or the
    /// schema cannot be probed, so a misconfigured path surfaces at
    /// construction instead of degrading every lookup.
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
        let dimension = probe_dimension(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            dimension,
        })
    }

    /// Execute a closure with the store connection.
    fn with_conn<F, T>(&self, f: F) -> Result<T, WordSimError>
    where
        F: FnOnce(&Connection) -> Result<T, WordSimError>,
    {
        let guard = self.conn.lock().map_err(|_| WordSimError::Sqlite {
            message: "vector store lock poisoned".to_string(),
        })?;
        f(&guard)
    }
}

impl VectorStore for SqliteVectorStore {
    fn vector_of(&self, word: &str) -> Result<Option<Vec<f32>>, WordSimError> {
        let blob: Option<Vec<u8>> = self.with_conn(|conn| {
            let mut stmt = conn
                .prepare_cached("SELECT vec FROM words WHERE word = ?1")
                .map_err(|e| WordSimError::Sqlite { message: e.to_string() })?;
            stmt.query_row(params![word], |row| row.get(0))
                .optional()
                .map_err(|e| WordSimError::Sqlite { message: e.to_string() })
        })?;
        match blob {
            None => Ok(None),
            Some(bytes) => decode_vector(word, &bytes, self.dimension).map(Some),
        }
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

impl std::fmt::Debug for SqliteVectorStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteVectorStore")
            .field("dimension", &self.dimension)
            .finish_non_exhaustive()
    }
}

/// Byte length of the first stored vector, divided down to components.
fn probe_dimension(conn: &Connection) -> Result<usize, WordSimError> {
    let length: Option<i64> = conn
        .query_row("SELECT length(vec) FROM words LIMIT 1", [], |row| row.get(0))
        .optional()
        .map_err(|e| WordSimError::Sqlite { message: e.to_string() })?;
    Ok(length.map_or(0, |len| len as usize / 4))
}

fn decode_vector(word: &str, bytes: &[u8], dimension: usize) -> Result<Vec<f32>, WordSimError> {
    if bytes.len() % 4 != 0 {
        return Err(WordSimError::MalformedVector {
            word: word.to_string(),
            detail: format!("blob length {} is not a multiple of 4", bytes.len()),
        });
    }
    let components = bytes.len() / 4;
    if dimension > 0 && components != dimension {
        return Err(WordSimError::MalformedVector {
            word: word.to_string(),
            detail: format!("expected {dimension} components, found {components}"),
        });
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

/// Map-backed store for tests and small fixed vocabularies.
#[derive(Debug, Default)]
pub struct InMemoryVectorStore {
    vectors: FxHashMap<String, Vec<f32>>,
    dimension: usize,
}

impl InMemoryVectorStore {
    pub fn new(dimension: usize) -> Self {
        Self {
            vectors: FxHashMap::default(),
            dimension,
        }
    }

    /// # Panics
    ///
    /// Panics when the vector does not match the store dimension.
    pub fn insert(&mut self, word: impl Into<String>, vector: Vec<f32>) {
        assert_eq!(
            vector.len(),
            self.dimension,
            "vector dimension mismatch on insert"
        );
        self.vectors.insert(word.into(), vector);
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

impl VectorStore for InMemoryVectorStore {
    fn vector_of(&self, word: &str) -> Result<Option<Vec<f32>>, WordSimError> {
        Ok(self.vectors.get(word).cloned())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
