//! Import of plain-text embedding files into a vector database.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rusqlite::{params, Connection};
use tether_core::WordSimError;
use tracing::info;

const DEFAULT_MAX_WORD_LENGTH: usize = 300;

/// Outcome of one import run.
#[derive(Debug, Clone)]
pub struct ImportReport {
    /// Number of vectors written.
    pub inserted: u64,
    /// Words skipped for exceeding the length bound.
    pub skipped: Vec<String>,
}

/// Reads a text file of `word v1 v2 ... vd` lines and writes the vectors
/// into a `words(word TEXT PRIMARY KEY, vec BLOB)` table, each payload a
/// big-endian f32 sequence.
///
/// Embedding dumps often start with a header line; `with_skip_lines(1)`
/// steps over it. Overlong words are dataset noise and are skipped, not
/// errors; a wrong component count is an error, since it means the
/// configured dimension does not match the file.
#[derive(Debug, Clone)]
pub struct VectorImporter {
    dimension: usize,
    max_word_length: usize,
    skip_lines: u64,
}

impl VectorImporter {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            skip_lines: 0,
        }
    }

    pub fn with_max_word_length(mut self, max_word_length: usize) -> Self {
        self.max_word_length = max_word_length;
        self
    }

    pub fn with_skip_lines(mut self, skip_lines: u64) -> Self {
        self.skip_lines = skip_lines;
        self
    }

    /// Run the import. Creates the database file and table when missing;
    /// existing words are replaced. All inserts run in one transaction.
    pub fn import(&self, vector_file: &Path, db_file: &Path) -> Result<ImportReport, WordSimError> {
        let file = File::open(vector_file)?;
        let mut conn = Connection::open(db_file)
            .map_err(|e| WordSimError::Sqlite { message: e.to_string() })?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS words (word TEXT PRIMARY KEY, vec BLOB NOT NULL)",
            [],
        )
        .map_err(|e| WordSimError::Sqlite { message: e.to_string() })?;

        let mut inserted = 0u64;
        let mut skipped = Vec::new();

        let tx = conn
            .transaction()
            .map_err(|e| WordSimError::Sqlite { message: e.to_string() })?;
        {
            let mut stmt = tx
                .prepare("INSERT OR REPLACE INTO words (word, vec) VALUES (?1, ?2)")
                .map_err(|e| WordSimError::Sqlite { message: e.to_string() })?;

            let mut payload = Vec::with_capacity(self.dimension * 4);
            for (index, line) in BufReader::new(file).lines().enumerate() {
                let line_no = index as u64 + 1;
                let line = line?;
                if line_no <= self.skip_lines || line.trim().is_empty() {
                    continue;
                }

                let mut parts = line.split_whitespace();
                let word = parts.next().unwrap_or_default();
                let values: Vec<&str> = parts.collect();
                if values.len() != self.dimension {
                    return Err(WordSimError::MalformedImport {
                        line: line_no,
                        detail: format!(
                            "expected {} vector components, found {}",
                            self.dimension,
                            values.len()
                        ),
                    });
                }
                if word.chars().count() > self.max_word_length {
                    skipped.push(word.to_string());
                    continue;
                }

                payload.clear();
                for value in &values {
                    let component: f32 =
                        value.parse().map_err(|_| WordSimError::MalformedImport {
                            line: line_no,
                            detail: format!("invalid vector component '{value}'"),
                        })?;
                    payload.extend_from_slice(&component.to_be_bytes());
                }

                stmt.execute(params![word, &payload])
                    .map_err(|e| WordSimError::Sqlite { message: e.to_string() })?;
                inserted += 1;
            }
        }
        tx.commit()
            .map_err(|e| WordSimError::Sqlite { message: e.to_string() })?;

        info!(
            inserted,
            skipped = skipped.len(),
            dimension = self.dimension,
            "vector import finished"
        );
        Ok(ImportReport { inserted, skipped })
    }
}
