//! Connection pragmas for the read-only similarity stores.

use rusqlite::Connection;
use tether_core::WordSimError;

/// Tune a read-only connection for single-reader lookup workloads.
///
/// `locking_mode` and `journal_mode` return a result row and must go
/// through `query_row`; `pragma_update` would misread them.
pub(crate) fn apply_read_pragmas(conn: &Connection) -> Result<(), WordSimError> {
    let _: String = conn
        .query_row("PRAGMA locking_mode = EXCLUSIVE", [], |row| row.get(0))
        .map_err(|e| WordSimError::Sqlite { message: e.to_string() })?;
    let _: String = conn
        .query_row("PRAGMA journal_mode = OFF", [], |row| row.get(0))
        .map_err(|e| WordSimError::Sqlite { message: e.to_string() })?;
    conn.pragma_update(None, "synchronous", "OFF")
        .map_err(|e| WordSimError::Sqlite { message: e.to_string() })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pragmas_apply_to_in_memory_connection() {
        let conn = Connection::open_in_memory().unwrap();
        apply_read_pragmas(&conn).unwrap();
    }
}
