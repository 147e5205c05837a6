//! Database schema for the key-value store.

use crate::error::Result;
use rusqlite::Connection;

/// Schema for the single key-value table.
///
/// Values are JSON documents or plain strings; the adapter decides.
const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS kv (
    key   TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
";

/// Apply pragmas and the schema to a connection.
///
/// Idempotent: safe to call on every open.
///
/// # Errors
///
/// Returns an error if the SQL execution fails or pragmas cannot be set.
pub fn apply_schema(conn: &Connection) -> Result<()> {
    // Set pragmas before schema creation
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;

    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        apply_schema(&conn).unwrap();
        apply_schema(&conn).unwrap();

        conn.execute("INSERT INTO kv (key, value) VALUES ('a', 'b')", [])
            .unwrap();
        let value: String = conn
            .query_row("SELECT value FROM kv WHERE key = 'a'", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(value, "b");
    }
}
