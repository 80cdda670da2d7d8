use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the records table and the internal log table if absent.
/// Safe to run at every start: existing data is never touched.
pub fn ensure_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS StringingRecords (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            racket      TEXT NOT NULL,
            string      TEXT NOT NULL,
            tension     TEXT NOT NULL,
            date_strung TEXT NOT NULL,
            who_strung  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
