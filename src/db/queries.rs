use crate::db::models::{RecordFields, StringerCount, StringingRecord};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::{OptionalExtension, Row, params};

const SELECT_RECORDS: &str = "SELECT id, name, racket, string, tension, date_strung, who_strung
     FROM StringingRecords";

pub fn map_row(row: &Row) -> rusqlite::Result<StringingRecord> {
    Ok(StringingRecord {
        id: row.get("id")?,
        name: row.get("name")?,
        racket: row.get("racket")?,
        string: row.get("string")?,
        tension: row.get("tension")?,
        date_strung: row.get("date_strung")?,
        who_strung: row.get("who_strung")?,
    })
}

/// Insert a new record and return the id assigned by SQLite.
pub fn create(pool: &DbPool, fields: &RecordFields) -> AppResult<i64> {
    let mut stmt = pool.conn.prepare_cached(
        "INSERT INTO StringingRecords (name, racket, string, tension, date_strung, who_strung)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;

    stmt.execute(params![
        fields.name,
        fields.racket,
        fields.string,
        fields.tension,
        fields.date_strung,
        fields.who_strung,
    ])?;

    Ok(pool.conn.last_insert_rowid())
}

/// Replace all business fields of record `id`.
/// An unknown id is not an error: the statement simply matches no row.
pub fn update(pool: &DbPool, id: i64, fields: &RecordFields) -> AppResult<()> {
    pool.conn.execute(
        "UPDATE StringingRecords
         SET name = ?1, racket = ?2, string = ?3,
             tension = ?4, date_strung = ?5, who_strung = ?6
         WHERE id = ?7",
        params![
            fields.name,
            fields.racket,
            fields.string,
            fields.tension,
            fields.date_strung,
            fields.who_strung,
            id,
        ],
    )?;
    Ok(())
}

pub fn delete(pool: &DbPool, id: i64) -> AppResult<()> {
    pool.conn
        .execute("DELETE FROM StringingRecords WHERE id = ?1", [id])?;
    Ok(())
}

pub fn get(pool: &DbPool, id: i64) -> AppResult<Option<StringingRecord>> {
    let sql = format!("{SELECT_RECORDS} WHERE id = ?1");
    let record = pool.conn.query_row(&sql, [id], map_row).optional()?;
    Ok(record)
}

/// All records, newest first, optionally restricted to names containing
/// `filter` (SQLite `LIKE` semantics: ASCII case-insensitive).
pub fn list(pool: &DbPool, filter: Option<&str>) -> AppResult<Vec<StringingRecord>> {
    // date() is NULL for malformed values, which sort after every real date
    let order = "ORDER BY date(date_strung) DESC, date_strung DESC, id DESC";

    let mut out = Vec::new();

    match filter.filter(|f| !f.is_empty()) {
        None => {
            let sql = format!("{SELECT_RECORDS} {order}");
            let mut stmt = pool.conn.prepare(&sql)?;
            let rows = stmt.query_map([], map_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        Some(f) => {
            let sql = format!("{SELECT_RECORDS} WHERE name LIKE ?1 ESCAPE '\\' {order}");
            let pattern = format!("%{}%", escape_like(f));
            let mut stmt = pool.conn.prepare(&sql)?;
            let rows = stmt.query_map([pattern], map_row)?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

/// Jobs per stringer with `date_strung` in `[start, end]` (storage dates,
/// both inclusive), busiest stringer first.
pub fn aggregate_by_stringer(pool: &DbPool, start: &str, end: &str) -> AppResult<Vec<StringerCount>> {
    let mut stmt = pool.conn.prepare(
        "SELECT who_strung, COUNT(*) AS rackets_count
         FROM StringingRecords
         WHERE date(date_strung) BETWEEN ?1 AND ?2
         GROUP BY who_strung
         ORDER BY rackets_count DESC, who_strung ASC",
    )?;

    let rows = stmt.query_map(params![start, end], |row| {
        Ok(StringerCount {
            who_strung: row.get(0)?,
            count: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Every record in insertion order, used by the exporters.
pub fn all_records(pool: &DbPool) -> AppResult<Vec<StringingRecord>> {
    let sql = format!("{SELECT_RECORDS} ORDER BY id ASC");
    let mut stmt = pool.conn.prepare(&sql)?;
    let records = stmt
        .query_map([], map_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(records)
}

pub fn count(pool: &DbPool) -> AppResult<i64> {
    let n = pool
        .conn
        .query_row("SELECT COUNT(*) FROM StringingRecords", [], |row| row.get(0))?;
    Ok(n)
}

/// Every user table of the database, in creation order.
pub fn table_names(pool: &DbPool) -> AppResult<Vec<String>> {
    let mut stmt = pool.conn.prepare(
        "SELECT name FROM sqlite_master
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
         ORDER BY rowid",
    )?;

    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(names)
}

fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
