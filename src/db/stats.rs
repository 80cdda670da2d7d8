use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::to_display;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let db_path = pool.path().display().to_string();
    let file_size = fs::metadata(pool.path()).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL RECORDS
    //
    let count = queries::count(pool)?;
    println!(
        "{}• Total records:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) DATE RANGE (valid dates only)
    //
    let (first, last): (Option<String>, Option<String>) = pool
        .conn
        .query_row(
            "SELECT MIN(date(date_strung)), MAX(date(date_strung)) FROM StringingRecords",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?
        .unwrap_or((None, None));

    let fmt = |d: Option<String>| {
        d.map(|s| to_display(&s))
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt(first));
    println!("    to:   {}", fmt(last));

    //
    // 4) STRINGERS
    //
    let stringers: i64 = pool.conn.query_row(
        "SELECT COUNT(DISTINCT who_strung) FROM StringingRecords",
        [],
        |row| row.get(0),
    )?;
    println!("{}• Stringers:{} {}", CYAN, RESET, stringers);

    println!();
    Ok(())
}

/// Rows reported by `PRAGMA integrity_check`, empty when the file is sound.
pub fn integrity_problems(pool: &DbPool) -> AppResult<Vec<String>> {
    let mut stmt = pool.conn.prepare("PRAGMA integrity_check")?;
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows.into_iter().filter(|r| r != "ok").collect())
}

pub fn vacuum(pool: &DbPool) -> AppResult<()> {
    pool.conn.execute_batch("VACUUM;")?;
    ttlog_quiet(&pool.conn, "db", "vacuum", "Database compacted");
    Ok(())
}
