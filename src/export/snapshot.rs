// src/export/snapshot.rs

use crate::db::DbPool;
use crate::db::queries::table_names;
use crate::errors::AppResult;
use crate::export::xlsx::{band, set_widths, to_export_error, write_cell, write_header};
use rusqlite::types::ValueRef;
use rust_xlsxwriter::Workbook;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Excel refuses sheet names longer than this.
const MAX_SHEET_NAME: usize = 31;

/// Characters Excel does not allow in a sheet name.
const FORBIDDEN: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Write every table of the database as its own worksheet.
/// Returns the number of sheets written.
pub fn write_snapshot(pool: &DbPool, path: &Path) -> AppResult<usize> {
    let tables = table_names(pool)?;
    let sheet_names = unique_sheet_names(&tables);
    let mut workbook = Workbook::new();

    for (table, sheet_name) in tables.iter().zip(&sheet_names) {
        let sql = format!("SELECT * FROM \"{}\"", table.replace('"', "\"\""));
        let mut stmt = pool.conn.prepare(&sql)?;

        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
        let headers: Vec<&str> = columns.iter().map(String::as_str).collect();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet_name).map_err(to_export_error)?;
        write_header(worksheet, &headers)?;

        let mut widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

        let mut rows = stmt.query([])?;
        let mut row_index = 0usize;

        while let Some(row) = rows.next()? {
            for col in 0..columns.len() {
                let text = value_to_text(row.get_ref(col)?);
                write_cell(worksheet, (row_index + 1) as u32, col as u16, &text, band(row_index))?;
                widths[col] = widths[col].max(UnicodeWidthStr::width(text.as_str()));
            }
            row_index += 1;
        }

        set_widths(worksheet, &widths)?;
    }

    // an empty workbook is not a valid file
    if tables.is_empty() {
        workbook.add_worksheet();
    }

    workbook.save(path).map_err(to_export_error)?;
    Ok(tables.len())
}

/// Table names made valid as sheet names: forbidden characters replaced,
/// truncated to 31 characters, and suffixed `~N` when two tables collide
/// (Excel compares sheet names case-insensitively).
fn unique_sheet_names(tables: &[String]) -> Vec<String> {
    let mut taken: Vec<String> = Vec::with_capacity(tables.len());
    let mut out = Vec::with_capacity(tables.len());

    for table in tables {
        let cleaned: String = table
            .chars()
            .map(|c| if FORBIDDEN.contains(&c) { '_' } else { c })
            .collect();
        let cleaned = cleaned.trim_matches('\'');
        let base = if cleaned.is_empty() { "Sheet" } else { cleaned };

        let mut name: String = base.chars().take(MAX_SHEET_NAME).collect();
        let mut n = 1;
        while taken.contains(&name.to_lowercase()) {
            n += 1;
            let suffix = format!("~{n}");
            let keep = MAX_SHEET_NAME - suffix.chars().count();
            name = base.chars().take(keep).collect::<String>() + &suffix;
        }

        taken.push(name.to_lowercase());
        out.push(name);
    }

    out
}

fn value_to_text(v: ValueRef<'_>) -> String {
    match v {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).to_string(),
        ValueRef::Blob(b) => format!("<blob {} bytes>", b.len()),
    }
}
