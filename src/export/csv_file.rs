// src/export/csv_file.rs

use crate::db::StringingRecord;
use crate::errors::{AppError, AppResult};
use crate::export::model::{REQUIRED_COLUMNS, RawTable, record_to_row};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::path::Path;

/// Export CSV: header row plus one line per record.
pub(crate) fn export_csv(records: &[StringingRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(REQUIRED_COLUMNS)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for r in records {
        wtr.write_record(record_to_row(r))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Read a CSV file. Rows may be shorter than the header; empty fields
/// count as missing.
pub(crate) fn read_csv(path: &Path) -> AppResult<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::Import(format!("cannot open {}: {e}", path.display())))?;

    let headers = rdr
        .headers()
        .map_err(|e| AppError::Import(format!("cannot read CSV header: {e}")))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec.map_err(|e| AppError::Import(format!("CSV row {}: {e}", i + 1)))?;

        let row: Vec<Option<String>> = rec
            .iter()
            .map(|v| (!v.is_empty()).then(|| v.to_string()))
            .collect();

        if row.iter().any(Option::is_some) {
            rows.push(row);
        }
    }

    Ok(RawTable { headers, rows })
}
