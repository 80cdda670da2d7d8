// src/export/logic.rs

use crate::db::DbPool;
use crate::db::log::ttlog_quiet;
use crate::db::queries::{all_records, create};
use crate::errors::{AppError, AppResult};
use crate::export::InterchangeFormat;
use crate::export::csv_file::{export_csv, read_csv};
use crate::export::model::{REQUIRED_COLUMNS, RawTable, row_to_fields};
use crate::export::xlsx::{export_xlsx, read_xlsx};
use crate::ui::messages::warning;
use serde::Serialize;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write every record (six business fields, storage dates) to `path`.
    /// Returns the number of records written.
    pub fn export_all(pool: &DbPool, path: &Path, format: InterchangeFormat) -> AppResult<usize> {
        let records = all_records(pool)?;

        if records.is_empty() {
            warning("No records in the database: only the header row will be written.");
        }

        match format {
            InterchangeFormat::Csv => export_csv(&records, path)?,
            InterchangeFormat::Xlsx => export_xlsx(&records, path)?,
        }

        ttlog_quiet(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} records as {}", records.len(), format.as_str()),
        );

        Ok(records.len())
    }
}

/// One import row that could not be inserted.
#[derive(Debug, Clone, Serialize)]
pub struct RowError {
    /// 1-based position among the data rows (header excluded).
    pub row: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportSummary {
    pub imported: usize,
    pub failed: Vec<RowError>,
}

impl ImportSummary {
    pub fn total(&self) -> usize {
        self.imported + self.failed.len()
    }
}

/// High-level import logic.
pub struct ImportLogic;

impl ImportLogic {
    /// Insert one record per data row of `path`.
    ///
    /// The header is validated before anything is written. Rows are then
    /// inserted one by one in file order: a failing row is reported in the
    /// summary and the next row is still attempted, so rows inserted before
    /// a failure stay committed.
    pub fn import_all(pool: &DbPool, path: &Path, format: InterchangeFormat) -> AppResult<ImportSummary> {
        let table = match format {
            InterchangeFormat::Csv => read_csv(path)?,
            InterchangeFormat::Xlsx => read_xlsx(path)?,
        };

        let summary = Self::import_table(pool, &table)?;

        ttlog_quiet(
            &pool.conn,
            "import",
            &path.to_string_lossy(),
            &format!(
                "Imported {} of {} rows ({} failed)",
                summary.imported,
                summary.total(),
                summary.failed.len()
            ),
        );

        Ok(summary)
    }

    pub(crate) fn import_table(pool: &DbPool, table: &RawTable) -> AppResult<ImportSummary> {
        let idx = table.column_indexes().ok_or_else(|| {
            AppError::InvalidFile(format!(
                "missing column(s) {}. The file must contain the following columns: {}",
                table.missing_columns().join(", "),
                REQUIRED_COLUMNS.join(", ")
            ))
        })?;

        let mut summary = ImportSummary::default();

        for (i, row) in table.rows.iter().enumerate() {
            let fields = row_to_fields(row, &idx);

            match create(pool, &fields) {
                Ok(_) => summary.imported += 1,
                Err(e) => summary.failed.push(RowError {
                    row: i + 1,
                    reason: e.to_string(),
                }),
            }
        }

        Ok(summary)
    }
}
