// src/export/mod.rs

mod csv_file;
mod excel_date;
pub(crate) mod fs_utils;
pub mod logic;
mod model;
pub mod snapshot;
mod xlsx;

pub use logic::{ExportLogic, ImportLogic, ImportSummary, RowError};
pub use model::{NO_DATA, REQUIRED_COLUMNS};

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common helper for completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InterchangeFormat {
    Csv,
    Xlsx,
}

impl InterchangeFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterchangeFormat::Csv => "csv",
            InterchangeFormat::Xlsx => "xlsx",
        }
    }

    /// Pick the format from the file extension (`.csv` / `.xlsx`).
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(InterchangeFormat::Csv),
            "xlsx" => Ok(InterchangeFormat::Xlsx),
            _ => Err(AppError::InvalidFormat(path.display().to_string())),
        }
    }

    /// Explicit `--format` wins, otherwise the extension decides.
    pub fn resolve(explicit: Option<Self>, path: &Path) -> AppResult<Self> {
        match explicit {
            Some(f) => Ok(f),
            None => Self::from_path(path),
        }
    }
}
