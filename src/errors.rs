//! Unified application error type.
//! All modules (db, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Storage
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid date: '{0}'. Please enter a valid date in MM/DD/YYYY format")]
    InvalidDate(String),

    #[error("Missing value for field '{0}'")]
    MissingField(String),

    #[error("Record #{0} not found")]
    RecordNotFound(i64),

    // ---------------------------
    // Interchange errors
    // ---------------------------
    #[error("Invalid file: {0}")]
    InvalidFile(String),

    #[error("Unsupported file format: {0}. Please use CSV or Excel (.xlsx)")]
    InvalidFormat(String),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
