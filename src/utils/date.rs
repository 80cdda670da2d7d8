//! Conversions between the display date (`MM/DD/YYYY`) and the
//! canonical storage date (`YYYY-MM-DD`).
//!
//! chrono's `%Y` takes any number of digits and a sign, so every parse is
//! preceded by a shape check that pins the year to four ASCII digits.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::OnceLock;

pub const DISPLAY_FORMAT: &str = "%m/%d/%Y";
pub const STORAGE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp layout produced when spreadsheet dates are coerced to text.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

type Shape = OnceLock<Option<Regex>>;

static DISPLAY_SHAPE: Shape = OnceLock::new();
static STORAGE_SHAPE: Shape = OnceLock::new();
static TIMESTAMP_SHAPE: Shape = OnceLock::new();

fn matches_shape(shape: &'static Shape, pattern: &str, s: &str) -> bool {
    shape
        .get_or_init(|| Regex::new(pattern).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(s))
}

fn is_display_shape(s: &str) -> bool {
    matches_shape(&DISPLAY_SHAPE, r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}$", s)
}

fn is_storage_shape(s: &str) -> bool {
    matches_shape(&STORAGE_SHAPE, r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$", s)
}

fn is_timestamp_shape(s: &str) -> bool {
    matches_shape(
        &TIMESTAMP_SHAPE,
        r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}$",
        s,
    )
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// `MM/DD/YYYY` → `YYYY-MM-DD`.
///
/// Strict: anything that is not a real calendar date in display form is
/// rejected, so the caller can abort the save.
pub fn to_storage(display_date: &str) -> AppResult<String> {
    let invalid = || AppError::InvalidDate(display_date.to_string());

    if !is_display_shape(display_date) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(display_date, DISPLAY_FORMAT)
        .map(|d| d.format(STORAGE_FORMAT).to_string())
        .map_err(|_| invalid())
}

/// `YYYY-MM-DD` → `MM/DD/YYYY`.
///
/// Tolerant: legacy or imported values that do not parse are returned as-is.
pub fn to_display(storage_date: &str) -> String {
    parse_storage_exact(storage_date)
        .map(|d| format_display(&d))
        .unwrap_or_else(|| storage_date.to_string())
}

pub fn format_display(d: &NaiveDate) -> String {
    d.format(DISPLAY_FORMAT).to_string()
}

/// A storage date exactly as written, no surrounding whitespace allowed.
pub fn parse_storage_exact(s: &str) -> Option<NaiveDate> {
    if !is_storage_shape(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, STORAGE_FORMAT).ok()
}

/// Like [`parse_storage_exact`] but ignores surrounding whitespace, for
/// values read back from text files.
pub fn parse_storage(s: &str) -> Option<NaiveDate> {
    parse_storage_exact(s.trim())
}

/// Reduce an imported `YYYY-MM-DD HH:MM:SS` cell to its date part.
/// Any other text is kept verbatim.
pub fn reduce_timestamp(raw: &str) -> String {
    if !is_timestamp_shape(raw) {
        return raw.to_string();
    }

    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map(|dt| dt.format(STORAGE_FORMAT).to_string())
        .unwrap_or_else(|_| raw.to_string())
}
