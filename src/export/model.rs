// src/export/model.rs

use crate::db::{RecordFields, StringingRecord};
use crate::utils::date::reduce_timestamp;

/// Placeholder stored for cells missing from an imported file.
pub const NO_DATA: &str = crate::utils::colors::NO_DATA;

/// Header row shared by export and import, in column order.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Name",
    "Racket",
    "String",
    "Tension",
    "Date Strung",
    "Who Strung",
];

/// Position of the date column inside [`REQUIRED_COLUMNS`].
pub(crate) const DATE_COLUMN: usize = 4;

/// A tabular file as read from disk: trimmed header names plus data rows.
/// `None` marks a missing or empty cell.
#[derive(Debug, Default)]
pub(crate) struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    /// Names of the required columns absent from the header row.
    pub fn missing_columns(&self) -> Vec<&'static str> {
        REQUIRED_COLUMNS
            .iter()
            .filter(|c| !self.headers.iter().any(|h| h == *c))
            .copied()
            .collect()
    }

    /// Header index of each required column, in [`REQUIRED_COLUMNS`] order.
    pub fn column_indexes(&self) -> Option<[usize; 6]> {
        let mut idx = [0usize; 6];
        for (slot, name) in idx.iter_mut().zip(REQUIRED_COLUMNS.iter()) {
            *slot = self.headers.iter().position(|h| h == name)?;
        }
        Some(idx)
    }
}

/// Record → export row (dates stay in storage form).
pub(crate) fn record_to_row(r: &StringingRecord) -> [String; 6] {
    [
        r.name.clone(),
        r.racket.clone(),
        r.string.clone(),
        r.tension.clone(),
        r.date_strung.clone(),
        r.who_strung.clone(),
    ]
}

/// Import row → record fields.
///
/// Missing cells become [`NO_DATA`]; the date cell is reduced from
/// `YYYY-MM-DD HH:MM:SS` to `YYYY-MM-DD` when it has that shape.
pub(crate) fn row_to_fields(row: &[Option<String>], idx: &[usize; 6]) -> RecordFields {
    let cell = |i: usize| -> String {
        row.get(idx[i])
            .cloned()
            .flatten()
            .unwrap_or_else(|| NO_DATA.to_string())
    };

    RecordFields {
        name: cell(0),
        racket: cell(1),
        string: cell(2),
        tension: cell(3),
        date_strung: reduce_timestamp(&cell(DATE_COLUMN)),
        who_strung: cell(5),
    }
}
