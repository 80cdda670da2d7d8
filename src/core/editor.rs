//! Validation shared by `add` and `edit`: the rules the record editor
//! applies before anything reaches the store.

use crate::db::RecordFields;
use crate::errors::{AppError, AppResult};
use crate::utils::date::to_storage;

/// The six business fields as typed by the user (date in `MM/DD/YYYY`).
#[derive(Debug, Clone, Default)]
pub struct RecordInput {
    pub name: String,
    pub racket: String,
    pub string: String,
    pub tension: String,
    pub date_strung: String,
    pub who_strung: String,
}

impl RecordInput {
    /// Every field must be non-blank, then the date must parse.
    /// Nothing is written when either check fails.
    pub fn validate(&self) -> AppResult<RecordFields> {
        let checks = [
            ("name", &self.name),
            ("racket", &self.racket),
            ("string", &self.string),
            ("tension", &self.tension),
            ("date", &self.date_strung),
            ("who_strung", &self.who_strung),
        ];

        if let Some((field, _)) = checks.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(AppError::MissingField(field.to_string()));
        }

        Ok(RecordFields {
            name: self.name.clone(),
            racket: self.racket.clone(),
            string: self.string.clone(),
            tension: self.tension.clone(),
            date_strung: to_storage(&self.date_strung)?,
            who_strung: self.who_strung.clone(),
        })
    }
}
