//! Database row models for stringing records and report rows.
//! These are thin wrappers around SQLite rows.

use serde::Serialize;

/// One stringing job as stored (`date_strung` in `YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringingRecord {
    pub id: i64,
    pub name: String,
    pub racket: String,
    pub string: String,
    pub tension: String,
    pub date_strung: String,
    pub who_strung: String,
}

/// The six business fields, without the store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordFields {
    pub name: String,
    pub racket: String,
    pub string: String,
    pub tension: String,
    pub date_strung: String,
    pub who_strung: String,
}

impl StringingRecord {
    pub fn fields(&self) -> RecordFields {
        RecordFields {
            name: self.name.clone(),
            racket: self.racket.clone(),
            string: self.string.clone(),
            tension: self.tension.clone(),
            date_strung: self.date_strung.clone(),
            who_strung: self.who_strung.clone(),
        }
    }
}

/// A row of the "jobs per stringer" report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringerCount {
    pub who_strung: String,
    pub count: i64,
}
