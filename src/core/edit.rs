use crate::core::editor::RecordInput;
use crate::db::DbPool;
use crate::db::log::ttlog_quiet;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::utils::date::to_display;

/// Fields given on the command line; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    pub name: Option<String>,
    pub racket: Option<String>,
    pub string: Option<String>,
    pub tension: Option<String>,
    pub date_strung: Option<String>,
    pub who_strung: Option<String>,
}

impl RecordPatch {
    /// All six fields present: a full replacement.
    pub fn as_complete(&self) -> Option<RecordInput> {
        Some(RecordInput {
            name: self.name.clone()?,
            racket: self.racket.clone()?,
            string: self.string.clone()?,
            tension: self.tension.clone()?,
            date_strung: self.date_strung.clone()?,
            who_strung: self.who_strung.clone()?,
        })
    }
}

pub struct EditLogic;

impl EditLogic {
    /// Replace the six fields of record `id`.
    ///
    /// With a complete patch the update is issued blindly, so an unknown id
    /// is a silent no-op. A partial patch needs the stored record to fill
    /// the gaps and fails with `RecordNotFound` when there is none.
    pub fn apply(pool: &DbPool, id: i64, patch: &RecordPatch) -> AppResult<()> {
        let input = match patch.as_complete() {
            Some(input) => input,
            None => {
                let current = queries::get(pool, id)?.ok_or(AppError::RecordNotFound(id))?;
                RecordInput {
                    name: patch.name.clone().unwrap_or(current.name),
                    racket: patch.racket.clone().unwrap_or(current.racket),
                    string: patch.string.clone().unwrap_or(current.string),
                    tension: patch.tension.clone().unwrap_or(current.tension),
                    date_strung: patch
                        .date_strung
                        .clone()
                        .unwrap_or_else(|| to_display(&current.date_strung)),
                    who_strung: patch.who_strung.clone().unwrap_or(current.who_strung),
                }
            }
        };

        let fields = input.validate()?;
        queries::update(pool, id, &fields)?;

        ttlog_quiet(
            &pool.conn,
            "edit",
            &format!("#{id}"),
            &format!("Record updated ({} / {})", fields.name, fields.date_strung),
        );

        Ok(())
    }
}
