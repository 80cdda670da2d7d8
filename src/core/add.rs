use crate::core::editor::RecordInput;
use crate::db::DbPool;
use crate::db::log::ttlog_quiet;
use crate::db::queries;
use crate::errors::AppResult;

pub struct AddLogic;

impl AddLogic {
    /// Validate and insert a new record. Returns the id assigned by the store.
    pub fn apply(pool: &DbPool, input: &RecordInput) -> AppResult<i64> {
        let fields = input.validate()?;
        let id = queries::create(pool, &fields)?;

        ttlog_quiet(
            &pool.conn,
            "add",
            &format!("#{id}"),
            &format!(
                "{} / {} / {} @ {} on {} by {}",
                fields.name,
                fields.racket,
                fields.string,
                fields.tension,
                fields.date_strung,
                fields.who_strung
            ),
        );

        Ok(id)
    }
}
