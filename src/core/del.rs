use crate::db::DbPool;
use crate::db::log::ttlog_quiet;
use crate::db::queries;
use crate::errors::AppResult;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete record `id`. Deleting an id that does not exist succeeds.
    pub fn apply(pool: &DbPool, id: i64) -> AppResult<()> {
        queries::delete(pool, id)?;
        ttlog_quiet(&pool.conn, "del", &format!("#{id}"), "Record deleted");
        Ok(())
    }
}
