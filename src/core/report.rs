use crate::db::queries;
use crate::db::{DbPool, StringerCount};
use crate::errors::AppResult;
use crate::utils::date::to_storage;
use crate::utils::table::Table;

pub struct ReportLogic;

impl ReportLogic {
    /// Jobs per stringer between two display dates (inclusive).
    pub fn stringer_counts(pool: &DbPool, from: &str, to: &str) -> AppResult<Vec<StringerCount>> {
        let start = to_storage(from)?;
        let end = to_storage(to)?;
        queries::aggregate_by_stringer(pool, &start, &end)
    }

    pub fn render_table(rows: &[StringerCount]) -> String {
        let mut table = Table::with_headers(&["Who Strung", "Rackets Count"]);
        for r in rows {
            table.add_row(vec![r.who_strung.clone(), r.count.to_string()]);
        }
        table.render()
    }
}
