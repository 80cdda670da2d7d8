use crate::db::queries;
use crate::db::{DbPool, StringingRecord};
use crate::errors::{AppError, AppResult};
use crate::utils::colors::colorize_optional;
use crate::utils::date::to_display;
use crate::utils::table::Table;

pub struct ListLogic;

impl ListLogic {
    pub fn records(pool: &DbPool, name_filter: Option<&str>) -> AppResult<Vec<StringingRecord>> {
        queries::list(pool, name_filter)
    }

    /// Records as a table, dates in display form.
    pub fn render_table(records: &[StringingRecord]) -> String {
        let mut table = Table::with_headers(&[
            "ID",
            "Name",
            "Racket",
            "String",
            "Tension",
            "Date",
            "Who Strung",
        ]);

        for r in records {
            table.add_row(vec![
                r.id.to_string(),
                colorize_optional(&r.name),
                colorize_optional(&r.racket),
                colorize_optional(&r.string),
                colorize_optional(&r.tension),
                colorize_optional(&to_display(&r.date_strung)),
                colorize_optional(&r.who_strung),
            ]);
        }

        table.render()
    }

    pub fn render_json(records: &[StringingRecord]) -> AppResult<String> {
        serde_json::to_string_pretty(records)
            .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))
    }
}
