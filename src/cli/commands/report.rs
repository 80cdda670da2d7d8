use crate::cli::parser::Commands;
use crate::core::report::ReportLogic;
use crate::db::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info};
use crate::utils::date;

pub fn handle(cmd: &Commands, pool: &DbPool) -> AppResult<()> {
    if let Commands::Report { from, to, json } = cmd {
        let today = date::format_display(&date::today());
        let from = from.clone().unwrap_or_else(|| today.clone());
        let to = to.clone().unwrap_or(today);

        let rows = ReportLogic::stringer_counts(pool, &from, &to)?;

        if *json {
            let out = serde_json::to_string_pretty(&rows)
                .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
            println!("{}", out);
            return Ok(());
        }

        header(format!("Rackets strung from {} to {}", from, to));

        if rows.is_empty() {
            info("No records in this date range.");
            return Ok(());
        }

        print!("{}", ReportLogic::render_table(&rows));
    }

    Ok(())
}
