use crate::cli::parser::Commands;
use crate::core::RecordInput;
use crate::core::add::AddLogic;
use crate::db::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;

/// Add a stringing record.
pub fn handle(cmd: &Commands, pool: &DbPool) -> AppResult<()> {
    if let Commands::Add {
        name,
        racket,
        string,
        tension,
        date: date_strung,
        who,
    } = cmd
    {
        let input = RecordInput {
            name: name.clone(),
            racket: racket.clone(),
            string: string.clone(),
            tension: tension.clone(),
            // same as the editor's "set to current date"
            date_strung: date_strung
                .clone()
                .unwrap_or_else(|| date::format_display(&date::today())),
            who_strung: who.clone(),
        };

        let id = AddLogic::apply(pool, &input)?;
        success(format!("Record #{} saved ({} on {}).", id, name, input.date_strung));
    }

    Ok(())
}
