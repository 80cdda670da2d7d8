use crate::cli::parser::Commands;
use crate::core::edit::{EditLogic, RecordPatch};
use crate::db::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, pool: &DbPool) -> AppResult<()> {
    if let Commands::Edit {
        id,
        name,
        racket,
        string,
        tension,
        date,
        who,
    } = cmd
    {
        let patch = RecordPatch {
            name: name.clone(),
            racket: racket.clone(),
            string: string.clone(),
            tension: tension.clone(),
            date_strung: date.clone(),
            who_strung: who.clone(),
        };

        EditLogic::apply(pool, *id, &patch)?;
        success(format!("Record #{} saved.", id));
    }

    Ok(())
}
