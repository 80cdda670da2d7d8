use crate::cli::parser::Commands;
use crate::core::list::ListLogic;
use crate::db::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, pool: &DbPool) -> AppResult<()> {
    if let Commands::List { name, json } = cmd {
        let records = ListLogic::records(pool, name.as_deref())?;

        if *json {
            println!("{}", ListLogic::render_json(&records)?);
            return Ok(());
        }

        if records.is_empty() {
            info("No records found.");
            return Ok(());
        }

        print!("{}", ListLogic::render_table(&records));
        println!("\n{} record(s)", records.len());
    }

    Ok(())
}
