use crate::cli::parser::Commands;
use crate::core::log::LogLogic;
use crate::db::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, pool: &DbPool) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        LogLogic::print_log(pool)?;
    }

    Ok(())
}
