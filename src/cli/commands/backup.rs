use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::core::scheduler::BackupScheduler;
use crate::db::DbPool;
use crate::errors::AppResult;
use crate::utils::date;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config, pool: &DbPool) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        match file {
            Some(f) => {
                BackupLogic::backup(pool, &expand_tilde(f), *compress, *force)?;
            }
            None => {
                BackupScheduler::from_config(cfg).run_cycle(pool, date::today());
            }
        }
    }

    Ok(())
}
