use crate::cli::parser::Commands;
use crate::db::DbPool;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::{ExportLogic, InterchangeFormat};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, pool: &DbPool) -> AppResult<()> {
    if let Commands::Export {
        file,
        format,
        force,
    } = cmd
    {
        let path = expand_tilde(file);
        let format = InterchangeFormat::resolve(*format, &path)?;

        ensure_writable(&path, *force)?;
        ExportLogic::export_all(pool, &path, format)?;
    }
    Ok(())
}
