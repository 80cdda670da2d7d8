use crate::cli::parser::Commands;
use crate::db::DbPool;
use crate::errors::AppResult;
use crate::export::{ImportLogic, InterchangeFormat};
use crate::ui::messages::{detail, info, success, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, pool: &DbPool) -> AppResult<()> {
    if let Commands::Import { file, format } = cmd {
        let path = expand_tilde(file);
        let format = InterchangeFormat::resolve(*format, &path)?;

        info(format!("Importing from {}: {}", format.as_str().to_uppercase(), path.display()));

        let summary = ImportLogic::import_all(pool, &path, format)?;

        if summary.failed.is_empty() {
            success(format!("{} record(s) imported successfully!", summary.imported));
        } else {
            warning(format!(
                "{} record(s) imported, {} failed:",
                summary.imported,
                summary.failed.len()
            ));
            for f in &summary.failed {
                detail(format!("row {}: {}", f.row, f.reason));
            }
        }
    }
    Ok(())
}
