use crate::cli::parser::Commands;
use crate::db::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{detail, info, success, warning};

pub fn handle(cmd: &Commands, pool: &DbPool) -> AppResult<()> {
    let Commands::Db {
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    if !(*check || *vacuum || *show_info) {
        info("Nothing to do: use --info, --check or --vacuum.");
        return Ok(());
    }

    if *show_info {
        stats::print_db_info(pool)?;
    }

    if *check {
        info("Running integrity check…");
        let problems = stats::integrity_problems(pool)?;
        if problems.is_empty() {
            success("Integrity check passed.");
        } else {
            warning(format!("Integrity check reported {} problem(s):", problems.len()));
            for p in &problems {
                detail(p);
            }
        }
    }

    if *vacuum {
        info("Running VACUUM…");
        stats::vacuum(pool)?;
        success("Vacuum completed.");
    }

    Ok(())
}
