//! rStringlog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use crate::core::scheduler::BackupScheduler;
use db::DbPool;
use errors::AppResult;

/// Central command dispatcher for commands working on the store.
pub fn dispatch(cli: &Cli, cfg: &Config, pool: &DbPool) -> AppResult<()> {
    match &cli.command {
        // handled before the store is opened
        Commands::Init | Commands::Config { .. } => Ok(()),
        Commands::Db { .. } => commands::db::handle(&cli.command, pool),
        Commands::Log { .. } => commands::log::handle(&cli.command, pool),
        Commands::Add { .. } => commands::add::handle(&cli.command, pool),
        Commands::Edit { .. } => commands::edit::handle(&cli.command, pool),
        Commands::Del { .. } => commands::del::handle(&cli.command, pool),
        Commands::List { .. } => commands::list::handle(&cli.command, pool),
        Commands::Report { .. } => commands::report::handle(&cli.command, pool),
        Commands::Export { .. } => commands::export::handle(&cli.command, pool),
        Commands::Import { .. } => commands::import::handle(&cli.command, pool),
        Commands::Backup { .. } => commands::backup::handle(&cli.command, cfg, pool),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ optional DB override from the command line
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // 4️⃣ commands that do not need the store
    match &cli.command {
        Commands::Init => return commands::init::handle(&cli),
        Commands::Config { .. } => return commands::config::handle(&cli.command, &cfg),
        _ => {}
    }

    // 5️⃣ open the store once: schema check, then the startup backup
    let pool = DbPool::open(cfg.database_path())?;

    if cfg.auto_backup && !cli.no_backup {
        BackupScheduler::from_config(&cfg).run_on_start(&pool, utils::date::today());
    }

    // 6️⃣ dispatch, then release the handle
    let result = dispatch(&cli, &cfg, &pool);
    pool.close()?;
    result
}
