use crate::export::InterchangeFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rStringlog
/// CLI application to track racket stringing jobs with SQLite
#[derive(Parser)]
#[command(
    name = "rstringlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track tennis racket stringing jobs: who strung which racket, with what string and tension, and when",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Skip the automatic startup backup for this run
    #[arg(global = true, long = "no-backup")]
    pub no_backup: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (integrity checks, vacuum, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a stringing record
    Add {
        #[arg(long, help = "Racket owner")]
        name: String,

        #[arg(long, help = "Racket model")]
        racket: String,

        #[arg(long = "string", help = "String product used")]
        string: String,

        #[arg(long, help = "Tension setting")]
        tension: String,

        #[arg(long, help = "Date strung (MM/DD/YYYY, default: today)")]
        date: Option<String>,

        #[arg(long = "who", help = "Who strung the racket")]
        who: String,
    },

    /// Edit a stringing record (omitted fields keep their current value)
    Edit {
        /// Record ID
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        racket: Option<String>,

        #[arg(long = "string")]
        string: Option<String>,

        #[arg(long)]
        tension: Option<String>,

        #[arg(long, help = "Date strung (MM/DD/YYYY)")]
        date: Option<String>,

        #[arg(long = "who")]
        who: Option<String>,
    },

    /// Delete a stringing record by ID
    Del {
        /// Record ID
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List records, newest first
    List {
        #[arg(long, short, help = "Only records whose name contains this text")]
        name: Option<String>,

        #[arg(long, help = "Print records as JSON")]
        json: bool,
    },

    /// Count jobs per stringer in a date range
    Report {
        #[arg(long, value_name = "MM/DD/YYYY", help = "Start date (default: today)")]
        from: Option<String>,

        #[arg(long, value_name = "MM/DD/YYYY", help = "End date (default: today)")]
        to: Option<String>,

        #[arg(long, help = "Print the report as JSON")]
        json: bool,
    },

    /// Export all records to CSV or Excel
    Export {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, help = "File format (default: from extension)")]
        format: Option<InterchangeFormat>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import records from CSV or Excel
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, help = "File format (default: from extension)")]
        format: Option<InterchangeFormat>,
    },

    /// Back up the database (without --file: run a full backup cycle now)
    Backup {
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, requires = "file")]
        compress: bool,

        #[arg(long, short = 'f', requires = "file")]
        force: bool,
    },
}
