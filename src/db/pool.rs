//! SQLite store handle (lightweight for CLI usage).
//!
//! Opened once per process, passed by reference to every component that
//! needs persistence, closed before exit.

use crate::db::initialize::ensure_schema;
use crate::errors::AppResult;
use crate::utils::path::parent_dir;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

pub struct DbPool {
    pub conn: Connection,
    path: PathBuf,
}

impl DbPool {
    /// Open (or create) the database file and make sure the schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        fs::create_dir_all(parent_dir(&path))?;

        let conn = Connection::open(&path)?;
        ensure_schema(&conn)?;

        Ok(Self { conn, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn close(self) -> AppResult<()> {
        self.conn.close().map_err(|(_, e)| e)?;
        Ok(())
    }
}
