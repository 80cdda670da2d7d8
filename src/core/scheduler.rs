//! Startup backup policy.
//!
//! At most once per `backup_interval_days` the live database is copied
//! byte-for-byte and every table is dumped into a spreadsheet snapshot.
//! The backup is advisory: each step is attempted even when an earlier one
//! failed, failures are only logged, and nothing here returns an error.

use crate::config::Config;
use crate::db::DbPool;
use crate::db::log::ttlog_quiet;
use crate::export::fs_utils::remove_if_exists;
use crate::export::snapshot::write_snapshot;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::{STORAGE_FORMAT, parse_storage};
use crate::utils::path::file_stem;
use chrono::NaiveDate;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupState {
    BackupDue,
    BackupCurrent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupStep {
    DeleteOld,
    RawCopy,
    Snapshot,
    Timestamp,
}

impl fmt::Display for BackupStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BackupStep::DeleteOld => "delete previous backup",
            BackupStep::RawCopy => "copy database",
            BackupStep::Snapshot => "spreadsheet snapshot",
            BackupStep::Timestamp => "update timestamp",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone)]
pub struct StepResult {
    pub step: BackupStep,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BackupReport {
    pub state: BackupState,
    pub last_backup: Option<NaiveDate>,
    /// Empty when no cycle ran.
    pub steps: Vec<StepResult>,
}

impl BackupReport {
    pub fn performed(&self) -> bool {
        !self.steps.is_empty()
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepResult> {
        self.steps.iter().filter(|s| s.error.is_some())
    }
}

/// Backup artifacts, all named after the database file.
#[derive(Debug, Clone)]
pub struct BackupPaths {
    pub dir: PathBuf,
    pub raw_copy: PathBuf,
    pub snapshot: PathBuf,
    pub timestamp: PathBuf,
}

impl BackupPaths {
    pub fn new(dir: &Path, database: &Path) -> Self {
        let stem = file_stem(database);
        Self {
            dir: dir.to_path_buf(),
            raw_copy: dir.join(format!("{stem}_backup.sqlite")),
            snapshot: dir.join(format!("{stem}_snapshot.xlsx")),
            timestamp: dir.join(format!("{stem}_last_backup.txt")),
        }
    }
}

pub struct BackupScheduler {
    paths: BackupPaths,
    interval_days: i64,
}

impl BackupScheduler {
    pub fn new(paths: BackupPaths, interval_days: i64) -> Self {
        Self {
            paths,
            interval_days,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            BackupPaths::new(&cfg.backup_path(), &cfg.database_path()),
            cfg.backup_interval_days,
        )
    }

    /// Date of the last successful cycle; `None` when absent or unreadable.
    pub fn last_backup(&self) -> Option<NaiveDate> {
        let content = fs::read_to_string(&self.paths.timestamp).ok()?;
        parse_storage(&content)
    }

    pub fn evaluate(&self, today: NaiveDate) -> BackupState {
        match self.last_backup() {
            None => BackupState::BackupDue,
            Some(last) if (today - last).num_days() > self.interval_days => BackupState::BackupDue,
            Some(_) => BackupState::BackupCurrent,
        }
    }

    /// Called once per process start, before any command runs.
    pub fn run_on_start(&self, pool: &DbPool, today: NaiveDate) -> BackupReport {
        let last_backup = self.last_backup();

        match self.evaluate(today) {
            BackupState::BackupCurrent => BackupReport {
                state: BackupState::BackupCurrent,
                last_backup,
                steps: Vec::new(),
            },
            BackupState::BackupDue => {
                info("Backup due: refreshing database backup and snapshot…");
                let steps = self.run_cycle(pool, today);
                BackupReport {
                    state: BackupState::BackupDue,
                    last_backup,
                    steps,
                }
            }
        }
    }

    /// Run all four steps now, regardless of the last backup date.
    pub fn run_cycle(&self, pool: &DbPool, today: NaiveDate) -> Vec<StepResult> {
        if let Err(e) = fs::create_dir_all(&self.paths.dir) {
            warning(format!(
                "Cannot create backup folder {}: {}",
                self.paths.dir.display(),
                e
            ));
        }

        let steps = vec![
            self.step(pool, BackupStep::DeleteOld, || self.delete_old()),
            self.step(pool, BackupStep::RawCopy, || {
                fs::copy(pool.path(), &self.paths.raw_copy)
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            }),
            self.step(pool, BackupStep::Snapshot, || {
                write_snapshot(pool, &self.paths.snapshot)
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            }),
            self.step(pool, BackupStep::Timestamp, || {
                fs::write(
                    &self.paths.timestamp,
                    today.format(STORAGE_FORMAT).to_string(),
                )
                .map_err(|e| e.to_string())
            }),
        ];

        let failed = steps.iter().filter(|s| s.error.is_some()).count();
        if failed == 0 {
            success(format!("Backup completed in {}", self.paths.dir.display()));
            ttlog_quiet(
                &pool.conn,
                "backup",
                &self.paths.dir.to_string_lossy(),
                "Scheduled backup completed",
            );
        } else {
            warning(format!("Backup completed with {} failed step(s)", failed));
        }

        steps
    }

    fn delete_old(&self) -> Result<(), String> {
        let mut errors = Vec::new();
        for p in [&self.paths.raw_copy, &self.paths.snapshot] {
            if let Err(e) = remove_if_exists(p) {
                errors.push(format!("{}: {}", p.display(), e));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.join("; "))
        }
    }

    fn step<F>(&self, pool: &DbPool, step: BackupStep, action: F) -> StepResult
    where
        F: FnOnce() -> Result<(), String>,
    {
        let error = action().err();

        if let Some(e) = &error {
            warning(format!("Backup step '{}' failed: {}", step, e));
            ttlog_quiet(&pool.conn, "backup", &step.to_string(), &format!("failed: {e}"));
        }

        StepResult { step, error }
    }
}
