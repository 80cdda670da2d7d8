#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rstringlog::core::RecordInput;
use rstringlog::db::{DbPool, RecordFields};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Binary under test, with HOME pointed at `home` so no real config is read.
pub fn rsl(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rstringlog");
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}

/// Create a fresh, empty directory for one test inside the system temp dir
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rstringlog", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Database path inside a test directory
pub fn db_path(dir: &Path) -> String {
    dir.join("stringing.sqlite").to_string_lossy().to_string()
}

pub fn open_pool(dir: &Path) -> DbPool {
    DbPool::open(db_path(dir)).expect("open db")
}

pub fn input(name: &str, racket: &str, string: &str, tension: &str, date: &str, who: &str) -> RecordInput {
    RecordInput {
        name: name.to_string(),
        racket: racket.to_string(),
        string: string.to_string(),
        tension: tension.to_string(),
        date_strung: date.to_string(),
        who_strung: who.to_string(),
    }
}

/// Record fields with the date already in storage form
pub fn fields(name: &str, date: &str, who: &str) -> RecordFields {
    RecordFields {
        name: name.to_string(),
        racket: "Pro Staff".to_string(),
        string: "Poly".to_string(),
        tension: "55".to_string(),
        date_strung: date.to_string(),
        who_strung: who.to_string(),
    }
}

/// Business-field tuples, sorted, for order-independent comparisons
pub fn sorted_fields(records: &[rstringlog::db::StringingRecord]) -> Vec<RecordFields> {
    let mut v: Vec<RecordFields> = records.iter().map(|r| r.fields()).collect();
    v.sort_by(|a, b| {
        (&a.name, &a.date_strung, &a.racket).cmp(&(&b.name, &b.date_strung, &b.racket))
    });
    v
}
