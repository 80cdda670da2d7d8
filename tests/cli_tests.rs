mod common;

use common::{db_path, rsl, setup_test_dir};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

fn add(home: &Path, db: &str, name: &str, date: &str, who: &str) {
    rsl(home)
        .args([
            "--db", db, "--no-backup", "add", "--name", name, "--racket", "Pure Drive",
            "--string", "RPM Blast", "--tension", "52", "--date", date, "--who", who,
        ])
        .assert()
        .success()
        .stdout(contains("saved"));
}

#[test]
fn test_init_creates_database() {
    let dir = setup_test_dir("cli_init");
    let db = db_path(&dir);

    rsl(&dir)
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(Path::new(&db).exists());
}

#[test]
fn test_add_and_list_show_display_dates() {
    let dir = setup_test_dir("cli_add_list");
    let db = db_path(&dir);

    add(&dir, &db, "Alice", "01/15/2024", "Bob");

    rsl(&dir)
        .args(["--db", &db, "--no-backup", "list"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("01/15/2024"))
        .stdout(contains("1 record(s)"));

    rsl(&dir)
        .args(["--db", &db, "--no-backup", "list", "--json"])
        .assert()
        .success()
        .stdout(contains("\"date_strung\": \"2024-01-15\""));
}

#[test]
fn test_add_rejects_invalid_date() {
    let dir = setup_test_dir("cli_add_bad_date");
    let db = db_path(&dir);

    rsl(&dir)
        .args([
            "--db", &db, "--no-backup", "add", "--name", "Alice", "--racket", "Pure",
            "--string", "Poly", "--tension", "52", "--date", "2024-01-15", "--who", "Bob",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    rsl(&dir)
        .args(["--db", &db, "--no-backup", "list"])
        .assert()
        .success()
        .stdout(contains("No records found"));
}

#[test]
fn test_list_name_filter() {
    let dir = setup_test_dir("cli_list_filter");
    let db = db_path(&dir);

    add(&dir, &db, "john smith", "01/15/2024", "Bob");
    add(&dir, &db, "anna", "01/16/2024", "Bob");

    rsl(&dir)
        .args(["--db", &db, "--no-backup", "list", "--name", "smith"])
        .assert()
        .success()
        .stdout(contains("john smith"))
        .stdout(contains("anna").not());
}

#[test]
fn test_edit_and_delete() {
    let dir = setup_test_dir("cli_edit_del");
    let db = db_path(&dir);

    add(&dir, &db, "Alice", "01/15/2024", "Bob");

    rsl(&dir)
        .args(["--db", &db, "--no-backup", "edit", "1", "--tension", "56"])
        .assert()
        .success();

    rsl(&dir)
        .args(["--db", &db, "--no-backup", "list", "--json"])
        .assert()
        .success()
        .stdout(contains("\"tension\": \"56\""));

    rsl(&dir)
        .args(["--db", &db, "--no-backup", "edit", "99", "--tension", "56"])
        .assert()
        .failure()
        .stderr(contains("Record #99 not found"));

    rsl(&dir)
        .args(["--db", &db, "--no-backup", "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    rsl(&dir)
        .args(["--db", &db, "--no-backup", "list"])
        .assert()
        .success()
        .stdout(contains("No records found"));
}

#[test]
fn test_report_counts_per_stringer() {
    let dir = setup_test_dir("cli_report");
    let db = db_path(&dir);

    add(&dir, &db, "a", "01/10/2024", "Bob");
    add(&dir, &db, "b", "01/20/2024", "Bob");
    add(&dir, &db, "c", "01/21/2024", "Carol");
    add(&dir, &db, "d", "03/01/2024", "Dave");

    rsl(&dir)
        .args([
            "--db", &db, "--no-backup", "report", "--from", "01/01/2024", "--to", "01/31/2024",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"who_strung\": \"Bob\""))
        .stdout(contains("\"count\": 2"))
        .stdout(contains("Dave").not());
}

#[test]
fn test_export_then_import_csv() {
    let dir = setup_test_dir("cli_export_import");
    let db = db_path(&dir);
    let other_db = dir.join("other.sqlite").to_string_lossy().to_string();
    let file = dir.join("records.csv").to_string_lossy().to_string();

    add(&dir, &db, "Alice", "01/15/2024", "Bob");
    add(&dir, &db, "Luca", "02/01/2024", "Carol");

    rsl(&dir)
        .args(["--db", &db, "--no-backup", "export", "--file", &file])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    rsl(&dir)
        .args(["--db", &other_db, "--no-backup", "import", "--file", &file])
        .assert()
        .success()
        .stdout(contains("2 record(s) imported successfully"));

    rsl(&dir)
        .args(["--db", &other_db, "--no-backup", "list"])
        .assert()
        .success()
        .stdout(contains("Luca"))
        .stdout(contains("02/01/2024"));
}

#[test]
fn test_import_rejects_missing_columns() {
    let dir = setup_test_dir("cli_import_bad");
    let db = db_path(&dir);
    let file = dir.join("bad.csv");
    fs::write(&file, "Name,Racket\nAlice,Pure\n").unwrap();

    rsl(&dir)
        .args([
            "--db",
            &db,
            "--no-backup",
            "import",
            "--file",
            &file.to_string_lossy(),
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid file"))
        .stderr(contains("Tension"));
}

#[test]
fn test_export_rejects_unknown_extension() {
    let dir = setup_test_dir("cli_export_format");
    let db = db_path(&dir);
    let file = dir.join("records.txt").to_string_lossy().to_string();

    rsl(&dir)
        .args(["--db", &db, "--no-backup", "export", "--file", &file])
        .assert()
        .failure()
        .stderr(contains("Unsupported file format"));
}

#[test]
fn test_startup_backup_runs_once() {
    let dir = setup_test_dir("cli_startup_backup");
    let db = db_path(&dir);
    let stamp = dir.join("backup").join("stringing_last_backup.txt");

    rsl(&dir)
        .args(["--db", &db, "list"])
        .assert()
        .success()
        .stdout(contains("Backup completed"));

    assert!(stamp.exists());
    assert!(dir.join("backup").join("stringing_backup.sqlite").exists());
    assert!(dir.join("backup").join("stringing_snapshot.xlsx").exists());

    rsl(&dir)
        .args(["--db", &db, "list"])
        .assert()
        .success()
        .stdout(contains("Backup completed").not());
}

#[test]
fn test_no_backup_flag_skips_startup_backup() {
    let dir = setup_test_dir("cli_no_backup");
    let db = db_path(&dir);

    rsl(&dir)
        .args(["--db", &db, "--no-backup", "list"])
        .assert()
        .success();

    assert!(!dir.join("backup").exists());
}

#[test]
fn test_log_records_operations() {
    let dir = setup_test_dir("cli_log");
    let db = db_path(&dir);

    add(&dir, &db, "Alice", "01/15/2024", "Bob");

    rsl(&dir)
        .args(["--db", &db, "--no-backup", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("add"));
}

#[test]
fn test_db_check_and_info() {
    let dir = setup_test_dir("cli_db_check");
    let db = db_path(&dir);

    add(&dir, &db, "Alice", "01/15/2024", "Bob");

    rsl(&dir)
        .args(["--db", &db, "--no-backup", "db", "--check", "--info"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Total records:"));
}

#[test]
fn test_config_print_shows_defaults() {
    let dir = setup_test_dir("cli_config_print");

    rsl(&dir)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("backup_interval_days: 30"))
        .stdout(contains("auto_backup: true"));
}
