mod common;

use common::{fields, open_pool, setup_test_dir, sorted_fields};
use rstringlog::db::queries;
use rstringlog::errors::AppError;
use rstringlog::export::{ExportLogic, ImportLogic, InterchangeFormat, NO_DATA, REQUIRED_COLUMNS};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::fs;
use std::path::Path;

fn seed(pool: &rstringlog::db::DbPool) {
    let mut a = fields("Smith, John", "2024-01-15", "Bob");
    a.tension = "52.5".to_string();
    queries::create(pool, &a).unwrap();

    let mut b = fields("Anna \"Ace\"", "2023-11-02", "Carol");
    b.racket = "Blade 98".to_string();
    queries::create(pool, &b).unwrap();

    queries::create(pool, &fields("Luca", "2024-02-29", "Bob")).unwrap();
}

fn round_trip(name: &str, file: &str, format: InterchangeFormat) {
    let dir = setup_test_dir(name);
    let src = open_pool(&dir.join("src"));
    seed(&src);

    let path = dir.join(file);
    let written = ExportLogic::export_all(&src, &path, format).expect("export");
    assert_eq!(written, 3);

    let dst = open_pool(&dir.join("dst"));
    let summary = ImportLogic::import_all(&dst, &path, format).expect("import");
    assert_eq!(summary.imported, 3);
    assert!(summary.failed.is_empty());

    assert_eq!(
        sorted_fields(&queries::list(&dst, None).unwrap()),
        sorted_fields(&queries::list(&src, None).unwrap())
    );
}

fn write_csv(path: &Path, content: &str) {
    fs::write(path, content).expect("write csv");
}

#[test]
fn test_csv_round_trip() {
    round_trip("interchange_csv_round_trip", "records.csv", InterchangeFormat::Csv);
}

#[test]
fn test_xlsx_round_trip() {
    round_trip("interchange_xlsx_round_trip", "records.xlsx", InterchangeFormat::Xlsx);
}

#[test]
fn test_csv_export_header_and_storage_dates() {
    let dir = setup_test_dir("interchange_csv_header");
    let pool = open_pool(&dir);
    queries::create(&pool, &fields("Alice", "2024-01-15", "Bob")).unwrap();

    let path = dir.join("out.csv");
    ExportLogic::export_all(&pool, &path, InterchangeFormat::Csv).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("Name,Racket,String,Tension,Date Strung,Who Strung")
    );
    assert_eq!(lines.next(), Some("Alice,Pro Staff,Poly,55,2024-01-15,Bob"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_export_empty_store_writes_header_only() {
    let dir = setup_test_dir("interchange_empty_export");
    let pool = open_pool(&dir);

    let path = dir.join("empty.csv");
    assert_eq!(ExportLogic::export_all(&pool, &path, InterchangeFormat::Csv).unwrap(), 0);

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn test_import_missing_column_inserts_nothing() {
    let dir = setup_test_dir("interchange_missing_column");
    let pool = open_pool(&dir);

    let path = dir.join("bad.csv");
    write_csv(
        &path,
        "Name,Racket,String,Date Strung,Who Strung\nAlice,Pure,Poly,2024-01-15,Bob\n",
    );

    match ImportLogic::import_all(&pool, &path, InterchangeFormat::Csv) {
        Err(AppError::InvalidFile(msg)) => {
            assert!(msg.contains("Tension"), "message was: {msg}");
        }
        other => panic!("expected InvalidFile, got {other:?}"),
    }
    assert_eq!(queries::count(&pool).unwrap(), 0);
}

#[test]
fn test_import_fills_missing_cells_and_trims_headers() {
    let dir = setup_test_dir("interchange_sentinel");
    let pool = open_pool(&dir);

    let path = dir.join("partial.csv");
    write_csv(
        &path,
        " Who Strung , Name ,Racket,String,Tension,Date Strung,Notes\n\
         Bob,Alice,,Poly,55,2024-01-15,extra\n\
         Carol,Luca,Blade\n",
    );

    let summary = ImportLogic::import_all(&pool, &path, InterchangeFormat::Csv).unwrap();
    assert_eq!(summary.imported, 2);

    let records = queries::list(&pool, None).unwrap();
    let alice = records.iter().find(|r| r.name == "Alice").expect("Alice");
    assert_eq!(alice.racket, NO_DATA);
    assert_eq!(alice.who_strung, "Bob");
    assert_eq!(alice.date_strung, "2024-01-15");

    let luca = records.iter().find(|r| r.name == "Luca").expect("Luca");
    assert_eq!(luca.racket, "Blade");
    assert_eq!(luca.string, NO_DATA);
    assert_eq!(luca.tension, NO_DATA);
    assert_eq!(luca.date_strung, NO_DATA);
    assert_eq!(luca.who_strung, "Carol");
}

#[test]
fn test_import_reduces_timestamps_and_keeps_other_dates_verbatim() {
    let dir = setup_test_dir("interchange_dates");
    let pool = open_pool(&dir);

    let path = dir.join("dates.csv");
    write_csv(
        &path,
        "Name,Racket,String,Tension,Date Strung,Who Strung\n\
         stamp,Pure,Poly,55,2024-01-15 00:00:00,Bob\n\
         legacy,Pure,Poly,55,15/01/2024,Bob\n",
    );

    ImportLogic::import_all(&pool, &path, InterchangeFormat::Csv).unwrap();

    let by_name = |n: &str| {
        queries::list(&pool, Some(n)).unwrap().remove(0).date_strung
    };
    assert_eq!(by_name("stamp"), "2024-01-15");
    assert_eq!(by_name("legacy"), "15/01/2024");
}

#[test]
fn test_import_continues_after_failed_row() {
    let dir = setup_test_dir("interchange_row_failure");
    let pool = open_pool(&dir);

    pool.conn
        .execute_batch(
            "CREATE TRIGGER reject_bad BEFORE INSERT ON StringingRecords
             WHEN NEW.name = 'BAD'
             BEGIN SELECT RAISE(ABORT, 'rejected by trigger'); END;",
        )
        .unwrap();

    let path = dir.join("five.csv");
    write_csv(
        &path,
        "Name,Racket,String,Tension,Date Strung,Who Strung\n\
         r1,Pure,Poly,55,2024-01-01,Bob\n\
         r2,Pure,Poly,55,2024-01-02,Bob\n\
         BAD,Pure,Poly,55,2024-01-03,Bob\n\
         r4,Pure,Poly,55,2024-01-04,Bob\n\
         r5,Pure,Poly,55,2024-01-05,Bob\n",
    );

    let summary = ImportLogic::import_all(&pool, &path, InterchangeFormat::Csv).unwrap();
    assert_eq!(summary.imported, 4);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].row, 3);
    assert!(summary.failed[0].reason.contains("rejected by trigger"));
    assert_eq!(summary.total(), 5);

    let mut names: Vec<_> = queries::list(&pool, None)
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["r1", "r2", "r4", "r5"]);
}

#[test]
fn test_import_unreadable_file_is_an_error() {
    let dir = setup_test_dir("interchange_unreadable");
    let pool = open_pool(&dir);

    let res = ImportLogic::import_all(&pool, &dir.join("missing.xlsx"), InterchangeFormat::Xlsx);
    assert!(res.is_err());
    assert_eq!(queries::count(&pool).unwrap(), 0);
}

#[test]
fn test_format_from_extension() {
    assert_eq!(
        InterchangeFormat::from_path(Path::new("a/b/Records.CSV")).unwrap(),
        InterchangeFormat::Csv
    );
    assert_eq!(
        InterchangeFormat::from_path(Path::new("records.xlsx")).unwrap(),
        InterchangeFormat::Xlsx
    );
    assert!(matches!(
        InterchangeFormat::from_path(Path::new("records.txt")),
        Err(AppError::InvalidFormat(_))
    ));
    assert_eq!(
        InterchangeFormat::resolve(Some(InterchangeFormat::Csv), Path::new("data.dat")).unwrap(),
        InterchangeFormat::Csv
    );
}

#[test]
fn test_xlsx_import_datetime_cells_and_empty_cells() {
    let dir = setup_test_dir("interchange_xlsx_import");
    let pool = open_pool(&dir);
    let path = dir.join("club.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, h) in REQUIRED_COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *h).unwrap();
    }

    let strung = ExcelDateTime::from_ymd(2024, 1, 15)
        .unwrap()
        .and_hms(13, 45, 0)
        .unwrap();
    let stamp = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");

    sheet.write_string(1, 0, "Alice").unwrap();
    sheet.write_string(1, 1, "Pure Drive").unwrap();
    sheet.write_string(1, 2, "RPM Blast").unwrap();
    sheet.write_number(1, 3, 52.5).unwrap();
    sheet.write_datetime_with_format(1, 4, &strung, &stamp).unwrap();
    sheet.write_string(1, 5, "Bob").unwrap();

    // racket and tension left empty
    sheet.write_string(2, 0, "Luca").unwrap();
    sheet.write_string(2, 2, "Gut").unwrap();
    sheet.write_string(2, 4, "15/01/2024").unwrap();
    sheet.write_string(2, 5, "Carol").unwrap();

    workbook.save(&path).unwrap();

    let summary = ImportLogic::import_all(&pool, &path, InterchangeFormat::Xlsx).unwrap();
    assert_eq!(summary.imported, 2);
    assert!(summary.failed.is_empty());

    let records = queries::list(&pool, None).unwrap();

    let alice = records.iter().find(|r| r.name == "Alice").expect("Alice");
    assert_eq!(alice.tension, "52.5");
    assert_eq!(alice.date_strung, "2024-01-15");
    assert_eq!(alice.who_strung, "Bob");

    let luca = records.iter().find(|r| r.name == "Luca").expect("Luca");
    assert_eq!(luca.racket, NO_DATA);
    assert_eq!(luca.string, "Gut");
    assert_eq!(luca.tension, NO_DATA);
    assert_eq!(luca.date_strung, "15/01/2024");
    assert_eq!(luca.who_strung, "Carol");
}

#[test]
fn test_xlsx_keeps_signed_year_as_text() {
    let dir = setup_test_dir("interchange_xlsx_signed_year");
    let src = open_pool(&dir.join("src"));
    queries::create(&src, &fields("Legacy", "+2024-01-15", "Bob")).unwrap();

    let path = dir.join("legacy.xlsx");
    ExportLogic::export_all(&src, &path, InterchangeFormat::Xlsx).unwrap();

    let dst = open_pool(&dir.join("dst"));
    ImportLogic::import_all(&dst, &path, InterchangeFormat::Xlsx).unwrap();

    let imported = queries::list(&dst, None).unwrap();
    assert_eq!(imported.len(), 1);
    assert_eq!(imported[0].date_strung, "+2024-01-15");
}
