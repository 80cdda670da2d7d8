use rstringlog::errors::AppError;
use chrono::NaiveDate;
use rstringlog::utils::date::{parse_storage, reduce_timestamp, to_display, to_storage};

#[test]
fn test_to_storage_converts_display_date() {
    assert_eq!(to_storage("01/15/2024").unwrap(), "2024-01-15");
    assert_eq!(to_storage("12/31/1999").unwrap(), "1999-12-31");
    assert_eq!(to_storage("02/29/2024").unwrap(), "2024-02-29");
}

#[test]
fn test_display_storage_round_trip() {
    for d in ["01/01/2020", "02/29/2024", "07/04/2025", "11/30/2023", "12/31/2099"] {
        let stored = to_storage(d).expect("valid date");
        assert_eq!(to_display(&stored), d, "round trip failed for {d}");
    }
}

#[test]
fn test_to_storage_rejects_malformed_dates() {
    for bad in [
        "",
        "abc",
        "2024-01-15",
        "13/01/2024",
        "02/30/2023",
        "02/29/2023",
        "01-15-2024",
        "01/15/24",
        "01/15/+2024",
        " 01/15/2024",
        "01/15/02024",
        "01/15/-2024",
    ] {
        match to_storage(bad) {
            Err(AppError::InvalidDate(s)) => assert_eq!(s, bad),
            other => panic!("expected InvalidDate for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_to_display_is_tolerant() {
    for raw in [
        "",
        "-no data-",
        "01/15/2024",
        "2024-13-01",
        "15/01/2024",
        "2024-01-15 10:00:00",
        "+2024-01-15",
        "24-01-15",
        " 2024-01-15",
    ] {
        assert_eq!(to_display(raw), raw);
    }
    assert_eq!(to_display("2024-01-15"), "01/15/2024");
}

#[test]
fn test_reduce_timestamp() {
    assert_eq!(reduce_timestamp("2024-01-15 00:00:00"), "2024-01-15");
    assert_eq!(reduce_timestamp("2023-06-30 18:45:10"), "2023-06-30");
    assert_eq!(reduce_timestamp("2024-01-15"), "2024-01-15");
    assert_eq!(reduce_timestamp("01/15/2024"), "01/15/2024");
    assert_eq!(reduce_timestamp("-no data-"), "-no data-");
    assert_eq!(reduce_timestamp("+2024-01-15 00:00:00"), "+2024-01-15 00:00:00");
}

#[test]
fn test_parse_storage_requires_four_digit_year() {
    assert_eq!(parse_storage(" 2024-01-15\n"), NaiveDate::from_ymd_opt(2024, 1, 15));
    assert_eq!(parse_storage("+2024-01-15"), None);
    assert_eq!(parse_storage("24-01-15"), None);
    assert_eq!(parse_storage("2024-1-5"), None);
}
