// src/export/excel_date.rs

use crate::utils::date::{TIMESTAMP_FORMAT, parse_storage_exact};
use chrono::{Duration, NaiveDate, NaiveDateTime};

const SECONDS_PER_DAY: f64 = 86_400.0;

fn excel_epoch() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)
}

/// Storage date (`YYYY-MM-DD`) → Excel serial + number format, if it is one.
pub(crate) fn storage_date_to_excel(s: &str) -> Option<(&'static str, f64)> {
    let d = parse_storage_exact(s)?;
    let serial = naive_datetime_to_excel_serial(&d.and_hms_opt(0, 0, 0)?)?;
    Some(("yyyy-mm-dd", serial))
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> Option<f64> {
    let duration = *dt - excel_epoch()?;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86_400) as f64;

    Some(days + secs / SECONDS_PER_DAY)
}

/// Excel serial → `YYYY-MM-DD HH:MM:SS`, the text form a date cell takes
/// once coerced to a string.
pub(crate) fn excel_serial_to_text(serial: f64) -> Option<String> {
    if !serial.is_finite() {
        return None;
    }

    let millis = (serial * SECONDS_PER_DAY * 1000.0).round() as i64;
    let dt = excel_epoch()?.checked_add_signed(Duration::try_milliseconds(millis)?)?;

    Some(dt.format(TIMESTAMP_FORMAT).to_string())
}
