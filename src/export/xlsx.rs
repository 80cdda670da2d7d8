// src/export/xlsx.rs

use crate::db::StringingRecord;
use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{excel_serial_to_text, storage_date_to_excel};
use crate::export::model::{DATE_COLUMN, REQUIRED_COLUMNS, RawTable, record_to_row};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use calamine::{Data, Reader, open_workbook_auto};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const BAND_1: Color = Color::RGB(0xEAF3FB);
const BAND_2: Color = Color::RGB(0xFFFFFF);

/// Export XLSX with styling and automatic column widths.
pub(crate) fn export_xlsx(records: &[StringingRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Records").map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    write_header(worksheet, &REQUIRED_COLUMNS)?;

    let mut col_widths: Vec<usize> = REQUIRED_COLUMNS
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, record) in records.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = band(row_index);

        for (col, value) in record_to_row(record).iter().enumerate() {
            let v = value.as_str();

            if col == DATE_COLUMN {
                write_date_cell(worksheet, row, col as u16, v, band_color)?;
            } else {
                write_cell(worksheet, row, col as u16, v, band_color)?;
            }

            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(v));
        }
    }

    set_widths(worksheet, &col_widths)?;

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Read the first worksheet of an Excel workbook.
pub(crate) fn read_xlsx(path: &Path) -> AppResult<RawTable> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| AppError::Import(format!("cannot open {}: {e}", path.display())))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::InvalidFile("the workbook has no worksheet".to_string()))?
        .map_err(|e| AppError::Import(format!("cannot read worksheet: {e}")))?;

    let mut rows = range.rows();

    let headers = match rows.next() {
        Some(first) => first
            .iter()
            .map(|c| cell_to_text(c).unwrap_or_default().trim().to_string())
            .collect(),
        None => Vec::new(),
    };

    let rows = rows
        .map(|r| r.iter().map(cell_to_text).collect::<Vec<_>>())
        .filter(|r| r.iter().any(Option::is_some))
        .collect();

    Ok(RawTable { headers, rows })
}

/// Cell → text. Empty and error cells are missing values.
fn cell_to_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(format_number(*f)),
        Data::Bool(b) => Some(if *b { "True" } else { "False" }.to_string()),
        Data::DateTime(dt) => excel_serial_to_text(dt.as_f64()),
        Data::DateTimeIso(s) => Some(s.replacen('T', " ", 1)),
        Data::DurationIso(s) => Some(s.clone()),
    }
}

/// Whole numbers print without a fractional part (`55.0` → `55`).
fn format_number(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

pub(crate) fn write_header(worksheet: &mut Worksheet, headers: &[&str]) -> AppResult<()> {
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;
    Ok(())
}

pub(crate) fn set_widths(worksheet: &mut Worksheet, widths: &[usize]) -> AppResult<()> {
    for (c, w) in widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }
    Ok(())
}

fn band_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

/// Storage dates become real Excel dates; anything else stays text.
fn write_date_cell(worksheet: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    if let Some((num_format, serial)) = storage_date_to_excel(s) {
        let fmt = band_format(bg).set_num_format(num_format);
        worksheet
            .write_with_format(row, col, serial, &fmt)
            .map_err(to_export_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col, s, &band_format(bg))
        .map_err(to_export_error)?;
    Ok(())
}

/// Numbers are written as numbers only when they print back identically,
/// so `055` or `NaN` stay text.
pub(crate) fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    if let Ok(num) = s.parse::<f64>()
        && num.is_finite()
        && format_number(num) == s
    {
        let fmt = band_format(bg).set_align(FormatAlign::Right);
        worksheet
            .write_with_format(row, col, num, &fmt)
            .map_err(to_export_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col, s, &band_format(bg))
        .map_err(to_export_error)?;
    Ok(())
}

pub(crate) fn band(row_index: usize) -> Color {
    if row_index % 2 == 0 { BAND_1 } else { BAND_2 }
}

pub(crate) fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
