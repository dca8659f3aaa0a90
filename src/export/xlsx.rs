//! Spreadsheet export
//!
//! Writes a result set to a single-sheet Excel workbook: a bold header row of
//! column names followed by one row per record.

use std::borrow::Cow;
use std::path::Path;

use chrono::{Datelike, NaiveDateTime, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{ExcelDateTime, Format, FormatBorder, Workbook};

use crate::error::{PortalError, PortalResult};
use crate::models::{ResultSet, Value};

/// MIME type of the downloaded workbook
pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Number format applied to date cells
const DATE_TIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Longest string Excel accepts in one cell
const MAX_CELL_CHARS: usize = 32_767;

/// Serialize a result set to workbook bytes
pub fn export_results_xlsx(results: &ResultSet, sheet_name: &str) -> PortalResult<Vec<u8>> {
    let header_format = Format::new().set_bold().set_border(FormatBorder::Thin);
    let date_format = Format::new().set_num_format(DATE_TIME_FORMAT);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (index, name) in results.columns().iter().enumerate() {
        worksheet.write_string_with_format(0, column_number(index)?, name, &header_format)?;
    }

    for (index, record) in results.rows().iter().enumerate() {
        let row = row_number(index + 1)?;
        for (col, value) in record.values().iter().enumerate() {
            let col = column_number(col)?;
            match value {
                Value::Null => {}
                Value::Text(text) => {
                    worksheet.write_string(row, col, cell_text(text, row, col))?;
                }
                Value::Number(number) => {
                    let number = number.to_f64().ok_or_else(|| {
                        PortalError::Export(format!("Amount {} is out of range", number))
                    })?;
                    worksheet.write_number(row, col, number)?;
                }
                Value::DateTime(dt) => {
                    worksheet.write_datetime_with_format(
                        row,
                        col,
                        &excel_date_time(dt)?,
                        &date_format,
                    )?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Export a result set to a workbook file
pub fn write_results_xlsx(results: &ResultSet, sheet_name: &str, path: &Path) -> PortalResult<()> {
    let bytes = export_results_xlsx(results, sheet_name)?;
    std::fs::write(path, bytes).map_err(|e| {
        PortalError::Export(format!("Failed to write {}: {}", path.display(), e))
    })?;
    log::info!("Exported {} row(s) to {}", results.len(), path.display());
    Ok(())
}

/// Text of a cell, cut to what Excel can hold
fn cell_text(text: &str, row: u32, col: u16) -> Cow<'_, str> {
    if text.chars().count() <= MAX_CELL_CHARS {
        return Cow::Borrowed(text);
    }
    log::warn!(
        "Cell at row {} column {} truncated to {} characters",
        row,
        col,
        MAX_CELL_CHARS
    );
    Cow::Owned(text.chars().take(MAX_CELL_CHARS).collect())
}

fn row_number(index: usize) -> PortalResult<u32> {
    u32::try_from(index)
        .map_err(|_| PortalError::Export("Too many rows for a worksheet".into()))
}

fn column_number(index: usize) -> PortalResult<u16> {
    u16::try_from(index)
        .map_err(|_| PortalError::Export("Too many columns for a worksheet".into()))
}

fn excel_date_time(dt: &NaiveDateTime) -> PortalResult<ExcelDateTime> {
    let year = u16::try_from(dt.year())
        .map_err(|_| PortalError::Export(format!("Date {} is out of range", dt)))?;

    let seconds = f64::from(dt.second()) + f64::from(dt.nanosecond()) / 1e9;
    let date = ExcelDateTime::from_ymd(year, dt.month() as u8, dt.day() as u8)?;
    Ok(date.and_hms(dt.hour() as u16, dt.minute() as u8, seconds)?)
}
