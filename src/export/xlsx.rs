// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::SUMMARY_HEADERS;
use crate::export::notify_export_success;
use crate::models::summary::SummaryRow;
use crate::ui::messages::info;
use crate::utils::excel::{date_to_serial, time_to_serial};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const BAND1: Color = Color::RGB(0xEAF3FB);
const BAND2: Color = Color::RGB(0xFFFFFF);

/// Export XLSX: single sheet, styled header, banded rows, auto column
/// widths. Dates and times go in as real Excel serials so the cells sort
/// and filter properly in a spreadsheet application.
pub(crate) fn export_xlsx(rows: &[SummaryRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in SUMMARY_HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = SUMMARY_HEADERS
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();

    // ---------------------------
    // Data rows
    // ---------------------------
    for (row_index, r) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { BAND1 } else { BAND2 };

        write_text(worksheet, row, 0, &r.name, band)?;
        write_serial(worksheet, row, 1, date_to_serial(r.date), "yyyy-mm-dd", band)?;
        write_serial(worksheet, row, 2, time_to_serial(r.in_time), "hh:mm:ss", band)?;
        write_serial(worksheet, row, 3, time_to_serial(r.out_time), "hh:mm:ss", band)?;
        write_number(worksheet, row, 4, r.total_hours, band)?;
        write_text(worksheet, row, 5, r.late_entry_label(), band)?;
        write_text(worksheet, row, 6, r.early_exit_label(), band)?;

        // Track the widest cell per column for auto-sizing
        let display = crate::export::summary_to_row(r);
        for (col, value) in display.iter().enumerate() {
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path_str(path)?).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn band_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_text(ws: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    ws.write_with_format(row, col, s, &band_format(bg))
        .map_err(to_export_error)?;
    Ok(())
}

fn write_serial(
    ws: &mut Worksheet,
    row: u32,
    col: u16,
    serial: f64,
    num_format: &str,
    bg: Color,
) -> AppResult<()> {
    let fmt = band_format(bg).set_num_format(num_format);
    ws.write_with_format(row, col, serial, &fmt)
        .map_err(to_export_error)?;
    Ok(())
}

fn write_number(ws: &mut Worksheet, row: u32, col: u16, n: f64, bg: Color) -> AppResult<()> {
    let fmt = band_format(bg)
        .set_num_format("0.00")
        .set_align(FormatAlign::Right);
    ws.write_with_format(row, col, n, &fmt)
        .map_err(to_export_error)?;
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export("invalid output path".to_string()))
}
