//! Workbook persistence: whole-file read with calamine, whole-file rewrite
//! with rust_xlsxwriter.
//!
//! The xlsx file is the store. Every record cycle loads the full workbook,
//! mutates the in-memory model and writes everything back. Cell values
//! survive the round trip; fills are re-derived from the "Working"/"Done"
//! markers (an override highlight from a previous run is not recoverable
//! from values and fades at the next rewrite).

use crate::errors::{AppError, AppResult};
use crate::grid::layout::{self, DAY_COLUMN_WIDTH, DAYS_PER_WEEK, SLOTS_PER_DAY};
use crate::grid::model::{Cell, DONE, ExtraSheet, Fill, LogBook, WORKING, WeekSheet};
use calamine::{Data, Reader, Xlsx, open_workbook};
use chrono::Duration;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::fmt;
use std::path::Path;

fn to_workbook_error<E: fmt::Display>(e: E) -> AppError {
    AppError::Workbook(e.to_string())
}

fn data_to_string(d: &Data) -> String {
    match d {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Read the persisted workbook back into a LogBook.
///
/// Sheets whose title parses as a week title become week sheets; anything
/// else is kept verbatim as an extra sheet.
pub fn load(path: &Path) -> AppResult<LogBook> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| AppError::Workbook(format!("{}: {e}", path.display())))?;

    let mut book = LogBook::new();

    for name in workbook.sheet_names().to_owned() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(to_workbook_error)?;

        match layout::parse_sheet_title(&name) {
            Some(week_start) => {
                let sheet = book.week_mut(week_start);
                for slot in 0..SLOTS_PER_DAY {
                    for day in 0..DAYS_PER_WEEK {
                        let pos = (layout::grid_row(slot), layout::grid_col(day) as u32);
                        let Some(value) = range.get_value(pos).map(data_to_string) else {
                            continue;
                        };
                        if value.is_empty() {
                            continue;
                        }
                        let fill = if value == WORKING || value == DONE {
                            Fill::Active
                        } else {
                            Fill::None
                        };
                        *sheet.cell_mut(slot, day) = Cell { value, fill };
                    }
                }
            }
            None => {
                let rows = range
                    .rows()
                    .map(|row| row.iter().map(data_to_string).collect())
                    .collect();
                book.extras.push(ExtraSheet { name, rows });
            }
        }
    }

    Ok(book)
}

/// Rewrite the whole workbook: week sheets in their current order, then the
/// extra sheets.
pub fn save(book: &LogBook, path: &Path) -> AppResult<()> {
    let mut workbook = Workbook::new();

    let plain = Format::new().set_border(FormatBorder::Thin);
    let active = Format::new()
        .set_background_color(Color::RGB(0x00FF00))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);
    let overridden = Format::new()
        .set_background_color(Color::RGB(0xFFFF00))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for week in &book.weeks {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(week.title()).map_err(to_workbook_error)?;
        write_week(worksheet, week, &plain, &active, &overridden)?;
    }

    for extra in &book.extras {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(extra.name.as_str())
            .map_err(to_workbook_error)?;
        for (r, row) in extra.rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    worksheet
                        .write(r as u32, c as u16, value.as_str())
                        .map_err(to_workbook_error)?;
                }
            }
        }
    }

    workbook.save(path).map_err(to_workbook_error)?;
    Ok(())
}

fn write_week(
    worksheet: &mut Worksheet,
    week: &WeekSheet,
    plain: &Format,
    active: &Format,
    overridden: &Format,
) -> AppResult<()> {
    worksheet
        .write_with_format(0, 0, "Date", plain)
        .map_err(to_workbook_error)?;
    worksheet
        .write_with_format(1, 0, "Day", plain)
        .map_err(to_workbook_error)?;

    for day in 0..DAYS_PER_WEEK {
        let col = layout::grid_col(day);
        let date = week.week_start + Duration::days(day as i64);
        worksheet
            .write_with_format(0, col, date.format(layout::HEADER_DATE_FORMAT).to_string(), plain)
            .map_err(to_workbook_error)?;
        worksheet
            .write_with_format(1, col, layout::WEEKDAY_NAMES[day], plain)
            .map_err(to_workbook_error)?;
        worksheet
            .set_column_width(col, DAY_COLUMN_WIDTH)
            .map_err(to_workbook_error)?;
    }

    for slot in 0..SLOTS_PER_DAY {
        let row = layout::grid_row(slot);
        worksheet
            .write_with_format(row, 0, layout::slot_label(slot), plain)
            .map_err(to_workbook_error)?;

        for day in 0..DAYS_PER_WEEK {
            let col = layout::grid_col(day);
            let cell = week.cell(slot, day);
            if cell.is_empty() {
                worksheet
                    .write_blank(row, col, plain)
                    .map_err(to_workbook_error)?;
            } else {
                let format = match cell.fill {
                    Fill::None => plain,
                    Fill::Active => active,
                    Fill::Override => overridden,
                };
                worksheet
                    .write_with_format(row, col, cell.value.as_str(), format)
                    .map_err(to_workbook_error)?;
            }
        }
    }

    Ok(())
}
