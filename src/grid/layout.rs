//! Fixed geometry of a week sheet.
//!
//! A sheet holds one calendar week: a header row of dates, a header row of
//! weekday names, then 96 quarter-hour rows. Column A carries the slot
//! labels, columns B..H the seven days Monday..Sunday.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};

pub const SLOTS_PER_DAY: usize = 96;
pub const DAYS_PER_WEEK: usize = 7;

/// Rows above the time grid: dates, then weekday names.
pub const HEADER_ROWS: u32 = 2;

/// Width applied to the seven day columns.
pub const DAY_COLUMN_WIDTH: f64 = 35.0;

/// Sheet titles look like "01 January 24" (the Monday of the week).
pub const SHEET_TITLE_FORMAT: &str = "%d %B %y";

/// Dates in the first header row look like "01.01.24".
pub const HEADER_DATE_FORMAT: &str = "%d.%m.%y";

pub const WEEKDAY_NAMES: [&str; DAYS_PER_WEEK] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Quarter-hour slot index of a time of day (0..=95).
pub fn slot_of(t: NaiveTime) -> usize {
    (t.hour() * 4 + t.minute() / 15) as usize
}

/// Label of a slot row, e.g. slot 37 -> "09-15".
pub fn slot_label(slot: usize) -> String {
    format!("{:02}-{:02}", slot / 4, (slot % 4) * 15)
}

/// The Monday on or before the given date.
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Day column index within the week (Monday = 0).
pub fn day_of_week(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

pub fn sheet_title(week_start: NaiveDate) -> String {
    week_start.format(SHEET_TITLE_FORMAT).to_string()
}

pub fn parse_sheet_title(name: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(name, SHEET_TITLE_FORMAT).ok()
}

/// 0-based worksheet row of a slot.
pub fn grid_row(slot: usize) -> u32 {
    HEADER_ROWS + slot as u32
}

/// 0-based worksheet column of a day (the label column comes first).
pub fn grid_col(day: usize) -> u16 {
    1 + day as u16
}
