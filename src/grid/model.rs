//! In-memory model of the work log workbook.
//!
//! Week sheets keep their week start as a structured date; the formatted
//! sheet title is derived from it, never parsed back for identity or
//! ordering once the sheet is in memory.

use crate::grid::layout::{self, DAYS_PER_WEEK, SLOTS_PER_DAY};
use crate::models::WorkInterval;
use chrono::NaiveDate;

pub const WORKING: &str = "Working";
pub const DONE: &str = "Done";

/// Visual flag of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fill {
    #[default]
    None,
    /// The slot held a value and was overwritten (yellow).
    Override,
    /// In-progress / done marker (green).
    Active,
}

#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub value: String,
    pub fill: Fill,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// One calendar week of 96 quarter-hour slots across 7 days.
#[derive(Debug, Clone)]
pub struct WeekSheet {
    pub week_start: NaiveDate,
    cells: Vec<Cell>,
}

impl WeekSheet {
    pub fn new(week_start: NaiveDate) -> Self {
        Self {
            week_start,
            cells: vec![Cell::default(); SLOTS_PER_DAY * DAYS_PER_WEEK],
        }
    }

    pub fn title(&self) -> String {
        layout::sheet_title(self.week_start)
    }

    fn idx(slot: usize, day: usize) -> usize {
        debug_assert!(slot < SLOTS_PER_DAY && day < DAYS_PER_WEEK);
        slot * DAYS_PER_WEEK + day
    }

    pub fn cell(&self, slot: usize, day: usize) -> &Cell {
        &self.cells[Self::idx(slot, day)]
    }

    pub fn cell_mut(&mut self, slot: usize, day: usize) -> &mut Cell {
        &mut self.cells[Self::idx(slot, day)]
    }
}

/// A sheet whose title does not follow the week-title convention. Its raw
/// values are carried through every rewrite, after all week sheets.
#[derive(Debug, Clone)]
pub struct ExtraSheet {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

/// The whole workbook: week sheets plus any foreign sheets.
#[derive(Debug, Default)]
pub struct LogBook {
    pub weeks: Vec<WeekSheet>,
    pub extras: Vec<ExtraSheet>,
}

/// What a single record pass did, for logging and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkSummary {
    pub sheets_touched: usize,
    pub cells_marked: usize,
    pub overridden: bool,
}

impl LogBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn week(&self, week_start: NaiveDate) -> Option<&WeekSheet> {
        self.weeks.iter().find(|w| w.week_start == week_start)
    }

    /// Locate the sheet for a week, creating it on first use.
    pub fn week_mut(&mut self, week_start: NaiveDate) -> &mut WeekSheet {
        if let Some(i) = self.weeks.iter().position(|w| w.week_start == week_start) {
            &mut self.weeks[i]
        } else {
            self.weeks.push(WeekSheet::new(week_start));
            self.weeks.last_mut().unwrap()
        }
    }

    /// Mark an interval onto the grid.
    ///
    /// The first covered slot gets the interval label (flagging an override
    /// when the cell already held a value); the last covered slot gets
    /// "Done"; everything in between gets "Working". A single-slot interval
    /// touches only the label cell. Segments crossing midnight land in
    /// their own day columns and, across Sunday, their own week sheets.
    pub fn record(&mut self, interval: &WorkInterval) -> MarkSummary {
        let segments = interval.day_segments();
        let last = segments.len() - 1;

        let mut summary = MarkSummary::default();
        let mut touched: Vec<NaiveDate> = Vec::new();

        for (i, seg) in segments.iter().enumerate() {
            let week_start = layout::week_start_of(seg.date);
            if !touched.contains(&week_start) {
                touched.push(week_start);
            }

            let day = layout::day_of_week(seg.date);
            let sheet = self.week_mut(week_start);

            for slot in seg.start_slot..=seg.end_slot {
                let cell = sheet.cell_mut(slot, day);
                if i == 0 && slot == seg.start_slot {
                    if !cell.is_empty() {
                        cell.fill = Fill::Override;
                        summary.overridden = true;
                    }
                    cell.value = interval.label();
                } else if i == last && slot == seg.end_slot {
                    cell.value = DONE.to_string();
                    cell.fill = Fill::Active;
                } else {
                    cell.value = WORKING.to_string();
                    cell.fill = Fill::Active;
                }
                summary.cells_marked += 1;
            }
        }

        summary.sheets_touched = touched.len();
        summary
    }

    /// Order week sheets newest-first; extra sheets keep their relative
    /// order after all the weeks.
    pub fn sort_weeks(&mut self) {
        self.weeks.sort_by(|a, b| b.week_start.cmp(&a.week_start));
    }
}
