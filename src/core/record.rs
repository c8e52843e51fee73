//! The one record-and-exit cycle: backup, mark the grid, rewrite the
//! workbook, append the calendar event.

use crate::calendar::{CalendarEvent, MergeLogic};
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::grid::{LogBook, store};
use crate::models::WorkInterval;
use crate::ui::messages::{info, success, warning};
use chrono::Utc;

pub struct RecordLogic;

impl RecordLogic {
    pub fn apply(cfg: &Config, interval: &WorkInterval) -> AppResult<()> {
        info(format!(
            "Recording time: start={}, end={}",
            interval.start.format("%Y-%m-%d %H:%M"),
            interval.end.format("%Y-%m-%d %H:%M"),
        ));

        let workbook = cfg.workbook_path();

        // A missing workbook is a first run, not an error. An existing one
        // is copied aside before the rewrite.
        let mut book = if workbook.exists() {
            BackupLogic::backup(&workbook, &cfg.backup_dir_path(), cfg.compress_backups)?;
            store::load(&workbook)?
        } else {
            info(format!(
                "No work log found, starting a fresh one: {}",
                workbook.display()
            ));
            LogBook::new()
        };

        let summary = book.record(interval);
        book.sort_weeks();
        store::save(&book, &workbook)?;

        if summary.overridden {
            warning("A previous entry was overwritten (flagged in the sheet)");
        }
        success(format!(
            "Grid updated: {} cell(s) across {} sheet(s) in {}",
            summary.cells_marked,
            summary.sheets_touched,
            workbook.display(),
        ));

        let event = CalendarEvent::new(
            interval.job_title.clone(),
            interval.start.with_timezone(&Utc),
            interval.end.with_timezone(&Utc),
            &cfg.uid_domain,
        );
        let calendar = cfg.calendar_path();
        MergeLogic::append(&calendar, &event)?;
        success(format!("ICS entry added: {}", calendar.display()));

        Ok(())
    }
}
