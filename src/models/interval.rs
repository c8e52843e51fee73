//! One tracked work session: a start/end pair plus job metadata.

use crate::errors::{AppError, AppResult};
use crate::grid::layout;
use chrono::{DateTime, Duration, FixedOffset, NaiveDate};

/// A recorded work interval. Both timestamps carry the configured fixed
/// offset; `end >= start` is enforced at construction.
#[derive(Debug, Clone)]
pub struct WorkInterval {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub job_title: String,
    pub task_count: u32,
}

/// The slice of an interval that falls on a single day: an inclusive range
/// of quarter-hour slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySegment {
    pub date: NaiveDate,
    pub start_slot: usize,
    pub end_slot: usize,
}

impl WorkInterval {
    pub fn new(
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
        job_title: impl Into<String>,
        task_count: u32,
    ) -> AppResult<Self> {
        if end < start {
            return Err(AppError::InvalidInterval(format!(
                "end {} is before start {}",
                end.format("%Y-%m-%d %H:%M"),
                start.format("%Y-%m-%d %H:%M"),
            )));
        }
        Ok(Self {
            start,
            end,
            job_title: job_title.into(),
            task_count,
        })
    }

    /// The string written into the start cell of the grid.
    pub fn label(&self) -> String {
        format!("{}, {}", self.job_title, self.task_count)
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Split the interval at local midnight into per-day slot ranges.
    /// A same-day interval yields exactly one segment.
    pub fn day_segments(&self) -> Vec<DaySegment> {
        let mut out = Vec::new();
        let end_date = self.end.date_naive();

        let mut date = self.start.date_naive();
        let mut start_slot = layout::slot_of(self.start.time());

        while date < end_date {
            out.push(DaySegment {
                date,
                start_slot,
                end_slot: layout::SLOTS_PER_DAY - 1,
            });
            date = date.succ_opt().unwrap();
            start_slot = 0;
        }

        out.push(DaySegment {
            date,
            start_slot,
            end_slot: layout::slot_of(self.end.time()),
        });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn tz() -> FixedOffset {
        FixedOffset::west_opt(8 * 3600).unwrap()
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<FixedOffset> {
        tz().with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn label_joins_job_and_task_count() {
        let iv = WorkInterval::new(at(2024, 1, 3, 9, 0), at(2024, 1, 3, 9, 45), "Design", 2).unwrap();
        assert_eq!(iv.label(), "Design, 2");
    }

    #[test]
    fn rejects_reversed_interval() {
        let res = WorkInterval::new(at(2024, 1, 3, 10, 0), at(2024, 1, 3, 9, 0), "Design", 2);
        assert!(matches!(res, Err(AppError::InvalidInterval(_))));
    }

    #[test]
    fn same_day_interval_is_one_segment() {
        let iv = WorkInterval::new(at(2024, 1, 3, 9, 0), at(2024, 1, 3, 9, 45), "Design", 2).unwrap();
        assert_eq!(
            iv.day_segments(),
            vec![DaySegment {
                date: date(2024, 1, 3),
                start_slot: 36,
                end_slot: 39,
            }]
        );
    }

    #[test]
    fn zero_length_interval_is_a_single_slot() {
        let iv = WorkInterval::new(at(2024, 1, 3, 9, 0), at(2024, 1, 3, 9, 0), "Design", 0).unwrap();
        let segs = iv.day_segments();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].start_slot, segs[0].end_slot);
    }

    #[test]
    fn midnight_crossing_splits_per_day() {
        let iv = WorkInterval::new(at(2024, 1, 3, 23, 30), at(2024, 1, 4, 0, 30), "Ops", 1).unwrap();
        assert_eq!(
            iv.day_segments(),
            vec![
                DaySegment {
                    date: date(2024, 1, 3),
                    start_slot: 94,
                    end_slot: 95,
                },
                DaySegment {
                    date: date(2024, 1, 4),
                    start_slot: 0,
                    end_slot: 2,
                },
            ]
        );
    }

    #[test]
    fn week_boundary_splits_into_both_weeks() {
        // Sunday 2024-01-07 -> Monday 2024-01-08
        let iv = WorkInterval::new(at(2024, 1, 7, 23, 0), at(2024, 1, 8, 1, 0), "Ops", 1).unwrap();
        let segs = iv.day_segments();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].date, date(2024, 1, 7));
        assert_eq!(segs[1].date, date(2024, 1, 8));
        assert_eq!(layout::week_start_of(segs[0].date), date(2024, 1, 1));
        assert_eq!(layout::week_start_of(segs[1].date), date(2024, 1, 8));
    }

    #[test]
    fn exact_midnight_end_lands_on_next_day_slot_zero() {
        let iv = WorkInterval::new(at(2024, 1, 3, 22, 0), at(2024, 1, 4, 0, 0), "Ops", 1).unwrap();
        let segs = iv.day_segments();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].start_slot, 88);
        assert_eq!(segs[0].end_slot, 95);
        assert_eq!(segs[1].start_slot, 0);
        assert_eq!(segs[1].end_slot, 0);
    }
}
