//! Calendar event blocks (VEVENT).

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// RFC 5545 UTC timestamp format, e.g. "20240103T170000Z".
pub const UTC_STAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// One self-contained VEVENT record. All timestamps are UTC.
#[derive(Debug, Clone)]
pub struct CalendarEvent {
    pub uid: String,
    pub stamp: DateTime<Utc>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub summary: String,
}

impl CalendarEvent {
    /// Build an event stamped "now" with a freshly generated UID.
    /// Two calls with identical arguments yield two distinct events.
    pub fn new(
        summary: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        uid_domain: &str,
    ) -> Self {
        Self {
            uid: format!("{}@{}", Uuid::new_v4(), uid_domain),
            stamp: Utc::now(),
            start,
            end,
            summary: summary.into(),
        }
    }

    /// Render the VEVENT block, trailing newline included.
    pub fn to_ics(&self) -> String {
        format!(
            "BEGIN:VEVENT\n\
             UID:{}\n\
             DTSTAMP:{}\n\
             DTSTART:{}\n\
             DTEND:{}\n\
             SUMMARY:{}\n\
             END:VEVENT\n",
            self.uid,
            self.stamp.format(UTC_STAMP_FORMAT),
            self.start.format(UTC_STAMP_FORMAT),
            self.end.format(UTC_STAMP_FORMAT),
            self.summary,
        )
    }
}
