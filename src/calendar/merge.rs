//! The merged calendar document: one text file, append-only.

use crate::calendar::event::CalendarEvent;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;

pub const PREAMBLE: &str = "BEGIN:VCALENDAR\n\
                            VERSION:2.0\n\
                            PRODID:-//worklog//Work Log//EN\n";
pub const TERMINATOR: &str = "END:VCALENDAR\n";

/// High-level logic for appending events to the calendar document.
pub struct MergeLogic;

impl MergeLogic {
    /// Append one event to the document, creating it on first use.
    ///
    /// An existing document is read whole, the event is inserted
    /// immediately before the terminator and the full text is written
    /// back in a single rewrite.
    pub fn append(path: &Path, event: &CalendarEvent) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let content = if path.exists() {
            splice(&fs::read_to_string(path)?, event)?
        } else {
            format!("{PREAMBLE}{}{TERMINATOR}", event.to_ics())
        };

        fs::write(path, content)?;
        Ok(())
    }
}

/// Insert the event right before the terminator, leaving every prior byte
/// unchanged.
fn splice(content: &str, event: &CalendarEvent) -> AppResult<String> {
    let at = content.rfind("END:VCALENDAR").ok_or_else(|| {
        AppError::Calendar("document has no END:VCALENDAR terminator".to_string())
    })?;

    let mut out = String::with_capacity(content.len() + 160);
    out.push_str(&content[..at]);
    out.push_str(&event.to_ics());
    out.push_str(&content[at..]);
    Ok(out)
}
