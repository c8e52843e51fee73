mod common;
use common::{record, setup_workdir};

use std::fs;

#[test]
fn test_calendar_document_grows_in_insertion_order() {
    let dir = setup_workdir("calendar_order");
    record(&dir, "Design", "2", "2024-01-03 09:00", "2024-01-03 09:45");
    record(&dir, "Review", "1", "2024-01-03 10:00", "2024-01-03 10:30");
    record(&dir, "Ops", "4", "2024-01-04 08:00", "2024-01-04 09:00");

    let content = fs::read_to_string(dir.join("merged_tasks.ics")).expect("read calendar");

    assert!(content.starts_with("BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:"));
    assert!(content.ends_with("END:VCALENDAR\n"));
    assert_eq!(content.matches("BEGIN:VCALENDAR").count(), 1);
    assert_eq!(content.matches("BEGIN:VEVENT").count(), 3);
    assert_eq!(content.matches("END:VEVENT").count(), 3);

    let design = content.find("SUMMARY:Design").unwrap();
    let review = content.find("SUMMARY:Review").unwrap();
    let ops = content.find("SUMMARY:Ops").unwrap();
    assert!(design < review && review < ops);
}

#[test]
fn test_event_times_are_converted_to_utc() {
    let dir = setup_workdir("calendar_utc");
    record(&dir, "Design", "2", "2024-01-03 09:00", "2024-01-03 09:45");

    let content = fs::read_to_string(dir.join("merged_tasks.ics")).unwrap();

    // 09:00 at the default -08:00 offset is 17:00 UTC
    assert!(content.contains("DTSTART:20240103T170000Z"));
    assert!(content.contains("DTEND:20240103T174500Z"));
}

#[test]
fn test_identical_records_produce_distinct_events() {
    let dir = setup_workdir("calendar_dup");
    record(&dir, "Design", "2", "2024-01-03 09:00", "2024-01-03 09:45");
    record(&dir, "Design", "2", "2024-01-03 09:00", "2024-01-03 09:45");

    let content = fs::read_to_string(dir.join("merged_tasks.ics")).unwrap();
    assert_eq!(content.matches("BEGIN:VEVENT").count(), 2);

    let uids: Vec<&str> = content
        .lines()
        .filter(|l| l.starts_with("UID:"))
        .collect();
    assert_eq!(uids.len(), 2);
    assert_ne!(uids[0], uids[1]);
}
