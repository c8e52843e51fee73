mod common;
use common::{setup_workdir, wl};

use predicates::prelude::*;

#[test]
fn test_init_in_test_mode_touches_nothing() {
    let dir = setup_workdir("cli_init");

    wl().current_dir(&dir)
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("worklog initialization completed!"));

    assert!(!dir.join("work_log.xlsx").exists());
}

#[test]
fn test_malformed_timestamp_aborts_the_run() {
    let dir = setup_workdir("cli_bad_timestamp");

    wl().current_dir(&dir)
        .args([
            "--workbook",
            "work_log.xlsx",
            "record",
            "--job",
            "Design",
            "--tasks",
            "2",
            "--from",
            "03/01/2024 9am",
            "--to",
            "2024-01-03 09:45",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timestamp format"));

    // nothing was written
    assert!(!dir.join("work_log.xlsx").exists());
}

#[test]
fn test_reversed_interval_is_rejected() {
    let dir = setup_workdir("cli_reversed");

    wl().current_dir(&dir)
        .args([
            "--workbook",
            "work_log.xlsx",
            "record",
            "--job",
            "Design",
            "--tasks",
            "2",
            "--from",
            "2024-01-03 10:00",
            "--to",
            "2024-01-03 09:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid interval"));

    assert!(!dir.join("work_log.xlsx").exists());
}

#[test]
fn test_config_print_shows_effective_settings() {
    let dir = setup_workdir("cli_config_print");

    wl().current_dir(&dir)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("workbook:"))
        .stdout(predicate::str::contains("utc_offset:"));
}

#[test]
fn test_record_requires_all_arguments() {
    let dir = setup_workdir("cli_missing_args");

    wl().current_dir(&dir)
        .args(["record", "--job", "Design"])
        .assert()
        .failure();
}
