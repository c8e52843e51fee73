#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wl() -> Command {
    cargo_bin_cmd!("worklog")
}

/// Create a clean per-test working directory inside the system temp dir
pub fn setup_workdir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("{name}_worklog"));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Record one interval via the CLI, artifacts relative to `dir`
pub fn record(dir: &PathBuf, job: &str, tasks: &str, from: &str, to: &str) {
    wl().current_dir(dir)
        .args([
            "--workbook",
            "work_log.xlsx",
            "--calendar",
            "merged_tasks.ics",
            "record",
            "--job",
            job,
            "--tasks",
            tasks,
            "--from",
            from,
            "--to",
            to,
        ])
        .assert()
        .success();
}
