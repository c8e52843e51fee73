//! Interactive tracking loop: one successful record per run.

use crate::config::Config;
use crate::core::record::RecordLogic;
use crate::errors::{AppError, AppResult};
use crate::models::WorkInterval;
use crate::ui::messages::{info, success, warning};
use crate::utils::time::{now_in, parse_local_datetime};
use chrono::{DateTime, FixedOffset};
use inquire::{CustomType, InquireError, Text};

fn prompt_err(e: InquireError) -> AppError {
    AppError::Prompt(e.to_string())
}

fn ask_job_and_tasks() -> AppResult<(String, u32)> {
    let job = Text::new("Job title:").prompt().map_err(prompt_err)?;
    let tasks = CustomType::<u32>::new("Number of tasks completed:")
        .with_error_message("Please enter a whole number")
        .prompt()
        .map_err(prompt_err)?;
    Ok((job.trim().to_string(), tasks))
}

/// Handle the `track` command
pub fn handle(cfg: &Config) -> AppResult<()> {
    let tz = cfg.offset()?;
    let mut started: Option<DateTime<FixedOffset>> = None;

    loop {
        let command = Text::new("Command [start/stop/manual]:")
            .prompt()
            .map_err(prompt_err)?;

        match command.trim().to_lowercase().as_str() {
            "start" => {
                let now = now_in(tz);
                info(format!("Started tracking at {}", now.format("%Y-%m-%d %H:%M")));
                started = Some(now);
            }
            "stop" => {
                let Some(start) = started else {
                    warning("No session started yet, use 'start' first");
                    continue;
                };
                let end = now_in(tz);
                info(format!("Stopped tracking at {}", end.format("%Y-%m-%d %H:%M")));

                let (job, tasks) = ask_job_and_tasks()?;
                let interval = WorkInterval::new(start, end, job, tasks)?;
                RecordLogic::apply(cfg, &interval)?;
                success("Work time and tasks recorded.");
                break;
            }
            "manual" => {
                // Malformed timestamps abort the run with a parse error.
                let from = Text::new("Start time (YYYY-MM-DD HH:MM):")
                    .prompt()
                    .map_err(prompt_err)?;
                let to = Text::new("End time (YYYY-MM-DD HH:MM):")
                    .prompt()
                    .map_err(prompt_err)?;
                let start = parse_local_datetime(&from, tz)?;
                let end = parse_local_datetime(&to, tz)?;

                let (job, tasks) = ask_job_and_tasks()?;
                let interval = WorkInterval::new(start, end, job, tasks)?;
                RecordLogic::apply(cfg, &interval)?;
                success("Work time and tasks recorded manually.");
                break;
            }
            other => {
                warning(format!(
                    "Invalid command '{other}'. Use 'start', 'stop' or 'manual'."
                ));
            }
        }
    }

    Ok(())
}
