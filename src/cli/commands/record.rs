use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::record::RecordLogic;
use crate::errors::AppResult;
use crate::models::WorkInterval;
use crate::ui::messages::success;
use crate::utils::time::parse_local_datetime;

/// Record a work interval from command-line arguments, no prompts.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Record {
        job,
        tasks,
        from,
        to,
    } = cmd
    {
        let tz = cfg.offset()?;

        // Malformed timestamps abort the run with a parse error.
        let start = parse_local_datetime(from, tz)?;
        let end = parse_local_datetime(to, tz)?;

        let interval = WorkInterval::new(start, end, job.clone(), *tasks)?;
        RecordLogic::apply(cfg, &interval)?;
        success("Work time and tasks recorded.");
    }

    Ok(())
}
