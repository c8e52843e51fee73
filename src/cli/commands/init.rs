use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This creates:
///  - the config directory (if missing)
///  - the configuration file with defaults
///
/// The workbook and the calendar document are NOT created here: a missing
/// file is "first run" and gets created lazily by the first record.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.test)?;
    let cfg = Config::load()?;

    println!("⚙️  Initializing worklog…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("📊 Workbook    : {}", cfg.workbook);
    println!("📅 Calendar    : {}", cfg.calendar);
    println!("🕑 UTC offset  : {}", cfg.utc_offset);

    success("worklog initialization completed!");
    Ok(())
}
