use clap::{Parser, Subcommand};

/// Command-line interface definition for worklog
/// CLI application to record work intervals into a weekly grid and a merged ICS calendar
#[derive(Parser)]
#[command(
    name = "worklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time tracking CLI: record work intervals into a weekly spreadsheet grid and a merged ICS calendar",
    long_about = None
)]
pub struct Cli {
    /// Override workbook path (useful for tests or a custom log)
    #[arg(global = true, long = "workbook")]
    pub workbook: Option<String>,

    /// Override calendar path
    #[arg(global = true, long = "calendar")]
    pub calendar: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the effective configuration to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL)
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Track one session interactively (start / stop / manual)
    Track,

    /// Record a work interval without prompts
    Record {
        /// Job title written into the start cell
        #[arg(long = "job")]
        job: String,

        /// Number of tasks completed
        #[arg(long = "tasks")]
        tasks: u32,

        /// Local start timestamp (YYYY-MM-DD HH:MM)
        #[arg(long = "from", value_name = "TIMESTAMP")]
        from: String,

        /// Local end timestamp (YYYY-MM-DD HH:MM)
        #[arg(long = "to", value_name = "TIMESTAMP")]
        to: String,
    },
}
