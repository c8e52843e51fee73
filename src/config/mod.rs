use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_utc_offset;
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Workbook file holding the weekly grids.
    #[serde(default = "default_workbook")]
    pub workbook: String,

    /// Merged calendar document.
    #[serde(default = "default_calendar")]
    pub calendar: String,

    /// Directory receiving timestamped workbook backups.
    #[serde(default = "default_backup_dir")]
    pub backup_dir: String,

    /// Fixed UTC offset all local timestamps are interpreted in.
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,

    /// Domain suffix of generated calendar UIDs.
    #[serde(default = "default_uid_domain")]
    pub uid_domain: String,

    /// Zip workbook backups after copying.
    #[serde(default)]
    pub compress_backups: bool,
}

fn default_workbook() -> String {
    "work_log.xlsx".to_string()
}
fn default_calendar() -> String {
    "calendar/merged_tasks.ics".to_string()
}
fn default_backup_dir() -> String {
    "backup".to_string()
}
fn default_utc_offset() -> String {
    "-08:00".to_string()
}
fn default_uid_domain() -> String {
    "worklog.local".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workbook: default_workbook(),
            calendar: default_calendar(),
            backup_dir: default_backup_dir(),
            utc_offset: default_utc_offset(),
            uid_domain: default_uid_domain(),
            compress_backups: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("worklog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".worklog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worklog.conf")
    }

    /// Load configuration from file; a missing file means defaults.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Self::default())
        }
    }

    /// Create the config directory and write the default config file.
    /// Test mode creates nothing outside the current process.
    pub fn init_all(is_test: bool) -> AppResult<()> {
        if is_test {
            return Ok(());
        }
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(&Self::default()).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// The configured fixed offset, parsed.
    pub fn offset(&self) -> AppResult<FixedOffset> {
        parse_utc_offset(&self.utc_offset)
    }

    pub fn workbook_path(&self) -> PathBuf {
        expand_tilde(&self.workbook)
    }

    pub fn calendar_path(&self) -> PathBuf {
        expand_tilde(&self.calendar)
    }

    pub fn backup_dir_path(&self) -> PathBuf {
        expand_tilde(&self.backup_dir)
    }
}
