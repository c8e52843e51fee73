//! Unified application error type.
//! All modules (grid, calendar, core, cli, utils) return AppError to keep
//! the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Workbook-related
    // ---------------------------
    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Backup error: {0}")]
    Backup(String),

    // ---------------------------
    // Calendar-related
    // ---------------------------
    #[error("Calendar error: {0}")]
    Calendar(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp format: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid UTC offset: {0}")]
    InvalidOffset(String),

    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    // ---------------------------
    // Prompt errors
    // ---------------------------
    #[error("Prompt error: {0}")]
    Prompt(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
