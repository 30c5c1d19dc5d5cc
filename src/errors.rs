//! Unified application error type.
//! Every layer (ingest, core, export, cli) returns AppError so that the
//! binary has a single place where failures are printed.

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
    // Input workbooks
    // ---------------------------
    #[error("Cannot read workbook {path}: {message}")]
    Workbook { path: String, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Workbook {0} has no sheet")]
    EmptyWorkbook(String),

    #[error("Unsupported input file type: {0} (expected xlsx, xlsm, xls, ods or csv)")]
    UnsupportedInput(String),

    #[error("Column '{column}' not found in the {table} table")]
    MissingColumn { table: String, column: String },

    // ---------------------------
    // Data integrity
    // ---------------------------
    #[error("Duplicate work-order keys in the {table} table: {keys}")]
    DuplicateKeys { table: String, keys: String },

    #[error(
        "Join fan-out detected: {rows} rows for {keys} distinct work orders. \
         The KPI would be wrong, aborting"
    )]
    FanOut { rows: usize, keys: usize },

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
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Export(format!("JSON serialization error: {e}"))
    }
}

pub type AppResult<T> = Result<T, AppError>;
