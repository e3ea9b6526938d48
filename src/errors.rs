//! Unified application error type.
//! All modules (core, cli, config, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Source file not found: {0}")]
    FileNotFound(String),

    // ---------------------------
    // CSV decoding
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Row-scoped parse failure. A row producing RowError is dropped by the
/// loader and never aborts the surrounding file load.
///
/// Only required identity columns can raise one: `uuid` / `session_uuid`
/// (UUIDs) and the text entry `id` (integer). Every other field degrades to
/// a default instead of failing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("invalid UUID in column {column}: '{value}'")]
    InvalidUuid {
        column: &'static str,
        value: String,
    },

    #[error("invalid integer in column {column}: '{value}'")]
    InvalidInt {
        column: &'static str,
        value: String,
    },
}
