//! Unified application error type.
//! Every fallible layer (db, config, cli) returns AppError so that `main`
//! has a single place to report failures.
//!
//! The tracker core itself never surfaces errors to the user: storage reads
//! fall back to defaults and storage writes are fire-and-forget.

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
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage write rejected for key '{0}'")]
    StoreWrite(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid unit: {0} (expected ml, liters or oz)")]
    InvalidUnit(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
