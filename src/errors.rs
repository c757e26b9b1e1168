//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep the error
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

    // ---------------------------
    // Visit log storage
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Visit log unavailable: {0}")]
    StorageUnavailable(String),

    // ---------------------------
    // Session lifecycle guards
    // ---------------------------
    #[error("An open visit already exists for {name} at site {site_id} (ticket {ticket})")]
    DuplicateOpenSession {
        site_id: String,
        name: String,
        ticket: String,
    },

    #[error("No open visit found for {name} at site {site_id}")]
    NoOpenSession { site_id: String, name: String },

    #[error("Check-out time {closed_at} precedes check-in time {opened_at}; dwell clamped to zero")]
    ClockSkew {
        opened_at: String,
        closed_at: String,
    },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date or period: {0}")]
    InvalidDate(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Admin gate
    // ---------------------------
    #[error("Access denied: admin password required")]
    AccessDenied,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
