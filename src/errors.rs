//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent. `AppError::kind()` folds the variants into the
//! coarse categories the presentation layer renders.

use std::io;
use thiserror::Error;

/// Coarse error category shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    DuplicateKey,
    ValidationFailure,
    SerializationFailure,
    StoreUnavailable,
    Io,
    Config,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Schema bootstrap failed: {0}")]
    Bootstrap(String),

    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    #[error("{kind} '{id}' already exists")]
    DuplicateKey { kind: &'static str, id: String },

    #[error("{kind} '{id}' is still referenced by {dependents}")]
    Referenced {
        kind: &'static str,
        id: String,
        dependents: String,
    },

    #[error("{kind} '{id}' references missing {target} '{target_id}'")]
    MissingReference {
        kind: &'static str,
        id: String,
        target: &'static str,
        target_id: String,
    },

    // ---------------------------
    // Domain validation
    // ---------------------------
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Event '{event_id}' is full ({max} volunteers)")]
    EventFull { event_id: String, max: u32 },

    #[error("User '{user_id}' is already registered for event '{event_id}'")]
    AlreadyRegistered { event_id: String, user_id: String },

    #[error("User '{user_id}' is not registered for event '{event_id}'")]
    NotRegistered { event_id: String, user_id: String },

    // ---------------------------
    // Parsing / encoding
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid {enum_name} value: {value}")]
    InvalidEnum {
        enum_name: &'static str,
        value: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

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

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Io(_) | AppError::Export(_) => ErrorKind::Io,
            AppError::Db(_) | AppError::StoreUnavailable(_) | AppError::Bootstrap(_) => {
                ErrorKind::StoreUnavailable
            }
            AppError::NotFound { .. } => ErrorKind::NotFound,
            AppError::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            AppError::Referenced { .. }
            | AppError::MissingReference { .. }
            | AppError::InvalidField { .. }
            | AppError::EventFull { .. }
            | AppError::AlreadyRegistered { .. }
            | AppError::NotRegistered { .. }
            | AppError::InvalidDate(_)
            | AppError::InvalidTime(_)
            | AppError::InvalidEnum { .. } => ErrorKind::ValidationFailure,
            AppError::Serialization(_) => ErrorKind::SerializationFailure,
            AppError::Config(_) => ErrorKind::Config,
        }
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        AppError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Export(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization(e.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
