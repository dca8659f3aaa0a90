//! Custom error types for the statement portal
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for statement portal operations
#[derive(Error, Debug)]
pub enum PortalError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connectivity and SQL errors raised by the database driver
    #[error("Database error: {0}")]
    Database(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Errors building or evaluating a statement query
    #[error("Query error: {0}")]
    Query(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV read/write errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl PortalError {
    /// Check if this error came from the database layer
    pub fn is_database(&self) -> bool {
        matches!(self, Self::Database(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Message shown inline when a search action fails
    ///
    /// Database failures and everything else are the two categories a user
    /// sees; validation problems are shown as-is.
    pub fn user_message(&self) -> String {
        match self {
            Self::Database(msg) => format!("Database error: {}", msg),
            Self::Validation(msg) => msg.clone(),
            other => format!("Unexpected error: {}", other),
        }
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for PortalError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for PortalError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<oracle::Error> for PortalError {
    fn from(err: oracle::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for PortalError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for statement portal operations
pub type PortalResult<T> = Result<T, PortalError>;
