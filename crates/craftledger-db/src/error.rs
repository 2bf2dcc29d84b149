//! # Store Error Types
//!
//! Error types for settings-store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Report binary prints a user-friendly message                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note the engine itself never produces errors; calculation inputs
//! degrade to zero instead. Errors here are strictly I/O and payload
//! shape problems.

use thiserror::Error;

/// Settings store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No document stored under a key.
    ///
    /// ## When This Occurs
    /// - Fresh database before seeding
    /// - Key was never written
    #[error("No settings stored under key '{key}'")]
    NotFound { key: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Stored JSON doesn't match any known payload shape.
    ///
    /// ## When This Occurs
    /// - Hand-edited database
    /// - Document written by a newer, incompatible version
    ///
    /// Known OLD shapes upgrade silently on read; only unrecognized
    /// shapes surface this error.
    #[error("Invalid payload under key '{key}': {reason}")]
    InvalidPayload { key: String, reason: String },
}

impl StoreError {
    /// Creates a NotFound error for a given key.
    pub fn not_found(key: impl Into<String>) -> Self {
        StoreError::NotFound { key: key.into() }
    }

    /// Creates an InvalidPayload error for a given key.
    pub fn invalid_payload(key: impl Into<String>, reason: impl Into<String>) -> Self {
        StoreError::InvalidPayload {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Convert sqlx errors to StoreError.
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound {
                key: "unknown".to_string(),
            },
            sqlx::Error::PoolClosed => StoreError::ConnectionFailed("Pool is closed".to_string()),
            sqlx::Error::PoolTimedOut => {
                StoreError::ConnectionFailed("Connection pool exhausted".to_string())
            }
            _ => StoreError::QueryFailed(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::MigrationFailed(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
