//! Error types for pressbook.
//!
//! This module defines all error types used throughout the pressbook crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for pressbook operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// A backing store could not be parsed.
    #[error("failed to read {path}: {source}")]
    CsvRead {
        /// Path to the backing store.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: csv::Error,
    },

    /// A backing store could not be written.
    #[error("failed to write {path}: {source}")]
    CsvWrite {
        /// Path to the backing store.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: csv::Error,
    },

    /// The header row on disk differs from the expected column list.
    #[error(
        "schema mismatch in {path}: expected columns [{}], found [{}]",
        .expected.join(", "),
        .found.join(", ")
    )]
    SchemaMismatch {
        /// Path to the backing store.
        path: PathBuf,
        /// Columns the record type declares.
        expected: Vec<String>,
        /// Columns found in the stored header row.
        found: Vec<String>,
    },

    // === Form Errors ===
    /// A release was submitted while the contact table is empty.
    #[error("no contacts available: add a contact before recording a release")]
    NoContacts,

    /// A release named a contact that is not in the contact table.
    #[error("unknown contact '{name}'")]
    UnknownContact {
        /// The name that was submitted.
        name: String,
    },

    /// A date field could not be parsed.
    #[error("invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The text that was submitted.
        input: String,
    },

    /// A search pattern failed to compile.
    #[error("invalid search pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern that was submitted.
        pattern: String,
        /// The underlying error.
        #[source]
        source: regex::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for pressbook operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an unknown contact error.
    #[must_use]
    pub fn unknown_contact(name: impl Into<String>) -> Self {
        Self::UnknownContact { name: name.into() }
    }

    /// Create an invalid date error.
    #[must_use]
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }

    /// Check if this error comes from a stored header that doesn't match.
    #[must_use]
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(self, Self::SchemaMismatch { .. })
    }
}
