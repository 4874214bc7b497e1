//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The command layer matches on these variants to produce the one-line message shown
//! to the user; the core never prints them itself.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by record and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A name, phone or birthday failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The record already holds this phone number
    #[error("Phone {0} already exists")]
    DuplicatePhone(String),

    /// The record holds no such phone number
    #[error("Phone {0} not found")]
    PhoneNotFound(String),

    /// No record is stored under this name
    #[error("Record {0} not found")]
    RecordNotFound(String),

    /// A command needed an existing contact and none matched
    #[error("Contact not found.")]
    ContactNotFound(String),

    /// A command was given fewer arguments than it needs
    #[error("Not enough arguments provided.")]
    MissingArguments,
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the book file failed
    #[error("Storage I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The book file is not a valid address book document
    #[error("Failed to parse address book: {0}")]
    Json(#[from] serde_json::Error),

    /// The book file was written by an incompatible version
    #[error("Unsupported address book version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
