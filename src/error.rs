//! Error types for the sign-up backend.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for sign-up backend operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or create the user CSV file.
    #[error("failed to open user file at {path}: {source}")]
    StoreOpen {
        /// Path to the CSV file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize a record as a CSV row.
    #[error("failed to encode user record: {0}")]
    StoreEncode(#[from] csv::Error),

    /// Failed to create the directory holding the CSV file.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for sign-up backend operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}
