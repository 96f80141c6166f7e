//! # Error Handling
//!
//! This module defines the centralized error type for `repo-scan`. It uses
//! the `thiserror` library to build an `Error` enum covering the failure
//! modes of the library, each with enough context to produce a useful
//! diagnostic.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of everything that can go wrong while loading
//!   configuration, reading repository metadata files, resolving owners or
//!   reading a project list.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Most scanning failures never surface as an `Error` at all: the walker
//! logs them and keeps going. `Error` values are returned where a caller has
//! to decide what happens next (configuration loading, list-file mode, and
//! the small building blocks that the scanner itself logs).

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for repo-scan operations
#[derive(Error, Debug)]
pub enum Error {
    /// An I/O error tied to a specific path.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scan configuration could not be parsed or is invalid.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// The project list file could not be opened or read.
    #[error("Error reading project list {}: {source}", path.display())]
    ProjectList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The owner of a repository could not be looked up.
    #[error("Error reading owner-info for uid {uid}: {message}")]
    OwnerLookup { uid: u32, message: String },

    /// A legacy repository config file could not be parsed.
    #[error("Error parsing legacy config {}: {message}", path.display())]
    LegacyConfig { path: PathBuf, message: String },

    /// A YAML error, wrapped from `serde_yaml::Error`.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wrap an I/O error together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error means "the file is not there".
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Io { source, .. } | Error::ProjectList { source, .. } => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            Error::ConfigNotFound { .. } => true,
            _ => false,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
