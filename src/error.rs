use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for locpick
#[derive(Debug, Error)]
pub enum LocpickError {
    #[error("Could not read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Invalid lookup endpoint {url}: {message}")]
    InvalidEndpoint { url: String, message: String },

    #[error("Field name '{0}' is used more than once")]
    DuplicateField(String),

    #[error("Field name '{0}' is blank")]
    InvalidField(String),

    #[error("Could not start lookup client: {0}")]
    Client(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
