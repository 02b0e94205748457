//! Error handling module for the tpa CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use std::process::ExitCode;

use thiserror::Error;

/// Main error type for the tpa CLI application.
#[derive(Error, Debug)]
pub enum TpaError {
    /// Error when the configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when the configuration file is not valid TOML.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when the logging subscriber cannot be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    /// Error when the worker pool cannot be built.
    #[error("Failed to start worker threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when writing a JSON report fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Scanning finished, reports were written, and lexical faults were found.
    #[error("aborting due to {count} lexical error(s)")]
    LexicalErrors {
        /// Number of faults across all inputs.
        count: usize,
    },
}

impl TpaError {
    /// Process exit status for this error.
    ///
    /// Lexical faults in the input exit with 1; failures of the tool itself
    /// exit with 2.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TpaError::LexicalErrors { .. } => ExitCode::from(1),
            _ => ExitCode::from(2),
        }
    }
}

/// Result type alias using TpaError.
pub type Result<T> = std::result::Result<T, TpaError>;
