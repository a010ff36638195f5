//! Error types for mageroot operations.
//!
//! This module defines [`MagerootError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `MagerootError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `MagerootError::Other`) for unexpected errors
//! - Unreadable search candidates are never errors; they are skipped and
//!   reported through the diagnostics sink

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for mageroot operations.
#[derive(Debug, Error)]
pub enum MagerootError {
    /// No directory in the expanded search path looked like an installation.
    #[error("No installation found searching from {start}")]
    LocateFailed { start: PathBuf },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The located installation could not be initialized.
    #[error("Failed to initialize installation at {root}: {message}")]
    BootstrapFailed { root: PathBuf, message: String },

    /// The upgrade ledger snapshot could not be read.
    #[error("Failed to parse ledger at {path}: {message}")]
    LedgerParseError { path: PathBuf, message: String },

    /// Requested output format is not supported.
    #[error("Unknown output format: {format}")]
    UnknownFormat { format: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for mageroot operations.
pub type Result<T> = std::result::Result<T, MagerootError>;
