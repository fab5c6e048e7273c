//! Error types for locstatslib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during LOC counting
///
/// Scan failures on an already-open file are not errors: they are logged and
/// the lines read so far are kept.
#[derive(Error, Debug)]
pub enum LocStatsError {
    /// A matched file could not be opened
    #[error("failed to open file '{path}': {source}")]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// The file extension to match on is empty
    #[error("file extension must not be empty")]
    InvalidExtension,
}
