//! Error types for the hsdscan library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for scan operations.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Errors that can occur while screening an assembly.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Input file not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required external tool could not be located
    #[error("{0} binary not found. Install NCBI BLAST+ or ensure it's in PATH.")]
    BinaryNotFound(String),

    /// An external tool exited non-zero
    #[error("{tool} failed: {stderr}")]
    CommandFailed { tool: String, stderr: String },

    /// Failed to parse tabular search output
    #[error("Failed to parse search output: {0}")]
    TabParse(String),

    /// CSV serialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid configuration parameter
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generic error with custom message
    #[error("{0}")]
    Other(String),
}
