//! Error types for the CAM tools crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing or writing programs.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// The export directory does not exist.
    #[error("Output directory does not exist: {0}")]
    OutputDirMissing(PathBuf),

    /// Writing the program file failed.
    #[error("Failed to write {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type alias for CAM tool operations.
pub type Result<T> = std::result::Result<T, CamToolError>;
