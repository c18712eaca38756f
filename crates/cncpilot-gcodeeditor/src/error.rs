//! Error types for the G-code viewer crate.

use thiserror::Error;

/// Errors that can occur when addressing lines in a listing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewerError {
    /// The requested line does not exist.
    #[error("Line out of bounds: {line} (total: {total})")]
    LineOutOfBounds { line: usize, total: usize },

    /// The requested range is invalid.
    #[error("Invalid range: {start}..{end} (max: {max})")]
    InvalidRange {
        start: usize,
        end: usize,
        max: usize,
    },
}

/// Result type for viewer operations.
pub type ViewerResult<T> = Result<T, ViewerError>;
