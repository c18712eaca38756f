//! Error handling for CNC Pilot
//!
//! Provides the error types shared by every layer of the pipeline:
//! - Input errors (part file selection)
//! - Parameter errors (machining parameter validation)
//! - Catalog errors (unknown material/operation identifiers)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Input error type
///
/// Raised when the user supplies a part file the pipeline cannot accept.
/// An input error never changes the pipeline stage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The file extension is not one of the accepted CAD exchange formats
    #[error("Unsupported file type '{file_name}': please provide a STEP (.step, .stp) or IGES (.igs, .iges) file")]
    UnsupportedExtension {
        /// The rejected file name.
        file_name: String,
    },

    /// No part file has been loaded yet
    #[error("No part file loaded")]
    NoFile,

    /// The file metadata could not be read
    #[error("Cannot read part file {path}: {reason}")]
    Unreadable {
        /// The path that failed.
        path: String,
        /// The underlying reason.
        reason: String,
    },
}

/// Parameter error type
///
/// Raised when a machining parameter falls outside the range of its control.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is outside its allowed range
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..={max})")]
    OutOfRange {
        /// The parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },

    /// A stock dimension is zero, negative or not finite
    #[error("Stock dimension {axis} must be a positive number, got {value}")]
    InvalidStock {
        /// The axis label (X, Y or Z).
        axis: char,
        /// The rejected value.
        value: f64,
    },

    /// An operation was listed twice
    #[error("Operation '{0}' is already selected")]
    DuplicateOperation(String),
}

/// Catalog error type
///
/// Raised when an identifier does not name an entry of a fixed catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Unknown material id
    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    /// Unknown operation name
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

/// Main error type for CNC Pilot
///
/// A unified error type that can represent any error raised by the core.
#[derive(Error, Debug)]
pub enum Error {
    /// Input error
    #[error(transparent)]
    Input(#[from] InputError),

    /// Parameter error
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// Catalog error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an input error
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::Input(_))
    }

    /// Check if this is a parameter error
    pub fn is_parameter_error(&self) -> bool {
        matches!(self, Error::Parameter(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_display() {
        let err = InputError::UnsupportedExtension {
            file_name: "part.dxf".to_string(),
        };
        assert!(err.to_string().starts_with("Unsupported file type 'part.dxf'"));
        assert_eq!(InputError::NoFile.to_string(), "No part file loaded");
    }

    #[test]
    fn test_parameter_error_display() {
        let err = ParameterError::OutOfRange {
            name: "feed_rate",
            value: 20000.0,
            min: 500.0,
            max: 15000.0,
        };
        assert_eq!(
            err.to_string(),
            "Parameter 'feed_rate' out of range: 20000 (valid: 500..=15000)"
        );
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = InputError::NoFile.into();
        assert!(err.is_input_error());
        assert!(!err.is_parameter_error());

        let err: Error = ParameterError::DuplicateOperation("Engraving".to_string()).into();
        assert!(err.is_parameter_error());

        let err: Error = CatalogError::UnknownMaterial("titanium".to_string()).into();
        assert_eq!(err.to_string(), "Unknown material: titanium");
    }
}
