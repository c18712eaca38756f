//! Error types for the machine catalog crate.

use thiserror::Error;

/// Errors that can occur when resolving machine profiles.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The requested machine id is not in the catalog.
    #[error("Machine not found: {0}")]
    MachineNotFound(String),
}

/// Result type alias for catalog operations.
pub type DeviceResult<T> = Result<T, DeviceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_error_display() {
        let err = DeviceError::MachineNotFound("bridgeport".to_string());
        assert_eq!(err.to_string(), "Machine not found: bridgeport");
    }
}
