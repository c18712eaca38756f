//! Error type for session actions.

use cncpilot_camtools::CamToolError;
use cncpilot_core::data::OperationSetError;
use cncpilot_core::{CatalogError, InputError, ParameterError};
use cncpilot_devicedb::DeviceError;
use cncpilot_settings::SettingsError;
use thiserror::Error;

/// Errors returned by [`Session`](crate::Session) actions.
///
/// Remote service failures never appear here; they are absorbed by the
/// built-in fallbacks.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The part file was rejected or is missing.
    #[error(transparent)]
    Input(#[from] InputError),

    /// A machining parameter is out of range.
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// An unknown material or operation was requested.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// An unknown machine was requested.
    #[error(transparent)]
    Device(#[from] DeviceError),

    /// The configuration is invalid.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Writing the program failed.
    #[error(transparent)]
    Export(#[from] CamToolError),

    /// There is no generated program to export.
    #[error("No program has been generated")]
    NothingToExport,
}

impl From<OperationSetError> for SessionError {
    fn from(err: OperationSetError) -> Self {
        match err {
            OperationSetError::Catalog(e) => Self::Catalog(e),
            OperationSetError::Parameter(e) => Self::Parameter(e),
        }
    }
}

pub type SessionResult<T> = Result<T, SessionError>;
