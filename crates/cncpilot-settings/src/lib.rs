//! CNC Pilot Settings Crate
//!
//! Handles application configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{ApiSettings, Config, ExportSettings, JobDefaults, NarrationSettings};
pub use error::{SettingsError, SettingsResult};
