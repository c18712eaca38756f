//! Configuration for CNC Pilot
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats; the default location is platform-specific.
//!
//! Configuration is organized into sections:
//! - Remote service settings (endpoint, model, credentials, timeout)
//! - Narration pacing
//! - Job defaults (material, machine, machining parameters)
//! - Export settings

use cncpilot_core::data::{MachiningParameters, OperationSet, StockDimensions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{SettingsError, SettingsResult};

/// Remote analysis/generation service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Messages endpoint URL
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    /// Value of the `anthropic-version` header
    pub anthropic_version: String,
    /// Key stored in the file; takes precedence over `api_key_env`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Environment variable consulted when `api_key` is unset
    pub api_key_env: String,
    /// Request timeout in milliseconds; no timeout when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.anthropic.com/v1/messages".to_string(),
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 1000,
            anthropic_version: "2023-06-01".to_string(),
            api_key: None,
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            timeout_ms: None,
        }
    }
}

impl ApiSettings {
    /// The configured key, or the value of `api_key_env`
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.is_empty())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

/// Delay between scripted progress messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrationSettings {
    pub analysis_step_ms: u64,
    pub generation_step_ms: u64,
}

impl Default for NarrationSettings {
    fn default() -> Self {
        Self {
            analysis_step_ms: 800,
            generation_step_ms: 550,
        }
    }
}

impl NarrationSettings {
    /// No delays
    pub fn silent() -> Self {
        Self {
            analysis_step_ms: 0,
            generation_step_ms: 0,
        }
    }

    pub fn analysis_step(&self) -> Duration {
        Duration::from_millis(self.analysis_step_ms)
    }

    pub fn generation_step(&self) -> Duration {
        Duration::from_millis(self.generation_step_ms)
    }
}

/// Initial selections for a new session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobDefaults {
    pub material: String,
    pub machine: String,
    pub stock: StockDimensions,
    pub feed_rate: f64,
    pub spindle_rpm: f64,
    pub tool_diameter: f64,
    pub depth_of_cut: f64,
    pub operations: Vec<String>,
}

impl Default for JobDefaults {
    fn default() -> Self {
        let params = MachiningParameters::default();
        Self {
            material: "solid_wood".to_string(),
            machine: "haas_vf2".to_string(),
            stock: params.stock(),
            feed_rate: params.feed_rate(),
            spindle_rpm: params.spindle_rpm(),
            tool_diameter: params.tool_diameter(),
            depth_of_cut: params.depth_of_cut(),
            operations: params.operations().iter().map(str::to_string).collect(),
        }
    }
}

impl JobDefaults {
    /// Validated machining parameters built from these defaults
    pub fn parameters(&self) -> SettingsResult<MachiningParameters> {
        let operations = OperationSet::from_names(&self.operations)
            .map_err(|e| SettingsError::invalid("defaults.operations", e.to_string()))?;
        Ok(MachiningParameters::new(
            self.stock,
            self.feed_rate,
            self.spindle_rpm,
            self.tool_diameter,
            self.depth_of_cut,
            operations,
        )?)
    }
}

/// Program export settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub output_dir: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
/// Sections missing from a file take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiSettings,
    pub narration: NarrationSettings,
    pub defaults: JobDefaults,
    pub export: ExportSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/cncpilot/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cncpilot").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` (or the default path) when it exists, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::default_path(),
        };
        match path {
            Some(p) if p.exists() => Self::load_from_file(&p),
            Some(p) => {
                tracing::debug!("No configuration at {}, using defaults", p.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    ///
    /// Catalog ids in `defaults` are resolved by the session, not here.
    pub fn validate(&self) -> SettingsResult<()> {
        if self.api.endpoint.trim().is_empty() {
            return Err(SettingsError::invalid("api.endpoint", "must not be empty"));
        }

        if self.api.model.trim().is_empty() {
            return Err(SettingsError::invalid("api.model", "must not be empty"));
        }

        if self.api.max_tokens == 0 {
            return Err(SettingsError::invalid("api.max_tokens", "must be > 0"));
        }

        if self.api.timeout_ms == Some(0) {
            return Err(SettingsError::invalid("api.timeout_ms", "must be > 0"));
        }

        self.defaults.parameters()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
