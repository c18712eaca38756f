use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cncpilot_core::data::AnalysisResult;

use crate::error::ClientResult;
use crate::http::AnthropicClient;
use crate::offline::OfflineClient;
use crate::prompts::{AnalysisRequest, GcodeRequest};

pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_API_VERSION: &str = "2023-06-01";

/// Source of part analyses and generated programs
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Analyze an uploaded part
    async fn request_analysis(&self, request: &AnalysisRequest) -> ClientResult<AnalysisResult>;

    /// Generate program text for a job
    async fn request_gcode(&self, request: &GcodeRequest) -> ClientResult<String>;
}

/// Connection settings for the remote service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub api_version: String,
    /// No timeout when unset
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: None,
        }
    }
}

/// Pick the client for a configuration.
///
/// Offline mode or a missing API key selects [`OfflineClient`]; so does an
/// HTTP client that fails to build.
pub fn select_client(config: &ClientConfig, offline: bool) -> Arc<dyn GenerativeClient> {
    if offline {
        return Arc::new(OfflineClient::new("offline mode requested"));
    }
    if config.api_key.as_deref().map_or(true, str::is_empty) {
        tracing::info!("No API key configured, using built-in results");
        return Arc::new(OfflineClient::new("no API key configured"));
    }
    match AnthropicClient::new(config.clone()) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::warn!("HTTP client unavailable: {}", e);
            Arc::new(OfflineClient::new(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_client() {
        let config = ClientConfig::default();
        assert_eq!(select_client(&config, false).name(), "offline");

        let config = ClientConfig {
            api_key: Some("sk-test".to_string()),
            ..ClientConfig::default()
        };
        assert_eq!(select_client(&config, false).name(), "anthropic");
        assert_eq!(select_client(&config, true).name(), "offline");
    }
}
