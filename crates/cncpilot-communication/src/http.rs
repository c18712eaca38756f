//! HTTP client for the messages endpoint.

use async_trait::async_trait;
use cncpilot_core::data::AnalysisResult;

use crate::client::{ClientConfig, GenerativeClient};
use crate::error::{ClientError, ClientResult};
use crate::messages::{Message, MessagesRequest, MessagesResponse};
use crate::prompts::{AnalysisRequest, GcodeRequest, ANALYSIS_SYSTEM_PROMPT, GCODE_SYSTEM_PROMPT};
use crate::response::{gcode_text, parse_analysis};

/// Posts prompts to a messages endpoint, one request per call, no retries
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl AnthropicClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one prompt and return the concatenated response text
    pub async fn complete(&self, system: &str, prompt: String) -> ClientResult<String> {
        let body = MessagesRequest {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            system: system.to_string(),
            messages: vec![Message::user(prompt)],
        };

        tracing::debug!(
            "POST {} (model {}, max_tokens {})",
            self.config.endpoint,
            body.model,
            body.max_tokens
        );

        let mut request = self
            .http
            .post(&self.config.endpoint)
            .header("content-type", "application/json")
            .header("anthropic-version", &self.config.api_version)
            .json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let parsed: MessagesResponse = serde_json::from_slice(&bytes)?;
        let text = parsed.text();
        tracing::debug!("Received {} characters of text", text.len());
        Ok(text)
    }
}

#[async_trait]
impl GenerativeClient for AnthropicClient {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn request_analysis(&self, request: &AnalysisRequest) -> ClientResult<AnalysisResult> {
        let text = self
            .complete(ANALYSIS_SYSTEM_PROMPT, request.user_prompt())
            .await?;
        parse_analysis(&text)
    }

    async fn request_gcode(&self, request: &GcodeRequest) -> ClientResult<String> {
        let text = self
            .complete(GCODE_SYSTEM_PROMPT, request.user_prompt())
            .await?;
        gcode_text(text)
    }
}
