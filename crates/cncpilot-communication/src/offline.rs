use async_trait::async_trait;
use cncpilot_core::data::AnalysisResult;

use crate::client::GenerativeClient;
use crate::error::{ClientError, ClientResult};
use crate::prompts::{AnalysisRequest, GcodeRequest};

/// Client that never reaches a service
#[derive(Debug, Clone)]
pub struct OfflineClient {
    reason: String,
}

impl OfflineClient {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[async_trait]
impl GenerativeClient for OfflineClient {
    fn name(&self) -> &str {
        "offline"
    }

    async fn request_analysis(&self, _request: &AnalysisRequest) -> ClientResult<AnalysisResult> {
        Err(ClientError::Unavailable(self.reason.clone()))
    }

    async fn request_gcode(&self, _request: &GcodeRequest) -> ClientResult<String> {
        Err(ClientError::Unavailable(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cncpilot_core::data::PartFile;
    use cncpilot_core::MaterialCatalog;

    #[tokio::test]
    async fn test_offline_always_unavailable() {
        let client = OfflineClient::new("offline mode requested");
        let file = PartFile::new("bracket.step", 1024).unwrap();
        let request = AnalysisRequest::new(&file, MaterialCatalog::default_material());

        let err = client.request_analysis(&request).await.unwrap_err();
        assert!(err.is_unavailable());
        assert_eq!(client.reason(), "offline mode requested");
    }
}
