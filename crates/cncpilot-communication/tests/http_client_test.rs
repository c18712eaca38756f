use std::time::Duration;

use cncpilot_communication::{
    AnalysisRequest, AnthropicClient, ClientConfig, ClientError, GcodeRequest, GenerativeClient,
};
use cncpilot_core::data::{AnalysisResult, MachiningParameters, PartFile};
use cncpilot_core::{ComplexityTier, MaterialCatalog};
use cncpilot_devicedb::MachineCatalog;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve one canned response and hand back the raw request
async fn serve_once(status: &'static str, body: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];

        let header_end = loop {
            let n = socket.read(&mut buf).await.unwrap();
            assert!(n > 0, "connection closed before headers");
            request.extend_from_slice(&buf[..n]);
            if let Some(pos) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&request[..header_end]).to_lowercase();
        let content_length = head
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        while request.len() < header_end + content_length {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{}/v1/messages", addr), handle)
}

fn client_for(endpoint: String) -> AnthropicClient {
    AnthropicClient::new(ClientConfig {
        endpoint,
        api_key: Some("sk-test-key".to_string()),
        timeout: Some(Duration::from_secs(5)),
        ..ClientConfig::default()
    })
    .unwrap()
}

fn text_response(parts: &[&str]) -> String {
    let blocks: Vec<_> = parts
        .iter()
        .map(|t| serde_json::json!({"type": "text", "text": t}))
        .collect();
    serde_json::json!({"id": "msg_1", "role": "assistant", "content": blocks}).to_string()
}

fn analysis_request() -> AnalysisRequest {
    let file = PartFile::new("bracket.step", 204800).unwrap();
    AnalysisRequest::new(&file, MaterialCatalog::default_material())
}

fn gcode_request() -> GcodeRequest {
    GcodeRequest::new(
        "bracket.step",
        Some(&AnalysisResult::fallback("bracket.step")),
        MachineCatalog::default_machine(),
        MaterialCatalog::default_material(),
        &MachiningParameters::default(),
    )
}

#[tokio::test]
async fn test_analysis_request_and_fenced_response() {
    let payload = r#"```json
{"partName":"bracket","estimatedAxes":3,"complexity":"Simple","features":["Holes"],
"recommendedOperations":["Drilling & Boring"],"materialNotes":"ok","estimatedTime":"20m",
"warnings":[],"boundingBox":{"x":100,"y":50,"z":10},"surfaceArea":"40 cm²","toolCount":1}
```"#;
    let (endpoint, server) = serve_once("200 OK", text_response(&[payload])).await;
    let client = client_for(endpoint);

    let analysis = client.request_analysis(&analysis_request()).await.unwrap();
    assert_eq!(analysis.part_name, "bracket");
    assert_eq!(analysis.complexity, ComplexityTier::Simple);
    assert_eq!(analysis.estimated_time, "20m");

    let raw = server.await.unwrap();
    let lower = raw.to_lowercase();
    assert!(lower.starts_with("post /v1/messages http/1.1"));
    assert!(lower.contains("x-api-key: sk-test-key"));
    assert!(lower.contains("anthropic-version: 2023-06-01"));
    assert!(lower.contains("content-type: application/json"));

    let body = &raw[raw.find("\r\n\r\n").unwrap() + 4..];
    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(json["model"], "claude-sonnet-4-20250514");
    assert_eq!(json["max_tokens"], 1000);
    assert_eq!(json["messages"][0]["role"], "user");
    assert!(json["messages"][0]["content"]
        .as_str()
        .unwrap()
        .contains("bracket.step (200.0 KB STEP/IGES file)"));
    assert!(json["system"].as_str().unwrap().contains("\"partName\": string"));
}

#[tokio::test]
async fn test_gcode_text_is_concatenated_verbatim() {
    let body = serde_json::json!({
        "content": [
            {"type": "text", "text": "%\nO1000\n"},
            {"type": "thinking"},
            {"type": "text", "text": "M30\n%"}
        ]
    })
    .to_string();
    let (endpoint, server) = serve_once("200 OK", body).await;
    let client = client_for(endpoint);

    let text = client.request_gcode(&gcode_request()).await.unwrap();
    assert_eq!(text, "%\nO1000\nM30\n%");
    server.await.unwrap();
}

#[tokio::test]
async fn test_empty_gcode_is_an_error() {
    let (endpoint, server) = serve_once("200 OK", text_response(&["  \n"])).await;
    let client = client_for(endpoint);

    let err = client.request_gcode(&gcode_request()).await.unwrap_err();
    assert!(matches!(err, ClientError::Empty));
    server.await.unwrap();
}

#[tokio::test]
async fn test_non_success_status() {
    let (endpoint, server) = serve_once(
        "401 Unauthorized",
        r#"{"type":"error","error":{"type":"authentication_error"}}"#.to_string(),
    )
    .await;
    let client = client_for(endpoint);

    let err = client.request_analysis(&analysis_request()).await.unwrap_err();
    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("authentication_error"));
        }
        other => panic!("unexpected error: {other}"),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn test_unparsable_analysis() {
    let (endpoint, server) =
        serve_once("200 OK", text_response(&["I could not read that file."])).await;
    let client = client_for(endpoint);

    let err = client.request_analysis(&analysis_request()).await.unwrap_err();
    assert!(matches!(err, ClientError::Malformed(_)));
    server.await.unwrap();
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(format!("http://{}/v1/messages", addr));
    let err = client.request_gcode(&gcode_request()).await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}
