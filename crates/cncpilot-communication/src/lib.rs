//! # CNC Pilot Communication
//!
//! Client for the remote service that analyzes uploaded parts and generates
//! programs. [`AnthropicClient`] talks HTTP to a messages endpoint;
//! [`OfflineClient`] always reports the service as unavailable so callers
//! fall back to built-in results.

pub mod client;
pub mod error;
pub mod http;
pub mod messages;
pub mod offline;
pub mod prompts;
pub mod response;

pub use client::{
    select_client, ClientConfig, GenerativeClient, DEFAULT_API_VERSION, DEFAULT_ENDPOINT,
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
};
pub use error::{ClientError, ClientResult};
pub use http::AnthropicClient;
pub use messages::{ContentBlock, Message, MessagesRequest, MessagesResponse};
pub use offline::OfflineClient;
pub use prompts::{AnalysisRequest, GcodeRequest, ANALYSIS_SYSTEM_PROMPT, GCODE_SYSTEM_PROMPT};
pub use response::{gcode_text, parse_analysis, strip_code_fences};
