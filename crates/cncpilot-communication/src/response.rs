//! Interpreting response text.

use std::sync::OnceLock;

use cncpilot_core::data::{AnalysisResult, MAX_TOOL_COUNT};
use regex::Regex;

use crate::error::{ClientError, ClientResult};

/// Remove Markdown code fences (```` ```json ```` and ```` ``` ````) anywhere in the text
pub fn strip_code_fences(text: &str) -> String {
    static FENCE_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = FENCE_REGEX.get_or_init(|| Regex::new(r"```json|```").expect("invalid regex pattern"));
    re.replace_all(text, "").into_owned()
}

/// Parse analysis JSON, tolerating fences and surrounding whitespace.
///
/// The payload must match [`AnalysisResult`] exactly; missing or mistyped
/// fields are an error and no repair is attempted. A `toolCount` above
/// [`MAX_TOOL_COUNT`] is rejected.
pub fn parse_analysis(text: &str) -> ClientResult<AnalysisResult> {
    let clean = strip_code_fences(text);
    let clean = clean.trim();
    if clean.is_empty() {
        return Err(ClientError::Empty);
    }
    let analysis = AnalysisResult::from_json(clean)?;
    if analysis.tool_count > MAX_TOOL_COUNT {
        return Err(ClientError::Implausible {
            field: "toolCount",
            value: analysis.tool_count.to_string(),
        });
    }
    Ok(analysis)
}

/// Program text, returned verbatim when it has any non-whitespace content
pub fn gcode_text(text: String) -> ClientResult<String> {
    if text.trim().is_empty() {
        Err(ClientError::Empty)
    } else {
        Ok(text)
    }
}
