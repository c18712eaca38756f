//! Generated G-code program

use serde::{Deserialize, Serialize};

/// Where a document's text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentSource {
    /// Returned by the remote generation service
    Remote,
    /// Produced by the built-in template
    Fallback,
}

impl std::fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote => write!(f, "remote"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// An ordered sequence of G-code lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcodeDocument {
    lines: Vec<String>,
    source: DocumentSource,
}

impl GcodeDocument {
    /// Build a document from lines
    pub fn from_lines(lines: Vec<String>, source: DocumentSource) -> Self {
        Self { lines, source }
    }

    /// Split text on `\n` into a document
    pub fn from_text(text: &str, source: DocumentSource) -> Self {
        Self {
            lines: text.split('\n').map(|l| l.trim_end_matches('\r').to_string()).collect(),
            source,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn source(&self) -> DocumentSource {
        self.source
    }

    /// Number of lines including blank ones
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of lines with non-whitespace content
    pub fn code_line_count(&self) -> usize {
        self.lines.iter().filter(|l| !l.trim().is_empty()).count()
    }

    /// Count lines equal to `line` after trimming
    pub fn count_lines_matching(&self, line: &str) -> usize {
        self.lines.iter().filter(|l| l.trim() == line).count()
    }

    /// The document joined with `\n`
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

impl std::fmt::Display for GcodeDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_line_count_skips_blank_lines() {
        let doc = GcodeDocument::from_text("%\n\nG0 X0.\n   \nM30\n%", DocumentSource::Remote);
        assert_eq!(doc.line_count(), 6);
        assert_eq!(doc.code_line_count(), 4);
        assert_eq!(doc.count_lines_matching("%"), 2);
    }

    #[test]
    fn test_text_round_trip_drops_carriage_returns() {
        let doc = GcodeDocument::from_text("G90\r\nM30", DocumentSource::Remote);
        assert_eq!(doc.lines(), &["G90".to_string(), "M30".to_string()]);
        assert_eq!(doc.to_text(), "G90\nM30");
    }
}
