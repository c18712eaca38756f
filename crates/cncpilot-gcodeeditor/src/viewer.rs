use std::ops::Range;

use cncpilot_core::data::GcodeDocument;

use crate::error::{ViewerError, ViewerResult};
use crate::highlight::{classify, LineClass};

/// A line prepared for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerLine {
    /// 1-based line number
    pub number: usize,
    pub text: String,
    pub class: LineClass,
}

impl ViewerLine {
    /// Four-digit zero-padded line number
    pub fn gutter(&self) -> String {
        format!("{:04}", self.number)
    }
}

/// Read-only numbered listing of a program
#[derive(Debug, Clone, Default)]
pub struct ProgramViewer {
    lines: Vec<ViewerLine>,
}

impl ProgramViewer {
    pub fn new(document: &GcodeDocument) -> Self {
        Self::from_lines(document.lines().iter().map(String::as_str))
    }

    /// Build from raw text split on `\n`
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.split('\n').map(|l| l.trim_end_matches('\r')))
    }

    fn from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Self {
        let lines = lines
            .enumerate()
            .map(|(i, text)| ViewerLine {
                number: i + 1,
                text: text.to_string(),
                // Indentation does not affect the class
                class: classify(text.trim()),
            })
            .collect::<Vec<_>>();
        tracing::trace!("Listing prepared with {} lines", lines.len());
        Self { lines }
    }

    pub fn lines(&self) -> &[ViewerLine] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line by 1-based number
    pub fn line(&self, number: usize) -> ViewerResult<&ViewerLine> {
        number
            .checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .ok_or(ViewerError::LineOutOfBounds {
                line: number,
                total: self.lines.len(),
            })
    }

    /// Lines in a 0-based index range
    pub fn window(&self, range: Range<usize>) -> ViewerResult<&[ViewerLine]> {
        if range.start > range.end || range.end > self.lines.len() {
            return Err(ViewerError::InvalidRange {
                start: range.start,
                end: range.end,
                max: self.lines.len(),
            });
        }
        Ok(&self.lines[range])
    }

    /// Number of lines in each class
    pub fn class_counts(&self) -> Vec<(LineClass, usize)> {
        LineClass::ALL
            .iter()
            .map(|class| {
                let n = self.lines.iter().filter(|l| l.class == *class).count();
                (*class, n)
            })
            .collect()
    }

    /// Plain listing: gutter, two spaces, text
    pub fn render_plain(&self) -> String {
        self.render_with(|line| line.text.clone())
    }

    /// Listing with 24-bit ANSI colours per class
    pub fn render_ansi(&self) -> String {
        self.render_with(|line| {
            let (r, g, b) = line.class.rgb();
            format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, line.text)
        })
    }

    /// Listing with the class name after each line number
    pub fn render_classes(&self) -> String {
        self.render_with(|line| format!("{:<11} {}", line.class.name(), line.text))
    }

    fn render_with(&self, body: impl Fn(&ViewerLine) -> String) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.gutter());
            out.push_str("  ");
            out.push_str(&body(line));
            out.push('\n');
        }
        out
    }
}
