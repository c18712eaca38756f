//! Scripted progress narration
//!
//! The analysis and generation actions play a fixed script of log lines,
//! one per step, with a configurable delay before each. Progress after
//! step `i` of `n` is `round((i + 1) / n * 100)`.

use cncpilot_core::data::{AnalysisResult, PartFile};
use cncpilot_core::LogTone;
use cncpilot_devicedb::MachineProfile;
use serde::Serialize;

/// One narration line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrationLine {
    pub message: String,
    pub tone: LogTone,
}

impl NarrationLine {
    pub fn new(message: impl Into<String>, tone: LogTone) -> Self {
        Self {
            message: message.into(),
            tone,
        }
    }
}

/// Progress after completing `step` (0-based) of `total`
pub fn progress_percent(step: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let pct = ((step + 1) as f64 / total as f64 * 100.0 + 0.5).floor();
    pct.clamp(0.0, 100.0) as u8
}

pub fn analysis_script(file: &PartFile) -> Vec<NarrationLine> {
    vec![
        NarrationLine::new(
            format!("Loading {} ({} KB)...", file.name(), file.size_kb_display()),
            LogTone::Info,
        ),
        NarrationLine::new("Parsing geometry topology...", LogTone::Info),
        NarrationLine::new("Detecting surfaces, edges, and vertices...", LogTone::Info),
        NarrationLine::new("Computing bounding box & volume...", LogTone::Info),
        NarrationLine::new("Running AI feature recognition engine...", LogTone::Ai),
        NarrationLine::new("Mapping undercuts and 5-axis regions...", LogTone::Ai),
        NarrationLine::new(
            "Generating machining strategy recommendations...",
            LogTone::Success,
        ),
    ]
}

pub fn consulting_line() -> NarrationLine {
    NarrationLine::new(
        "Consulting Claude AI for intelligent toolpath strategy...",
        LogTone::Ai,
    )
}

/// Closing lines after a remote analysis succeeded
pub fn analysis_complete(analysis: &AnalysisResult) -> Vec<NarrationLine> {
    vec![
        NarrationLine::new(
            format!(
                "Analysis complete — {} part with {} detected features",
                analysis.complexity,
                analysis.features.len()
            ),
            LogTone::Success,
        ),
        NarrationLine::new(
            format!("Estimated machining time: {}", analysis.estimated_time),
            LogTone::Success,
        ),
    ]
}

pub fn analysis_offline() -> NarrationLine {
    NarrationLine::new("Analysis complete (offline mode)", LogTone::Success)
}

pub fn generation_script(machine: &MachineProfile) -> Vec<NarrationLine> {
    let mut lines = vec![NarrationLine::new(
        format!("Initializing post-processor for {}", machine.name),
        LogTone::Info,
    )];
    lines.extend(
        [
            "Computing optimal toolpaths...",
            "Generating rough machining passes...",
            "Adding finishing passes...",
            "Inserting tool change sequences...",
            "Optimizing rapid movements...",
            "Applying machine-specific G/M codes...",
            "Running collision detection...",
            "Validating feed & speed parameters...",
            "Finalizing output...",
        ]
        .into_iter()
        .map(|m| NarrationLine::new(m, LogTone::Info)),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use cncpilot_devicedb::MachineCatalog;

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0, 7), 14);
        assert_eq!(progress_percent(3, 7), 57);
        assert_eq!(progress_percent(6, 7), 100);
        assert_eq!(progress_percent(0, 10), 10);
        assert_eq!(progress_percent(0, 0), 100);
    }

    #[test]
    fn test_scripts() {
        let file = PartFile::new("bracket.step", 204800).unwrap();
        let script = analysis_script(&file);
        assert_eq!(script.len(), 7);
        assert_eq!(script[0].message, "Loading bracket.step (200.0 KB)...");
        assert_eq!(script[4].tone, LogTone::Ai);

        let script = generation_script(MachineCatalog::default_machine());
        assert_eq!(script.len(), 10);
        assert_eq!(script[0].message, "Initializing post-processor for Haas VF-2");
    }

    #[test]
    fn test_completion_lines() {
        let analysis = AnalysisResult::fallback("bracket.step");
        let lines = analysis_complete(&analysis);
        assert_eq!(
            lines[0].message,
            "Analysis complete — Moderate part with 5 detected features"
        );
        assert_eq!(lines[1].message, "Estimated machining time: 2h 45m");
    }
}
