//! Pipeline stages and the actions that move between them.

use serde::{Deserialize, Serialize};

/// The panel the job is currently on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PipelineStage {
    /// Waiting for a part file
    #[default]
    Upload,
    /// Analysis narration and remote call in flight
    Analyzing,
    /// Analysis available, parameters editable
    Configuring,
    /// Generation narration and remote call in flight
    Generating,
    /// Program available for preview and export
    Previewing,
}

impl PipelineStage {
    /// All stages in pipeline order
    pub fn all() -> &'static [PipelineStage] {
        &[
            PipelineStage::Upload,
            PipelineStage::Analyzing,
            PipelineStage::Configuring,
            PipelineStage::Generating,
            PipelineStage::Previewing,
        ]
    }

    /// Position in the progress strip (0-based)
    pub fn ordinal(self) -> usize {
        match self {
            Self::Upload => 0,
            Self::Analyzing => 1,
            Self::Configuring => 2,
            Self::Generating => 3,
            Self::Previewing => 4,
        }
    }

    /// Short label for the progress strip
    pub fn label(self) -> &'static str {
        match self {
            Self::Upload => "Upload",
            Self::Analyzing => "Analyze",
            Self::Configuring => "Configure",
            Self::Generating => "Generate",
            Self::Previewing => "Export",
        }
    }

    /// Whether an analysis result must exist in this stage
    pub fn has_analysis(self) -> bool {
        matches!(
            self,
            Self::Configuring | Self::Generating | Self::Previewing
        )
    }

    /// Whether a generated document must exist in this stage
    pub fn has_document(self) -> bool {
        self == Self::Previewing
    }

    /// Whether machining parameters may be edited in this stage
    pub fn parameters_editable(self) -> bool {
        self == Self::Configuring
    }

    /// Whether a part file may be loaded in this stage
    pub fn accepts_file(self) -> bool {
        self == Self::Upload
    }

    /// Whether material and machine may be chosen in this stage
    pub fn selections_editable(self) -> bool {
        matches!(self, Self::Upload | Self::Configuring)
    }

    /// The stage reached by applying `action`, if the transition is legal
    pub fn next(self, action: PipelineAction) -> Option<PipelineStage> {
        use PipelineAction::*;
        use PipelineStage::*;
        match (self, action) {
            (Upload, Analyze) => Some(Analyzing),
            (Analyzing, FinishAnalysis) => Some(Configuring),
            (Configuring, Generate) => Some(Generating),
            (Generating, FinishGeneration) => Some(Previewing),
            (Previewing, Reconfigure) => Some(Configuring),
            _ => None,
        }
    }
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upload => write!(f, "upload"),
            Self::Analyzing => write!(f, "analyzing"),
            Self::Configuring => write!(f, "configure"),
            Self::Generating => write!(f, "generating"),
            Self::Previewing => write!(f, "preview"),
        }
    }
}

/// A request to move the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PipelineAction {
    /// Start analyzing the loaded file
    Analyze,
    /// Analysis procedure finished (remote or fallback)
    FinishAnalysis,
    /// Start generating the program
    Generate,
    /// Generation procedure finished (remote or fallback)
    FinishGeneration,
    /// Go back from preview to the configuration panel
    Reconfigure,
}

impl std::fmt::Display for PipelineAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Analyze => write!(f, "analyze"),
            Self::FinishAnalysis => write!(f, "finish-analysis"),
            Self::Generate => write!(f, "generate"),
            Self::FinishGeneration => write!(f, "finish-generation"),
            Self::Reconfigure => write!(f, "reconfigure"),
        }
    }
}
