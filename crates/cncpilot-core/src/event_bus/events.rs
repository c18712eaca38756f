//! Event type definitions for the event bus.
//!
//! Events are grouped by category. They are cloneable and serializable so a
//! front end can replay the narration log of a session.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::pipeline::PipelineStage;

/// Root event enum for all session events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// Stage changes, progress and narration
    Pipeline(PipelineEvent),
    /// Part file and export file events
    File(FileEvent),
    /// Calls to the remote analysis/generation service
    Remote(RemoteEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Pipeline(_) => EventCategory::Pipeline,
            AppEvent::File(_) => EventCategory::File,
            AppEvent::Remote(_) => EventCategory::Remote,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Pipeline(e) => e.description(),
            AppEvent::File(e) => e.description(),
            AppEvent::Remote(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    Pipeline,
    File,
    Remote,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Pipeline => write!(f, "Pipeline"),
            EventCategory::File => write!(f, "File"),
            EventCategory::Remote => write!(f, "Remote"),
        }
    }
}

/// Tone of a narration line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogTone {
    /// Plain progress
    Info,
    /// Work attributed to the AI service
    Ai,
    /// A step that completed
    Success,
    /// Something the user should check
    Warning,
}

/// Pipeline events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PipelineEvent {
    /// The active stage changed
    StageChanged {
        from: PipelineStage,
        to: PipelineStage,
    },
    /// Progress of the running action, 0..=100
    Progress { percent: u8 },
    /// A narration line
    Log { message: String, tone: LogTone },
}

impl PipelineEvent {
    fn description(&self) -> String {
        match self {
            PipelineEvent::StageChanged { from, to } => format!("Stage {} -> {}", from, to),
            PipelineEvent::Progress { percent } => format!("Progress {}%", percent),
            PipelineEvent::Log { message, .. } => message.clone(),
        }
    }
}

/// File events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FileEvent {
    /// A part file was accepted
    Loaded { name: String, size_bytes: u64 },
    /// A part file was refused
    Rejected { name: String, reason: String },
    /// The program was written to disk
    Exported { path: PathBuf },
}

impl FileEvent {
    fn description(&self) -> String {
        match self {
            FileEvent::Loaded { name, size_bytes } => {
                format!("Loaded {} ({} bytes)", name, size_bytes)
            }
            FileEvent::Rejected { name, reason } => format!("Rejected {}: {}", name, reason),
            FileEvent::Exported { path } => format!("Exported {}", path.display()),
        }
    }
}

/// Which remote operation an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemoteCall {
    Analysis,
    Generation,
}

impl std::fmt::Display for RemoteCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteCall::Analysis => write!(f, "analysis"),
            RemoteCall::Generation => write!(f, "generation"),
        }
    }
}

/// Remote service events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RemoteEvent {
    /// A request was sent
    Requested { call: RemoteCall },
    /// The response was used
    Succeeded { call: RemoteCall },
    /// The call failed and the built-in fallback was used instead
    FellBack { call: RemoteCall, reason: String },
}

impl RemoteEvent {
    fn description(&self) -> String {
        match self {
            RemoteEvent::Requested { call } => format!("Requested remote {}", call),
            RemoteEvent::Succeeded { call } => format!("Remote {} succeeded", call),
            RemoteEvent::FellBack { call, reason } => {
                format!("Remote {} failed, using fallback: {}", call, reason)
            }
        }
    }
}
