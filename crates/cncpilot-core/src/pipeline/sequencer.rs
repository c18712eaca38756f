//! Stage sequencer
//!
//! Holds the current [`PipelineStage`] and applies [`PipelineAction`]s.
//! Illegal actions leave the stage untouched and are reported as
//! [`Transition::Ignored`].

use super::stage::{PipelineAction, PipelineStage};

/// Outcome of applying an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The stage changed
    Moved {
        from: PipelineStage,
        to: PipelineStage,
    },
    /// The action is not valid in the current stage
    Ignored {
        stage: PipelineStage,
        action: PipelineAction,
    },
}

impl Transition {
    /// Whether the stage changed
    pub fn is_moved(&self) -> bool {
        matches!(self, Transition::Moved { .. })
    }
}

/// Number of past stages kept in [`StageSequencer::history`]
pub const HISTORY_LIMIT: usize = 32;

/// Linear state machine driving the job panels
#[derive(Debug, Clone, Default)]
pub struct StageSequencer {
    stage: PipelineStage,
    history: Vec<PipelineStage>,
}

impl StageSequencer {
    /// Start at [`PipelineStage::Upload`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stage
    pub fn stage(&self) -> PipelineStage {
        self.stage
    }

    /// Stages left behind, oldest first, at most [`HISTORY_LIMIT`]
    pub fn history(&self) -> &[PipelineStage] {
        &self.history
    }

    /// Whether `action` would change the stage
    pub fn can_apply(&self, action: PipelineAction) -> bool {
        self.stage.next(action).is_some()
    }

    /// Apply an action
    pub fn apply(&mut self, action: PipelineAction) -> Transition {
        match self.stage.next(action) {
            Some(to) => {
                let from = self.stage;
                if self.history.len() == HISTORY_LIMIT {
                    self.history.remove(0);
                }
                self.history.push(from);
                self.stage = to;
                tracing::info!("Pipeline stage {} -> {} ({})", from, to, action);
                Transition::Moved { from, to }
            }
            None => {
                tracing::debug!("Ignoring '{}' in stage {}", action, self.stage);
                Transition::Ignored {
                    stage: self.stage,
                    action,
                }
            }
        }
    }

    /// Whether a stage at `ordinal` is complete, for the progress strip
    pub fn is_done(&self, ordinal: usize) -> bool {
        self.stage.ordinal() > ordinal
    }
}
