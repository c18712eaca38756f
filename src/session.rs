//! Job session
//!
//! One [`Session`] carries a single part through the pipeline:
//!
//! ```text
//! load_file ─> analyze ─> (edit parameters) ─> generate ─> export
//!                                 ^                │
//!                                 └── reconfigure ─┘
//! ```
//!
//! Stage legality is decided by [`StageSequencer`]. Actions attempted in the
//! wrong stage return [`ActionOutcome::Ignored`] and change nothing.
//! Remote service failures are absorbed: analysis falls back to
//! [`AnalysisResult::fallback`] and generation to the built-in template.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use cncpilot_camtools::{
    build_tool_list, export_file_name, FallbackTemplateGenerator, JobSummary, PreviewStats,
    ProgramExporter, ToolEntry,
};
use cncpilot_communication::{AnalysisRequest, GcodeRequest, GenerativeClient};
use cncpilot_core::data::{
    AnalysisResult, DocumentSource, GcodeDocument, MachiningParameters, MaterialCatalog,
    MaterialProfile, OperationSet, PartFile, StockDimensions,
};
use cncpilot_core::{
    AppEvent, EventBus, FileEvent, InputError, PipelineAction, PipelineEvent, PipelineStage,
    RemoteCall, RemoteEvent, StageSequencer, Transition,
};
use cncpilot_devicedb::{MachineCatalog, MachineProfile};
use cncpilot_settings::{Config, NarrationSettings};

use crate::error::{SessionError, SessionResult};
use crate::narration::{self, NarrationLine};

/// Result of a session action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action ran
    Applied,
    /// The action is not available in `stage`; nothing changed
    Ignored { stage: PipelineStage },
}

impl ActionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

pub struct Session {
    sequencer: StageSequencer,
    file: Option<PartFile>,
    material: &'static MaterialProfile,
    machine: &'static MachineProfile,
    params: MachiningParameters,
    analysis: Option<AnalysisResult>,
    document: Option<GcodeDocument>,
    client: Arc<dyn GenerativeClient>,
    narration: NarrationSettings,
    output_dir: PathBuf,
    date: Option<NaiveDate>,
    events: Arc<EventBus>,
    log: Vec<NarrationLine>,
    progress: u8,
}

impl Session {
    /// Start a session from configuration defaults
    pub fn new(config: &Config, client: Arc<dyn GenerativeClient>) -> SessionResult<Self> {
        let material = MaterialCatalog::require(&config.defaults.material)?;
        let machine = MachineCatalog::require(&config.defaults.machine)?;
        let params = config.defaults.parameters()?;

        Ok(Self {
            sequencer: StageSequencer::new(),
            file: None,
            material,
            machine,
            params,
            analysis: None,
            document: None,
            client,
            narration: config.narration,
            output_dir: config.export.output_dir.clone(),
            date: None,
            events: Arc::new(EventBus::new()),
            log: Vec::new(),
            progress: 0,
        })
    }

    /// Fix the date stamped into built-in programs
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_narration(mut self, narration: NarrationSettings) -> Self {
        self.narration = narration;
        self
    }

    // ─── Accessors ──────────────────────────────────────────────────────

    pub fn stage(&self) -> PipelineStage {
        self.sequencer.stage()
    }

    pub fn sequencer(&self) -> &StageSequencer {
        &self.sequencer
    }

    pub fn file(&self) -> Option<&PartFile> {
        self.file.as_ref()
    }

    pub fn material(&self) -> &'static MaterialProfile {
        self.material
    }

    pub fn machine(&self) -> &'static MachineProfile {
        self.machine
    }

    pub fn parameters(&self) -> &MachiningParameters {
        &self.params
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    pub fn document(&self) -> Option<&GcodeDocument> {
        self.document.as_ref()
    }

    /// Progress of the last long-running action, 0..=100
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Narration of the current analysis and generation
    pub fn narration_log(&self) -> &[NarrationLine] {
        &self.log
    }

    pub fn events(&self) -> Arc<EventBus> {
        Arc::clone(&self.events)
    }

    pub fn client_name(&self) -> &str {
        self.client.name()
    }

    // ─── Upload ─────────────────────────────────────────────────────────

    /// Accept a part file by name and size
    pub fn load_file(&mut self, name: &str, size_bytes: u64) -> SessionResult<ActionOutcome> {
        if let Some(ignored) = self.gate(self.stage().accepts_file(), "load file") {
            return Ok(ignored);
        }
        let file = PartFile::new(name, size_bytes).map_err(|e| self.reject(name, e))?;
        self.accept(file);
        Ok(ActionOutcome::Applied)
    }

    /// Accept a part file on disk; only its name and size are read
    pub fn load_path(&mut self, path: &Path) -> SessionResult<ActionOutcome> {
        if let Some(ignored) = self.gate(self.stage().accepts_file(), "load file") {
            return Ok(ignored);
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file = PartFile::from_path(path).map_err(|e| self.reject(&name, e))?;
        self.accept(file);
        Ok(ActionOutcome::Applied)
    }

    fn accept(&mut self, file: PartFile) {
        tracing::info!("Loaded part file {} ({} bytes)", file.name(), file.size_bytes());
        self.events.publish(AppEvent::File(FileEvent::Loaded {
            name: file.name().to_string(),
            size_bytes: file.size_bytes(),
        }));
        self.file = Some(file);
    }

    fn reject(&self, name: &str, err: InputError) -> SessionError {
        tracing::warn!("Rejected part file {}: {}", name, err);
        self.events.publish(AppEvent::File(FileEvent::Rejected {
            name: name.to_string(),
            reason: err.to_string(),
        }));
        err.into()
    }

    // ─── Selections ─────────────────────────────────────────────────────

    pub fn select_material(&mut self, id: &str) -> SessionResult<ActionOutcome> {
        if let Some(ignored) = self.gate(self.stage().selections_editable(), "select material") {
            return Ok(ignored);
        }
        self.material = MaterialCatalog::require(id)?;
        tracing::debug!("Material set to {}", id);
        Ok(ActionOutcome::Applied)
    }

    pub fn select_machine(&mut self, id: &str) -> SessionResult<ActionOutcome> {
        if let Some(ignored) = self.gate(self.stage().selections_editable(), "select machine") {
            return Ok(ignored);
        }
        self.machine = MachineCatalog::require(id)?;
        tracing::debug!("Machine set to {}", id);
        Ok(ActionOutcome::Applied)
    }

    // ─── Parameters (Configuring only) ──────────────────────────────────

    pub fn set_stock(&mut self, stock: StockDimensions) -> SessionResult<ActionOutcome> {
        self.edit_parameters("set stock", |p| p.set_stock(stock))
    }

    pub fn set_feed_rate(&mut self, value: f64) -> SessionResult<ActionOutcome> {
        self.edit_parameters("set feed rate", |p| p.set_feed_rate(value))
    }

    pub fn set_spindle_rpm(&mut self, value: f64) -> SessionResult<ActionOutcome> {
        self.edit_parameters("set spindle speed", |p| p.set_spindle_rpm(value))
    }

    pub fn set_tool_diameter(&mut self, value: f64) -> SessionResult<ActionOutcome> {
        self.edit_parameters("set tool diameter", |p| p.set_tool_diameter(value))
    }

    pub fn set_depth_of_cut(&mut self, value: f64) -> SessionResult<ActionOutcome> {
        self.edit_parameters("set depth of cut", |p| p.set_depth_of_cut(value))
    }

    pub fn set_operations(&mut self, operations: OperationSet) -> SessionResult<ActionOutcome> {
        self.edit_parameters("set operations", |p| {
            p.set_operations(operations);
            Ok(())
        })
    }

    /// Add the operation if absent, remove it if present
    pub fn toggle_operation(&mut self, name: &str) -> SessionResult<ActionOutcome> {
        if let Some(ignored) = self.gate(self.stage().parameters_editable(), "toggle operation") {
            return Ok(ignored);
        }
        let added = self.params.toggle_operation(name)?;
        tracing::debug!("Operation '{}' {}", name, if added { "added" } else { "removed" });
        Ok(ActionOutcome::Applied)
    }

    fn edit_parameters<F>(&mut self, what: &str, edit: F) -> SessionResult<ActionOutcome>
    where
        F: FnOnce(&mut MachiningParameters) -> Result<(), cncpilot_core::ParameterError>,
    {
        if let Some(ignored) = self.gate(self.stage().parameters_editable(), what) {
            return Ok(ignored);
        }
        edit(&mut self.params)?;
        Ok(ActionOutcome::Applied)
    }

    // ─── Pipeline actions ───────────────────────────────────────────────

    /// Analyze the loaded file: narration, one remote call, fallback on failure
    pub async fn analyze(&mut self) -> SessionResult<ActionOutcome> {
        let allowed = self.sequencer.can_apply(PipelineAction::Analyze);
        if let Some(ignored) = self.gate(allowed, "analyze") {
            return Ok(ignored);
        }
        let file = self.file.clone().ok_or(InputError::NoFile)?;

        self.transition(PipelineAction::Analyze);
        self.log.clear();
        self.set_progress(0);

        let delay = self.narration.analysis_step();
        self.narrate(narration::analysis_script(&file), delay).await;

        self.say(narration::consulting_line());
        let request = AnalysisRequest::new(&file, self.material);
        self.remote_event(RemoteEvent::Requested {
            call: RemoteCall::Analysis,
        });

        let result = self.client.request_analysis(&request).await;
        let analysis = match result {
            Ok(analysis) => {
                self.remote_event(RemoteEvent::Succeeded {
                    call: RemoteCall::Analysis,
                });
                for line in narration::analysis_complete(&analysis) {
                    self.say(line);
                }
                analysis
            }
            Err(e) => {
                tracing::warn!("Analysis via {} failed, using fallback: {}", self.client.name(), e);
                self.remote_event(RemoteEvent::FellBack {
                    call: RemoteCall::Analysis,
                    reason: e.to_string(),
                });
                self.say(narration::analysis_offline());
                AnalysisResult::fallback(file.name())
            }
        };

        self.analysis = Some(analysis);
        self.transition(PipelineAction::FinishAnalysis);
        Ok(ActionOutcome::Applied)
    }

    /// Generate the program: narration, one remote call, template on failure
    pub async fn generate(&mut self) -> SessionResult<ActionOutcome> {
        let allowed = self.sequencer.can_apply(PipelineAction::Generate);
        if let Some(ignored) = self.gate(allowed, "generate") {
            return Ok(ignored);
        }

        self.transition(PipelineAction::Generate);
        self.log.clear();
        self.set_progress(0);

        let delay = self.narration.generation_step();
        self.narrate(narration::generation_script(self.machine), delay)
            .await;

        let file_name = self.file.as_ref().map(|f| f.name()).unwrap_or_default();
        let request = GcodeRequest::new(
            file_name,
            self.analysis.as_ref(),
            self.machine,
            self.material,
            &self.params,
        );
        self.remote_event(RemoteEvent::Requested {
            call: RemoteCall::Generation,
        });

        let result = self.client.request_gcode(&request).await;
        let document = match result {
            Ok(text) => {
                self.remote_event(RemoteEvent::Succeeded {
                    call: RemoteCall::Generation,
                });
                GcodeDocument::from_text(&text, DocumentSource::Remote)
            }
            Err(e) => {
                tracing::warn!(
                    "Generation via {} failed, using built-in template: {}",
                    self.client.name(),
                    e
                );
                self.remote_event(RemoteEvent::FellBack {
                    call: RemoteCall::Generation,
                    reason: e.to_string(),
                });
                self.fallback_document()
            }
        };

        tracing::info!(
            "Generated {} lines ({})",
            document.code_line_count(),
            document.source()
        );
        self.document = Some(document);
        self.transition(PipelineAction::FinishGeneration);
        Ok(ActionOutcome::Applied)
    }

    /// Back to Configuring; the program is discarded, analysis and parameters kept
    pub fn reconfigure(&mut self) -> ActionOutcome {
        if let Some(ignored) = self.gate(
            self.sequencer.can_apply(PipelineAction::Reconfigure),
            "reconfigure",
        ) {
            return ignored;
        }
        self.document = None;
        self.transition(PipelineAction::Reconfigure);
        ActionOutcome::Applied
    }

    /// The built-in program for the current selections
    pub fn fallback_document(&self) -> GcodeDocument {
        let date = self
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        FallbackTemplateGenerator::new(self.machine, self.material, &self.params, date)
            .with_analysis(self.analysis.as_ref())
            .generate()
    }

    // ─── Preview & export ───────────────────────────────────────────────

    pub fn preview_stats(&self) -> Option<PreviewStats> {
        self.document.as_ref().map(|doc| {
            PreviewStats::collect(doc, self.machine, self.material, self.analysis.as_ref())
        })
    }

    pub fn job_summary(&self) -> JobSummary {
        JobSummary::from_parameters(&self.params)
    }

    pub fn tool_list(&self) -> Vec<ToolEntry> {
        build_tool_list(self.analysis.as_ref(), &self.params)
    }

    pub fn export_file_name(&self) -> String {
        export_file_name(
            self.analysis.as_ref().map(|a| a.part_name.as_str()),
            self.machine,
        )
    }

    /// Write the program into the configured output directory
    pub fn export(&self) -> SessionResult<PathBuf> {
        self.export_to(&self.output_dir)
    }

    /// Write the program into `dir`
    pub fn export_to(&self, dir: &Path) -> SessionResult<PathBuf> {
        let document = self.document.as_ref().ok_or(SessionError::NothingToExport)?;
        let path = ProgramExporter::new(dir).write(document, &self.export_file_name())?;
        self.events
            .publish(AppEvent::File(FileEvent::Exported { path: path.clone() }));
        Ok(path)
    }

    // ─── Internals ──────────────────────────────────────────────────────

    fn gate(&self, allowed: bool, what: &str) -> Option<ActionOutcome> {
        if allowed {
            None
        } else {
            let stage = self.stage();
            tracing::debug!("Ignoring '{}' in stage {}", what, stage);
            Some(ActionOutcome::Ignored { stage })
        }
    }

    fn transition(&mut self, action: PipelineAction) {
        if let Transition::Moved { from, to } = self.sequencer.apply(action) {
            self.events
                .publish(AppEvent::Pipeline(PipelineEvent::StageChanged { from, to }));
        }
    }

    fn set_progress(&mut self, percent: u8) {
        self.progress = percent;
        self.events
            .publish(AppEvent::Pipeline(PipelineEvent::Progress { percent }));
    }

    fn say(&mut self, line: NarrationLine) {
        self.events.publish(AppEvent::Pipeline(PipelineEvent::Log {
            message: line.message.clone(),
            tone: line.tone,
        }));
        self.log.push(line);
    }

    fn remote_event(&self, event: RemoteEvent) {
        self.events.publish(AppEvent::Remote(event));
    }

    async fn narrate(&mut self, script: Vec<NarrationLine>, delay: Duration) {
        let total = script.len();
        for (i, line) in script.into_iter().enumerate() {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            self.say(line);
            self.set_progress(narration::progress_percent(i, total));
        }
    }
}
