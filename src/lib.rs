//! # CNC Pilot
//!
//! Takes a CAD part file (STEP/IGES) to a machine-ready G-code program:
//!
//! 1. **Upload** - accept a part file by name and size
//! 2. **Analyze** - remote feature analysis, or a fixed fallback result
//! 3. **Configure** - material, machine and machining parameters
//! 4. **Generate** - remote program generation, or the built-in template
//! 5. **Preview / Export** - highlighted listing, statistics, tool list, file
//!
//! ## Architecture
//!
//! CNC Pilot is organized as a workspace with multiple crates:
//!
//! 1. **cncpilot-core** - job data model, stage machine, event bus, errors
//! 2. **cncpilot-devicedb** - machine catalog
//! 3. **cncpilot-camtools** - fallback template, tool list, preview, export
//! 4. **cncpilot-gcodeeditor** - line classification and the program viewer
//! 5. **cncpilot-communication** - remote analysis/generation client
//! 6. **cncpilot-settings** - configuration file handling
//! 7. **cncpilot** - the job [`Session`] and the command-line binary

pub mod error;
pub mod narration;
pub mod session;

pub use cncpilot_core::data;

pub use cncpilot_core::{
    AnalysisResult, AppEvent, ComplexityTier, DocumentSource, EventBus, EventCategory,
    EventFilter, FileEvent, GcodeDocument, LogTone, MachiningParameters, MaterialCatalog,
    MaterialProfile, OperationSet, PartFile, PipelineEvent, PipelineStage, RemoteEvent,
    StockDimensions,
};

pub use cncpilot_devicedb::{AxisCount, MachineCatalog, MachineProfile};

pub use cncpilot_camtools::{FallbackTemplateGenerator, JobSummary, PreviewStats, ToolEntry};

pub use cncpilot_gcodeeditor::{classify, LineClass, ProgramViewer};

pub use cncpilot_communication::{
    select_client, AnthropicClient, ClientConfig, ClientError, GenerativeClient, OfflineClient,
};

pub use cncpilot_settings::{Config, NarrationSettings};

pub use error::{SessionError, SessionResult};
pub use narration::NarrationLine;
pub use session::{ActionOutcome, Session};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Client settings derived from the `[api]` configuration section
pub fn client_config(config: &Config) -> ClientConfig {
    ClientConfig {
        endpoint: config.api.endpoint.clone(),
        api_key: config.api.resolve_api_key(),
        model: config.api.model.clone(),
        max_tokens: config.api.max_tokens,
        api_version: config.api.anthropic_version.clone(),
        timeout: config.api.timeout(),
    }
}

/// Initialize logging with the default configuration
///
/// Equivalent to [`init_logging_with`] at `INFO`.
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(tracing::Level::INFO)
}

/// Initialize logging at `level`
///
/// Sets up structured logging with:
/// - Pretty console output on stderr (stdout carries program text)
/// - RUST_LOG environment variable support
pub fn init_logging_with(level: tracing::Level) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
