//! # CNC Pilot Core
//!
//! Core types for CNC Pilot: the job data model, the pipeline stage machine,
//! the session event bus and the shared error types.

pub mod data;
pub mod error;
pub mod event_bus;
pub mod pipeline;

pub use data::{
    AnalysisResult, BoundingBox, ComplexityTier, DocumentSource, GcodeDocument,
    MachiningParameters, MaterialCatalog, MaterialId, MaterialProfile, OperationSet, PartFile,
    StockDimensions,
};

pub use error::{CatalogError, Error, InputError, ParameterError, Result};

pub use event_bus::{
    AppEvent, EventBus, EventBusConfig, EventCategory, EventFilter, FileEvent, LogTone,
    PipelineEvent, RemoteCall, RemoteEvent, SubscriptionId,
};

pub use pipeline::{PipelineAction, PipelineStage, StageSequencer, Transition, HISTORY_LIMIT};
