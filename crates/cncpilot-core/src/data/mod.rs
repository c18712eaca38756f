//! Data model for a machining job
//!
//! Catalog entries (materials, operations), the user's machining parameters,
//! the uploaded part file, the analysis result and the generated program.

pub mod analysis;
pub mod gcode;
pub mod materials;
pub mod operations;
pub mod parameters;
pub mod part_file;

pub use analysis::{
    part_name_from_file, AnalysisResult, BoundingBox, ComplexityTier, MAX_TOOL_COUNT,
};
pub use gcode::{DocumentSource, GcodeDocument};
pub use materials::{MaterialCatalog, MaterialId, MaterialProfile, DEFAULT_MATERIAL_ID};
pub use operations::{is_known_operation, OperationSet, OperationSetError, OPERATIONS};
pub use parameters::{
    MachiningParameters, ParameterRange, StockDimensions, DEPTH_OF_CUT_RANGE, FEED_RATE_RANGE,
    SPINDLE_RPM_RANGE, TOOL_DIAMETER_RANGE,
};
pub use part_file::{has_allowed_extension, PartFile, ALLOWED_EXTENSIONS};
