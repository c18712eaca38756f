//! # CNC Pilot CAM Tools
//!
//! Program generation and the outputs built around a generated program.
//!
//! - **Fallback Template**: deterministic G-code program used when the remote
//!   generation service is unavailable
//! - **Tool List**: tool library derived from the analysis and parameters
//! - **Preview**: headline statistics and the job summary
//! - **Export**: output file naming and writing

pub mod error;
pub mod export;
pub mod fallback_template;
pub mod preview;
pub mod tool_list;

pub use error::{CamToolError, Result};
pub use export::{export_file_name, ProgramExporter};
pub use fallback_template::{
    format_coordinate, format_number, round_half_up, FallbackTemplateGenerator,
};
pub use preview::{group_thousands, JobSummary, PreviewStats};
pub use tool_list::{build_tool_list, ToolEntry, DEFAULT_TOOL_COUNT};
