use cncpilot_core::data::{AnalysisResult, MachiningParameters, MAX_TOOL_COUNT};
use serde::Serialize;

/// Tool count used when the analysis reports none
pub const DEFAULT_TOOL_COUNT: u32 = 3;

const TOOL_KINDS: [&str; 5] = ["End Mill", "Ball Nose", "Drill", "V-Bit", "Chamfer Mill"];
const TOOL_LENGTHS: [f64; 5] = [75.0, 75.0, 100.0, 50.0, 60.0];

/// One row of the tool library
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolEntry {
    /// 1-based tool number
    pub number: u32,
    pub kind: &'static str,
    /// Cutting diameter (mm)
    pub diameter: f64,
    /// Overall length (mm)
    pub length: f64,
    pub material: &'static str,
    pub flutes: u8,
    /// Operation the tool is assigned to, if any
    pub operation: Option<String>,
}

impl std::fmt::Display for ToolEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "T{:<3} {:<13} Dia {:>6}mm  Length {:>4}mm  {}  {} flutes  {}",
            self.number,
            self.kind,
            self.diameter,
            self.length,
            self.material,
            self.flutes,
            self.operation.as_deref().unwrap_or("-")
        )
    }
}

/// Build the tool library for a job
///
/// The count comes from the analysis, capped at [`MAX_TOOL_COUNT`].
pub fn build_tool_list(
    analysis: Option<&AnalysisResult>,
    params: &MachiningParameters,
) -> Vec<ToolEntry> {
    let count = match analysis.map(|a| a.tool_count) {
        Some(n) if n > 0 => n.min(MAX_TOOL_COUNT),
        _ => DEFAULT_TOOL_COUNT,
    };
    let tool = params.tool_diameter();
    let ops = params.operations();

    (0..count)
        .map(|i| {
            let idx = i as usize;
            let diameter = match idx {
                0 => tool,
                1 => tool / 2.0,
                2 => 8.0,
                3 => 60.0,
                4 => 10.0,
                _ => tool,
            };
            let operation = match idx {
                2 => Some("Drilling & Boring".to_string()),
                3 => Some("V-Carving".to_string()),
                4 => Some("Chamfering".to_string()),
                _ => ops.get(idx).map(str::to_string),
            };

            ToolEntry {
                number: i + 1,
                kind: TOOL_KINDS.get(idx).copied().unwrap_or("End Mill"),
                diameter,
                length: TOOL_LENGTHS.get(idx).copied().unwrap_or(75.0),
                material: "Carbide",
                flutes: 4,
                operation,
            }
        })
        .collect()
}
