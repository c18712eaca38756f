//! Preview statistics and job summary for a generated program.

use cncpilot_core::data::{AnalysisResult, GcodeDocument, MachiningParameters};
use cncpilot_core::MaterialProfile;
use cncpilot_devicedb::MachineProfile;
use serde::Serialize;

use crate::fallback_template::format_number;

/// Headline figures shown above the program listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewStats {
    /// Lines with non-whitespace content
    pub code_lines: usize,
    pub machine: &'static str,
    pub controller: &'static str,
    pub material: &'static str,
    pub material_color: &'static str,
    pub estimated_time: Option<String>,
}

impl PreviewStats {
    pub fn collect(
        document: &GcodeDocument,
        machine: &MachineProfile,
        material: &MaterialProfile,
        analysis: Option<&AnalysisResult>,
    ) -> Self {
        Self {
            code_lines: document.code_line_count(),
            machine: machine.name,
            controller: machine.controller,
            material: material.label,
            material_color: material.color_tag,
            estimated_time: analysis.map(|a| a.estimated_time.clone()),
        }
    }
}

impl std::fmt::Display for PreviewStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Lines of Code: {}", group_thousands(self.code_lines))?;
        writeln!(f, "Machine:       {}", self.machine)?;
        writeln!(f, "Controller:    {}", self.controller)?;
        writeln!(f, "Material:      {}", self.material)?;
        write!(
            f,
            "Est. Time:     {}",
            self.estimated_time.as_deref().unwrap_or("-")
        )
    }
}

/// Selected operations and the parameter table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobSummary {
    pub operations: Vec<String>,
    pub parameters: Vec<(&'static str, String)>,
}

impl JobSummary {
    pub fn from_parameters(params: &MachiningParameters) -> Self {
        let stock = params.stock();
        Self {
            operations: params.operations().iter().map(str::to_string).collect(),
            parameters: vec![
                ("Feed Rate", format!("{} mm/min", format_number(params.feed_rate()))),
                ("Spindle Speed", format!("{} RPM", format_number(params.spindle_rpm()))),
                ("Tool Diameter", format!("{} mm", format_number(params.tool_diameter()))),
                ("Depth of Cut", format!("{} mm", format_number(params.depth_of_cut()))),
                (
                    "Stock Dimensions",
                    format!(
                        "{}×{}×{} mm",
                        format_number(stock.x),
                        format_number(stock.y),
                        format_number(stock.z)
                    ),
                ),
            ],
        }
    }
}

impl std::fmt::Display for JobSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Operations:")?;
        for op in &self.operations {
            writeln!(f, "  - {}", op)?;
        }
        write!(f, "Parameters:")?;
        for (name, value) in &self.parameters {
            write!(f, "\n  {:<18}{}", name, value)?;
        }
        Ok(())
    }
}

/// Format a count with `,` thousands separators
pub fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
