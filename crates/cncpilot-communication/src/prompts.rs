//! Prompt text for the analysis and generation requests.

use cncpilot_core::data::{AnalysisResult, MachiningParameters, PartFile};
use cncpilot_core::MaterialProfile;
use cncpilot_devicedb::MachineProfile;

pub const ANALYSIS_SYSTEM_PROMPT: &str = r#"You are an expert CNC machining engineer with deep knowledge of CAM programming for wood, stone, and composites.
Analyze CNC part files and return ONLY a JSON object (no markdown, no backticks) with this structure:
{
  "partName": string,
  "estimatedAxes": number (3 or 5),
  "complexity": "Simple" | "Moderate" | "Complex" | "Expert",
  "features": [list of detected features like "Pockets", "Profiles", "Holes", "Fillets", "Undercuts", "Organic Surfaces"],
  "recommendedOperations": [list of 3-5 operation names],
  "materialNotes": string,
  "estimatedTime": string,
  "warnings": [list of any machining concerns],
  "boundingBox": { "x": number, "y": number, "z": number },
  "surfaceArea": string,
  "toolCount": number
}"#;

pub const GCODE_SYSTEM_PROMPT: &str = "You are a professional CAM post-processor engineer. Generate realistic, production-ready G-code/M-code.
Return ONLY the G-code text, no explanations. Include: proper header, tool definitions, work offset setup, roughing passes, finishing passes, tool changes, and footer. Use correct controller dialect for the specified machine.";

/// Inputs for a part analysis request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub file_name: String,
    /// File size in KB, one decimal place
    pub size_kb: String,
    pub material_label: String,
}

impl AnalysisRequest {
    pub fn new(file: &PartFile, material: &MaterialProfile) -> Self {
        Self {
            file_name: file.name().to_string(),
            size_kb: file.size_kb_display(),
            material_label: material.label.to_string(),
        }
    }

    pub fn user_prompt(&self) -> String {
        format!(
            "Analyze this CNC part file: {} ({} KB STEP/IGES file). \n\
             The user plans to machine it in {}. Generate a realistic analysis as if you parsed the actual geometry.",
            self.file_name, self.size_kb, self.material_label
        )
    }
}

/// Inputs for a program generation request
#[derive(Debug, Clone, PartialEq)]
pub struct GcodeRequest {
    pub part_name: String,
    pub machine_name: String,
    pub controller: String,
    pub axis_count: u8,
    pub material_label: String,
    pub params: MachiningParameters,
    pub features: Vec<String>,
}

impl GcodeRequest {
    /// `part_name` falls back to the uploaded file name when the analysis has none
    pub fn new(
        file_name: &str,
        analysis: Option<&AnalysisResult>,
        machine: &MachineProfile,
        material: &MaterialProfile,
        params: &MachiningParameters,
    ) -> Self {
        let part_name = analysis
            .map(|a| a.part_name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or(file_name);
        Self {
            part_name: part_name.to_string(),
            machine_name: machine.name.to_string(),
            controller: machine.controller.to_string(),
            axis_count: machine.axis_count(),
            material_label: material.label.to_string(),
            params: params.clone(),
            features: analysis.map(|a| a.features.clone()).unwrap_or_default(),
        }
    }

    pub fn user_prompt(&self) -> String {
        let p = &self.params;
        let stock = p.stock();
        format!(
            "Generate complete CNC G-code for:\n\
             Part: {}\n\
             Machine: {} ({})\n\
             Material: {}\n\
             Axes: {}-axis\n\
             Stock: X{} Y{} Z{}mm\n\
             Feed Rate: {} mm/min\n\
             Spindle: {} RPM\n\
             Tool Diameter: {}mm\n\
             Depth of Cut: {}mm\n\
             Operations: {}\n\
             Features: {}\n\
             \n\
             Generate realistic G-code with at least 80 lines including header, tool definitions, work coordinates, roughing, finishing, and footer.",
            self.part_name,
            self.machine_name,
            self.controller,
            self.material_label,
            self.axis_count,
            stock.x,
            stock.y,
            stock.z,
            p.feed_rate(),
            p.spindle_rpm(),
            p.tool_diameter(),
            p.depth_of_cut(),
            p.operations().joined(),
            self.features.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cncpilot_core::MaterialCatalog;
    use cncpilot_devicedb::MachineCatalog;

    #[test]
    fn test_analysis_prompt() {
        let file = PartFile::new("bracket.step", 204800).unwrap();
        let material = MaterialCatalog::require("granite").unwrap();
        let req = AnalysisRequest::new(&file, material);

        let prompt = req.user_prompt();
        assert!(prompt.starts_with("Analyze this CNC part file: bracket.step (200.0 KB STEP/IGES file)."));
        assert!(prompt.contains("machine it in Granite."));
    }

    #[test]
    fn test_gcode_prompt() {
        let analysis = AnalysisResult::fallback("bracket.step");
        let machine = MachineCatalog::require("dmg_dmu50").unwrap();
        let material = MaterialCatalog::default_material();
        let params = MachiningParameters::default();
        let req = GcodeRequest::new("bracket.step", Some(&analysis), machine, material, &params);

        let prompt = req.user_prompt();
        assert!(prompt.contains("Part: bracket\n"));
        assert!(prompt.contains("Machine: DMG Mori DMU 50 (Heidenhain iTNC 640)\n"));
        assert!(prompt.contains("Axes: 5-axis\n"));
        assert!(prompt.contains("Stock: X600 Y400 Z50mm\n"));
        assert!(prompt.contains("Feed Rate: 3000 mm/min\n"));
        assert!(prompt.contains("Operations: Profile Cutting, Pocket Milling\n"));
        assert!(prompt.contains("Features: Pockets, Profiles, Contoured Surfaces, Fillets, Holes\n"));
    }

    #[test]
    fn test_gcode_request_without_analysis_uses_file_name() {
        let machine = MachineCatalog::default_machine();
        let material = MaterialCatalog::default_material();
        let params = MachiningParameters::default();
        let req = GcodeRequest::new("bracket.step", None, machine, material, &params);
        assert_eq!(req.part_name, "bracket.step");
        assert!(req.features.is_empty());
    }
}
