//! Part analysis result
//!
//! Produced once per analyzed file, either by the remote analysis service or
//! by [`AnalysisResult::fallback`]. Read-only until a new file is analyzed.

use serde::{Deserialize, Serialize};

/// Largest tool count accepted from an analysis
pub const MAX_TOOL_COUNT: u32 = 99;

/// Complexity rating of a part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplexityTier {
    Simple,
    Moderate,
    Complex,
    Expert,
}

impl std::fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Simple => write!(f, "Simple"),
            Self::Moderate => write!(f, "Moderate"),
            Self::Complex => write!(f, "Complex"),
            Self::Expert => write!(f, "Expert"),
        }
    }
}

/// Part envelope in mm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}×{}×{}mm", self.x, self.y, self.z)
    }
}

/// Analysis of an uploaded part
///
/// Field names follow the camelCase JSON schema requested from the remote
/// service, so a response body deserializes directly into this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub part_name: String,
    pub estimated_axes: u8,
    pub complexity: ComplexityTier,
    pub features: Vec<String>,
    pub recommended_operations: Vec<String>,
    pub material_notes: String,
    pub estimated_time: String,
    pub warnings: Vec<String>,
    pub bounding_box: BoundingBox,
    pub surface_area: String,
    pub tool_count: u32,
}

impl AnalysisResult {
    /// The fixed analysis used when the remote service cannot be reached or
    /// its answer cannot be parsed.
    pub fn fallback(file_name: &str) -> Self {
        Self {
            part_name: part_name_from_file(file_name),
            estimated_axes: 5,
            complexity: ComplexityTier::Moderate,
            features: strings(&[
                "Pockets",
                "Profiles",
                "Contoured Surfaces",
                "Fillets",
                "Holes",
            ]),
            recommended_operations: strings(&[
                "3D Surfacing",
                "Profile Cutting",
                "Pocket Milling",
                "Drilling & Boring",
            ]),
            material_notes: "Standard feeds and speeds recommended for selected material"
                .to_string(),
            estimated_time: "2h 45m".to_string(),
            warnings: strings(&[
                "Check tool reach for deep pockets",
                "Verify fixture clearance",
            ]),
            bounding_box: BoundingBox {
                x: 580.0,
                y: 380.0,
                z: 45.0,
            },
            surface_area: "412 cm²".to_string(),
            tool_count: 4,
        }
    }

    /// Parse the JSON form of an analysis
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

/// Strip the last extension from a file name (`bracket.step` → `bracket`).
///
/// A name that is only an extension (`.step`) yields an empty part name.
pub fn part_name_from_file(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(idx) => file_name[..idx].to_string(),
        None => file_name.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
