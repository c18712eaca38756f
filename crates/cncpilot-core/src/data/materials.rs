//! Materials catalog
//!
//! The fixed set of stock materials a part can be machined from. Each entry
//! carries a display label and a color tag used when presenting the job.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Material identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct MaterialId(pub String);

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stock material entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaterialProfile {
    /// Catalog identifier (e.g. `solid_wood`)
    pub id: &'static str,
    /// Display label
    pub label: &'static str,
    /// Hex color tag (`#rrggbb`)
    pub color_tag: &'static str,
}

impl MaterialProfile {
    /// Owned identifier for this material
    pub fn material_id(&self) -> MaterialId {
        MaterialId(self.id.to_string())
    }
}

impl std::fmt::Display for MaterialProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Identifier of the material selected when nothing else is configured
pub const DEFAULT_MATERIAL_ID: &str = "solid_wood";

const MATERIALS: &[MaterialProfile] = &[
    MaterialProfile { id: "solid_wood", label: "Solid Wood", color_tag: "#a0522d" },
    MaterialProfile { id: "plywood", label: "Plywood / MDF", color_tag: "#c4a35a" },
    MaterialProfile { id: "hardwood", label: "Hardwood (Oak/Maple)", color_tag: "#8b6914" },
    MaterialProfile { id: "granite", label: "Granite", color_tag: "#6b7280" },
    MaterialProfile { id: "marble", label: "Marble", color_tag: "#d1d5db" },
    MaterialProfile { id: "sandstone", label: "Sandstone", color_tag: "#d4a76a" },
    MaterialProfile { id: "carbon_fiber", label: "Carbon Fiber", color_tag: "#374151" },
    MaterialProfile { id: "fiberglass", label: "Fiberglass / GRP", color_tag: "#065f46" },
    MaterialProfile { id: "g10_fr4", label: "G10 / FR4", color_tag: "#047857" },
    MaterialProfile { id: "hdpe", label: "HDPE / Acrylic", color_tag: "#2563eb" },
    MaterialProfile { id: "aluminum_composite", label: "Aluminum Composite", color_tag: "#94a3b8" },
];

/// Read-only access to the materials catalog
pub struct MaterialCatalog;

impl MaterialCatalog {
    /// All materials in display order
    pub fn all() -> &'static [MaterialProfile] {
        MATERIALS
    }

    /// Look up a material by id
    pub fn get(id: &str) -> Option<&'static MaterialProfile> {
        MATERIALS.iter().find(|m| m.id == id)
    }

    /// Look up a material by id, failing with a catalog error
    pub fn require(id: &str) -> Result<&'static MaterialProfile, CatalogError> {
        Self::get(id).ok_or_else(|| CatalogError::UnknownMaterial(id.to_string()))
    }

    /// The default material
    pub fn default_material() -> &'static MaterialProfile {
        &MATERIALS[0]
    }
}
