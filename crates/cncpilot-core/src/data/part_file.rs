//! Uploaded part file
//!
//! Only the file name and size matter; the content is never decoded.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::InputError;

/// Accepted CAD exchange extensions (lowercase, without the dot)
pub const ALLOWED_EXTENSIONS: &[&str] = &["step", "stp", "iges", "igs"];

/// A part file accepted for analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartFile {
    name: String,
    size_bytes: u64,
}

impl PartFile {
    /// Accept a file by name and size, rejecting unsupported extensions
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Result<Self, InputError> {
        let name = name.into();
        if !has_allowed_extension(&name) {
            return Err(InputError::UnsupportedExtension { file_name: name });
        }
        Ok(Self { name, size_bytes })
    }

    /// Accept a file on disk, reading only its metadata
    pub fn from_path(path: &Path) -> Result<Self, InputError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !has_allowed_extension(&name) {
            return Err(InputError::UnsupportedExtension { file_name: name });
        }
        let metadata = std::fs::metadata(path).map_err(|e| InputError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            name,
            size_bytes: metadata.len(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Size in KB with one decimal, as shown to the user
    pub fn size_kb_display(&self) -> String {
        format!("{:.1}", self.size_bytes as f64 / 1024.0)
    }

    /// Upper-cased extension (`STEP`, `IGS`, ...)
    pub fn format_label(&self) -> String {
        extension_of(&self.name).unwrap_or_default().to_uppercase()
    }
}

/// Whether the file name ends in one of [`ALLOWED_EXTENSIONS`] (case-insensitive)
pub fn has_allowed_extension(file_name: &str) -> bool {
    extension_of(file_name)
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn extension_of(file_name: &str) -> Option<&str> {
    file_name.rsplit_once('.').map(|(_, ext)| ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extensions_case_insensitive() {
        assert!(has_allowed_extension("bracket.step"));
        assert!(has_allowed_extension("BRACKET.STP"));
        assert!(has_allowed_extension("panel.Iges"));
        assert!(has_allowed_extension("panel.igs"));
        assert!(!has_allowed_extension("part.dxf"));
        assert!(!has_allowed_extension("step"));
        assert!(!has_allowed_extension("part.step.zip"));
    }

    #[test]
    fn test_rejects_dxf() {
        let err = PartFile::new("part.dxf", 10).unwrap_err();
        assert!(matches!(err, InputError::UnsupportedExtension { .. }));
    }

    #[test]
    fn test_size_display() {
        let file = PartFile::new("bracket.step", 204800).unwrap();
        assert_eq!(file.size_kb_display(), "200.0");
        assert_eq!(file.format_label(), "STEP");
    }
}
