//! Writing generated programs to disk.

use std::fs;
use std::path::{Path, PathBuf};

use cncpilot_core::data::GcodeDocument;
use cncpilot_devicedb::MachineProfile;

use crate::error::{CamToolError, Result};

/// Output file name: `<part>_<machine id><ext>`, `part` when unnamed
pub fn export_file_name(part_name: Option<&str>, machine: &MachineProfile) -> String {
    let part = match part_name {
        Some(name) if !name.is_empty() => name,
        _ => "part",
    };
    // Path separators in remote part names would escape the output directory
    let part: String = part
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{}_{}{}", part, machine.id, machine.program_extension())
}

/// Writes programs into one output directory
#[derive(Debug, Clone)]
pub struct ProgramExporter {
    output_dir: PathBuf,
}

impl ProgramExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write `document` as `file_name` and return the full path
    pub fn write(&self, document: &GcodeDocument, file_name: &str) -> Result<PathBuf> {
        if !self.output_dir.is_dir() {
            return Err(CamToolError::OutputDirMissing(self.output_dir.clone()));
        }
        let path = self.output_dir.join(file_name);
        fs::write(&path, document.to_text()).map_err(|source| CamToolError::Export {
            path: path.clone(),
            source,
        })?;
        tracing::info!("Exported {} lines to {}", document.line_count(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cncpilot_core::data::DocumentSource;
    use cncpilot_devicedb::MachineCatalog;

    #[test]
    fn test_file_name_extension() {
        let haas = MachineCatalog::require("haas_vf2").unwrap();
        let dmg = MachineCatalog::require("dmg_dmu50").unwrap();
        assert_eq!(export_file_name(Some("bracket"), haas), "bracket_haas_vf2.nc");
        assert_eq!(export_file_name(Some("bracket"), dmg), "bracket_dmg_dmu50.h");
        assert_eq!(export_file_name(None, haas), "part_haas_vf2.nc");
        assert_eq!(export_file_name(Some(""), haas), "part_haas_vf2.nc");
        assert_eq!(export_file_name(Some("a/b"), haas), "a_b_haas_vf2.nc");
    }

    #[test]
    fn test_write_program() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = ProgramExporter::new(dir.path());
        let doc = GcodeDocument::from_text("%\nM30\n%", DocumentSource::Fallback);

        let path = exporter.write(&doc, "job.nc").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "%\nM30\n%");
    }

    #[test]
    fn test_write_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = ProgramExporter::new(dir.path().join("missing"));
        let doc = GcodeDocument::from_text("%", DocumentSource::Fallback);

        let err = exporter.write(&doc, "job.nc").unwrap_err();
        assert!(matches!(err, CamToolError::OutputDirMissing(_)));
    }
}
