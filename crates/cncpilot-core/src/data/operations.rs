//! Machining operation catalog and the ordered selection built from it.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, ParameterError};

/// Every operation a job can request, in display order
pub const OPERATIONS: &[&str] = &[
    "3D Surfacing",
    "Profile Cutting",
    "Pocket Milling",
    "Drilling & Boring",
    "5-Axis Contouring",
    "Engraving",
    "V-Carving",
    "Inlay Routing",
    "Mortise & Tenon",
    "Edge Profiling",
    "Fluting",
    "Dovetail Joinery",
];

/// Check whether a name is in the operation catalog
pub fn is_known_operation(name: &str) -> bool {
    OPERATIONS.contains(&name)
}

/// Ordered set of selected operations
///
/// Preserves selection order, rejects duplicates and names outside the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct OperationSet(Vec<String>);

impl OperationSet {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from names, keeping their order
    pub fn from_names<I, S>(names: I) -> Result<Self, OperationSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for name in names {
            set.insert(name)?;
        }
        Ok(set)
    }

    /// Append an operation
    pub fn insert(&mut self, name: impl Into<String>) -> Result<(), OperationSetError> {
        let name = name.into();
        if !is_known_operation(&name) {
            return Err(CatalogError::UnknownOperation(name).into());
        }
        if self.contains(&name) {
            return Err(ParameterError::DuplicateOperation(name).into());
        }
        self.0.push(name);
        Ok(())
    }

    /// Remove an operation, returning whether it was selected
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|op| op != name);
        before != self.0.len()
    }

    /// Select the operation if absent, deselect it if present.
    ///
    /// Returns `true` when the operation is selected afterwards.
    pub fn toggle(&mut self, name: &str) -> Result<bool, OperationSetError> {
        if self.remove(name) {
            Ok(false)
        } else {
            self.insert(name)?;
            Ok(true)
        }
    }

    /// Whether the operation is selected
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|op| op == name)
    }

    /// Selected operation at position `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Iterate in selection order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of selected operations
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Selected names joined with `", "`
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

/// Why an operation could not be added to a selection
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OperationSetError {
    /// The name is not in the catalog
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The name is already selected
    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

impl From<OperationSetError> for crate::error::Error {
    fn from(err: OperationSetError) -> Self {
        match err {
            OperationSetError::Catalog(e) => e.into(),
            OperationSetError::Parameter(e) => e.into(),
        }
    }
}

impl TryFrom<Vec<String>> for OperationSet {
    type Error = OperationSetError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_names(names)
    }
}

impl From<OperationSet> for Vec<String> {
    fn from(set: OperationSet) -> Self {
        set.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_appends_then_removes() {
        let mut ops = OperationSet::from_names(["Profile Cutting", "Pocket Milling"]).unwrap();
        assert!(ops.toggle("Engraving").unwrap());
        assert_eq!(ops.get(2), Some("Engraving"));
        assert!(!ops.toggle("Profile Cutting").unwrap());
        assert_eq!(ops.joined(), "Pocket Milling, Engraving");
    }

    #[test]
    fn test_rejects_duplicates_and_unknown() {
        let mut ops = OperationSet::new();
        ops.insert("Fluting").unwrap();
        assert!(matches!(
            ops.insert("Fluting"),
            Err(OperationSetError::Parameter(ParameterError::DuplicateOperation(_)))
        ));
        assert!(matches!(
            ops.insert("Welding"),
            Err(OperationSetError::Catalog(CatalogError::UnknownOperation(_)))
        ));
        assert_eq!(ops.len(), 1);
    }

    #[test]
    fn test_deserialize_rejects_duplicates() {
        let json = r#"["Engraving", "Engraving"]"#;
        assert!(serde_json::from_str::<OperationSet>(json).is_err());
        let ok: OperationSet = serde_json::from_str(r#"["Fluting", "V-Carving"]"#).unwrap();
        assert_eq!(ok.get(1), Some("V-Carving"));
    }
}
