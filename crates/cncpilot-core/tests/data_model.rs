use cncpilot_core::data::*;
use cncpilot_core::{ParameterError, PipelineAction, PipelineStage};

#[test]
fn test_material_lookup() {
    let granite = MaterialCatalog::get("granite").expect("granite exists");
    assert_eq!(granite.label, "Granite");
    assert_eq!(granite.color_tag, "#6b7280");
    assert_eq!(granite.material_id(), MaterialId("granite".to_string()));

    assert!(MaterialCatalog::get("titanium").is_none());
    assert!(MaterialCatalog::require("titanium").is_err());
    assert_eq!(MaterialCatalog::all().len(), 11);
}

#[test]
fn test_operation_catalog_order() {
    assert_eq!(OPERATIONS.len(), 12);
    assert_eq!(OPERATIONS[0], "3D Surfacing");
    assert_eq!(OPERATIONS[11], "Dovetail Joinery");
    assert!(is_known_operation("Mortise & Tenon"));
}

#[test]
fn test_parameters_new_validates_every_field() {
    let ops = OperationSet::from_names(["Engraving"]).unwrap();
    let stock = StockDimensions::new(300.0, 200.0, 18.0).unwrap();

    let ok = MachiningParameters::new(stock, 2500.0, 16000.0, 3.175, 1.5, ops.clone());
    assert!(ok.is_ok());

    let err = MachiningParameters::new(stock, 2500.0, 30000.0, 3.175, 1.5, ops).unwrap_err();
    assert!(matches!(
        err,
        ParameterError::OutOfRange { name: "spindle_rpm", .. }
    ));
}

#[test]
fn test_stage_invariant_flags() {
    for stage in PipelineStage::all() {
        assert_eq!(stage.has_document(), *stage == PipelineStage::Previewing);
        assert_eq!(stage.parameters_editable(), *stage == PipelineStage::Configuring);
        assert_eq!(stage.accepts_file(), *stage == PipelineStage::Upload);
        assert_eq!(
            stage.selections_editable(),
            matches!(stage, PipelineStage::Upload | PipelineStage::Configuring)
        );
    }
    assert!(!PipelineStage::Upload.has_analysis());
    assert!(!PipelineStage::Analyzing.has_analysis());
    assert!(PipelineStage::Generating.has_analysis());
}

#[test]
fn test_only_listed_transitions_are_legal() {
    let legal = [
        (PipelineStage::Upload, PipelineAction::Analyze),
        (PipelineStage::Analyzing, PipelineAction::FinishAnalysis),
        (PipelineStage::Configuring, PipelineAction::Generate),
        (PipelineStage::Generating, PipelineAction::FinishGeneration),
        (PipelineStage::Previewing, PipelineAction::Reconfigure),
    ];
    let actions = [
        PipelineAction::Analyze,
        PipelineAction::FinishAnalysis,
        PipelineAction::Generate,
        PipelineAction::FinishGeneration,
        PipelineAction::Reconfigure,
    ];
    for stage in PipelineStage::all() {
        for action in actions {
            let expected = legal.contains(&(*stage, action));
            assert_eq!(stage.next(action).is_some(), expected, "{stage} / {action}");
        }
    }
}

#[test]
fn test_stage_labels_follow_progress_strip() {
    let labels: Vec<_> = PipelineStage::all().iter().map(|s| s.label()).collect();
    assert_eq!(labels, ["Upload", "Analyze", "Configure", "Generate", "Export"]);
}
