use cncpilot_camtools::tool_list::{build_tool_list, DEFAULT_TOOL_COUNT};
use cncpilot_core::data::{
    AnalysisResult, MachiningParameters, OperationSet, StockDimensions, MAX_TOOL_COUNT,
};

#[test]
fn test_fallback_analysis_gives_four_tools() {
    let analysis = AnalysisResult::fallback("bracket.step");
    let tools = build_tool_list(Some(&analysis), &MachiningParameters::default());

    assert_eq!(tools.len(), 4);
    assert_eq!(tools[0].kind, "End Mill");
    assert_eq!(tools[0].diameter, 6.0);
    assert_eq!(tools[0].operation.as_deref(), Some("Profile Cutting"));
    assert_eq!(tools[1].kind, "Ball Nose");
    assert_eq!(tools[1].diameter, 3.0);
    assert_eq!(tools[1].operation.as_deref(), Some("Pocket Milling"));
    assert_eq!(tools[2].kind, "Drill");
    assert_eq!(tools[2].length, 100.0);
    assert_eq!(tools[3].kind, "V-Bit");
    assert_eq!(tools[3].diameter, 60.0);
    assert_eq!(tools[3].operation.as_deref(), Some("V-Carving"));
    assert!(tools.iter().all(|t| t.material == "Carbide" && t.flutes == 4));
}

#[test]
fn test_zero_tool_count_uses_default() {
    let mut analysis = AnalysisResult::fallback("bracket.step");
    analysis.tool_count = 0;
    let tools = build_tool_list(Some(&analysis), &MachiningParameters::default());
    assert_eq!(tools.len(), DEFAULT_TOOL_COUNT as usize);

    let tools = build_tool_list(None, &MachiningParameters::default());
    assert_eq!(tools.len(), DEFAULT_TOOL_COUNT as usize);
}

#[test]
fn test_entries_beyond_catalog() {
    let mut analysis = AnalysisResult::fallback("bracket.step");
    analysis.tool_count = 7;
    let ops = OperationSet::from_names([
        "3D Surfacing",
        "Profile Cutting",
        "Pocket Milling",
        "Drilling & Boring",
        "5-Axis Contouring",
        "Engraving",
    ])
    .unwrap();
    let params =
        MachiningParameters::new(StockDimensions::default(), 3000.0, 18000.0, 8.0, 3.0, ops)
            .unwrap();
    let tools = build_tool_list(Some(&analysis), &params);

    assert_eq!(tools[4].kind, "Chamfer Mill");
    assert_eq!(tools[4].operation.as_deref(), Some("Chamfering"));
    assert_eq!(tools[5].kind, "End Mill");
    assert_eq!(tools[5].diameter, 8.0);
    assert_eq!(tools[5].length, 75.0);
    assert_eq!(tools[5].operation.as_deref(), Some("Engraving"));
    assert_eq!(tools[6].number, 7);
    assert_eq!(tools[6].operation, None);
}

#[test]
fn test_missing_operations_leave_slot_empty() {
    let params = MachiningParameters::new(
        StockDimensions::default(),
        3000.0,
        18000.0,
        6.0,
        3.0,
        OperationSet::default(),
    )
    .unwrap();
    let tools = build_tool_list(None, &params);

    assert_eq!(tools[0].operation, None);
    assert_eq!(tools[1].operation, None);
    assert_eq!(tools[2].operation.as_deref(), Some("Drilling & Boring"));
}

#[test]
fn test_tool_count_is_capped() {
    let mut analysis = AnalysisResult::fallback("bracket.step");
    analysis.tool_count = u32::MAX;
    let tools = build_tool_list(Some(&analysis), &MachiningParameters::default());
    assert_eq!(tools.len(), MAX_TOOL_COUNT as usize);
    assert_eq!(tools.last().unwrap().number, MAX_TOOL_COUNT);
    assert_eq!(tools.last().unwrap().kind, "End Mill");
}
