use chrono::NaiveDate;
use cncpilot_camtools::fallback_template::FallbackTemplateGenerator;
use cncpilot_core::data::{
    AnalysisResult, MachiningParameters, MaterialCatalog, OperationSet, StockDimensions,
};
use cncpilot_devicedb::MachineCatalog;
use proptest::prelude::*;

const FIVE_AXIS_HEADER: &str = "(5-AXIS CONTOURING PASS)";

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 4).unwrap()
}

fn generate(machine_id: &str, params: &MachiningParameters) -> String {
    let machine = MachineCatalog::require(machine_id).unwrap();
    let material = MaterialCatalog::require("solid_wood").unwrap();
    let analysis = AnalysisResult::fallback("bracket.step");
    FallbackTemplateGenerator::new(machine, material, params, date())
        .with_analysis(Some(&analysis))
        .generate_text()
}

#[test]
fn test_default_job_three_axis() {
    let gcode = generate("haas_vf2", &MachiningParameters::default());

    assert!(gcode.starts_with("%\nO0001 (bracket)\n"));
    assert!(gcode.contains("(DATE: 11/4/2025)"));
    assert!(gcode.contains("(T1 - D6MM END MILL - ROUGHING)"));
    assert!(gcode.contains("(T2 - D3MM BALL NOSE - FINISHING)"));
    assert!(gcode.contains("M3 S18000 (SPINDLE ON CW)"));
    assert!(gcode.contains("G1 Z-3. F1800\nG1 X605. F3000\nG1 Y6.\n"));
    assert!(gcode.contains("G1 Y12.\nG1 X605.\nG1 Y18.\n"));
    assert!(gcode.contains("G1 Z-6. F1800\n"));
    assert!(gcode.contains("G1 Y405.\n"));
    assert!(gcode.contains("G1 Z-3. F1500\nG41 D1 (CUTTER COMP LEFT)\n"));
    assert!(gcode.contains("G1 Z-50. F1200\nG41 D1\nG1 X602. F2400\nG1 Y402.\n"));
    assert!(gcode.contains("M3 S21600\n"));
    assert!(gcode.contains("G1 Z-45. F900\n"));
    assert!(gcode.contains("WHILE [#100 LE 400] DO1\n"));
    assert!(gcode.contains("G1 X600. F2100\n"));
    assert!(gcode.contains("G98 G81 X50. Y50. Z-25. R5. F200.\n"));
    assert!(gcode.ends_with("M30\n%"));
    assert!(!gcode.contains(FIVE_AXIS_HEADER));
    assert!(!gcode.contains("G68.2"));
    assert_eq!(gcode.lines().count(), 114);
}

#[test]
fn test_five_axis_machine_gets_one_contouring_block() {
    let gcode = generate("dmg_dmu50", &MachiningParameters::default());

    assert_eq!(gcode.matches(FIVE_AXIS_HEADER).count(), 1);
    assert!(gcode.contains("(CONTROLLER: Heidenhain iTNC 640)"));
    assert!(gcode.contains("G1 Z-10. F900\nG1 X200. Y200. B15. C90. F3000\n"));
    assert!(gcode.contains("G69 (CANCEL TILT)\nG0 Z50.\n(----"));
    assert_eq!(gcode.lines().count(), 124);
}

#[test]
fn test_contouring_block_follows_axis_count() {
    let params = MachiningParameters::default();
    for machine in MachineCatalog::all() {
        let gcode = generate(machine.id, &params);
        let expected = usize::from(machine.axis_count() >= 5);
        assert_eq!(
            gcode.matches(FIVE_AXIS_HEADER).count(),
            expected,
            "machine {}",
            machine.id
        );
    }
}

#[test]
fn test_program_name_without_analysis() {
    let machine = MachineCatalog::default_machine();
    let material = MaterialCatalog::require("granite").unwrap();
    let params = MachiningParameters::default();
    let doc = FallbackTemplateGenerator::new(machine, material, &params, date()).generate();

    assert_eq!(doc.lines()[1], "O0001 (PART)");
    assert_eq!(doc.lines()[4], "(MATERIAL: GRANITE)");
}

#[test]
fn test_fractional_parameters() {
    let stock = StockDimensions::new(300.5, 200.0, 18.0).unwrap();
    let ops = OperationSet::from_names(["Engraving"]).unwrap();
    let params = MachiningParameters::new(stock, 2500.0, 16500.0, 6.5, 1.5, ops).unwrap();
    let gcode = generate("laguna_swift", &params);

    assert!(gcode.contains("(T2 - D3.25MM BALL NOSE - FINISHING)"));
    assert!(gcode.contains("G1 Z-1.5 F1500\n"));
    assert!(gcode.contains("G1 X305.5 F2500\n"));
    assert!(gcode.contains("G1 Y3.\n"));
    assert!(gcode.contains("M3 S19800\n"));
    assert!(gcode.contains("G1 Z-16.2 F750\n"));
    assert!(gcode.contains("G1 X300.5 F1750\n"));
}

fn machine_index() -> impl Strategy<Value = usize> {
    0..MachineCatalog::all().len()
}

fn material_index() -> impl Strategy<Value = usize> {
    0..MaterialCatalog::all().len()
}

proptest! {
    #[test]
    fn prop_generation_is_deterministic(
        machine in machine_index(),
        material in material_index(),
        x in 1.0f64..3000.0,
        y in 1.0f64..3000.0,
        z in 1.0f64..300.0,
        feed in 500.0f64..=15000.0,
        spindle in 3000.0f64..=24000.0,
        tool in 1.0f64..=25.0,
        depth in 0.5f64..=20.0,
    ) {
        let machine = &MachineCatalog::all()[machine];
        let material = &MaterialCatalog::all()[material];
        let stock = StockDimensions::new(x, y, z).unwrap();
        let params = MachiningParameters::new(
            stock,
            feed,
            spindle,
            tool,
            depth,
            OperationSet::default(),
        )
        .unwrap();

        let first = FallbackTemplateGenerator::new(machine, material, &params, date()).generate();
        let second = FallbackTemplateGenerator::new(machine, material, &params.clone(), date())
            .generate();
        prop_assert_eq!(first.to_text(), second.to_text());
        prop_assert_eq!(
            first.count_lines_matching(FIVE_AXIS_HEADER),
            usize::from(machine.axis_count() >= 5)
        );
    }
}
