//! Built-in program template
//!
//! Produces a complete, deterministic G-code program from the job inputs
//! when the remote generation service is unavailable. The output depends
//! only on the generator's inputs; the date is passed in rather than read
//! from the clock.

use chrono::NaiveDate;
use cncpilot_core::data::{AnalysisResult, DocumentSource, GcodeDocument, MachiningParameters};
use cncpilot_core::MaterialProfile;
use cncpilot_devicedb::MachineProfile;

const SEPARATOR: &str = "(-------------------------------------------)";

/// Round half up, the way the program's feed and speed fields are rounded
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Shortest decimal form; integral values print without a fractional part
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Coordinate form: integral values keep a trailing decimal point (`50.`)
pub fn format_coordinate(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}.", format_number(value))
    } else {
        format_number(value)
    }
}

/// Generator for the fallback program
pub struct FallbackTemplateGenerator<'a> {
    machine: &'a MachineProfile,
    material: &'a MaterialProfile,
    params: &'a MachiningParameters,
    part_name: Option<&'a str>,
    date: NaiveDate,
}

impl<'a> FallbackTemplateGenerator<'a> {
    pub fn new(
        machine: &'a MachineProfile,
        material: &'a MaterialProfile,
        params: &'a MachiningParameters,
        date: NaiveDate,
    ) -> Self {
        Self {
            machine,
            material,
            params,
            part_name: None,
            date,
        }
    }

    /// Take the program name from an analysis result
    pub fn with_analysis(mut self, analysis: Option<&'a AnalysisResult>) -> Self {
        self.part_name = analysis.map(|a| a.part_name.as_str());
        self
    }

    fn program_name(&self) -> &str {
        match self.part_name {
            Some(name) if !name.is_empty() => name,
            _ => "PART",
        }
    }

    /// Generate the program as a document
    pub fn generate(&self) -> GcodeDocument {
        GcodeDocument::from_text(&self.generate_text(), DocumentSource::Fallback)
    }

    /// Generate the program text, `%` to `%`, without a trailing newline
    pub fn generate_text(&self) -> String {
        let mut gcode = String::new();

        self.write_header(&mut gcode);
        self.write_setup(&mut gcode);
        self.write_roughing(&mut gcode);
        self.write_pocket(&mut gcode);
        self.write_profile(&mut gcode);
        if self.machine.supports_five_axis() {
            self.write_five_axis(&mut gcode);
        }
        self.write_finishing(&mut gcode);
        self.write_drilling(&mut gcode);
        self.write_footer(&mut gcode);

        tracing::debug!(
            "Fallback program for {} on {}: {} bytes",
            self.program_name(),
            self.machine.id,
            gcode.len()
        );
        gcode
    }

    fn write_header(&self, gcode: &mut String) {
        let tool = self.params.tool_diameter();

        gcode.push_str("%\n");
        gcode.push_str(&format!("O0001 ({})\n", self.program_name()));
        gcode.push_str(&format!("(MACHINE: {})\n", self.machine.name));
        gcode.push_str(&format!("(CONTROLLER: {})\n", self.machine.controller));
        gcode.push_str(&format!(
            "(MATERIAL: {})\n",
            self.material.label.to_uppercase()
        ));
        gcode.push_str(&format!("(DATE: {})\n", self.date.format("%-m/%-d/%Y")));
        gcode.push_str("(GENERATED BY: AI CNC PLATFORM)\n");
        gcode.push_str(SEPARATOR);
        gcode.push('\n');
        gcode.push_str("(TOOL LIST:)\n");
        gcode.push_str(&format!(
            "(T1 - D{}MM END MILL - ROUGHING)\n",
            format_number(tool)
        ));
        gcode.push_str(&format!(
            "(T2 - D{}MM BALL NOSE - FINISHING)\n",
            format_number(tool / 2.0)
        ));
        gcode.push_str("(T3 - D8MM DRILL - HOLES)\n");
        gcode.push_str(SEPARATOR);
        gcode.push('\n');
    }

    fn write_setup(&self, gcode: &mut String) {
        gcode.push_str("G90 G94 G17\n");
        gcode.push_str("G21 (METRIC)\n");
        gcode.push_str("G28 G91 Z0.\n");
        gcode.push_str("G90\n");
        gcode.push_str(SEPARATOR);
        gcode.push('\n');
        gcode.push_str("(WORK COORDINATE SETUP)\n");
        gcode.push_str("G54\n");
        gcode.push_str("G0 X0. Y0.\n");
        gcode.push_str("G43 H1 Z50. (TOOL LENGTH COMPENSATION)\n");
        gcode.push_str(&format!(
            "M3 S{} (SPINDLE ON CW)\n",
            format_number(self.params.spindle_rpm())
        ));
        gcode.push_str(SEPARATOR);
        gcode.push('\n');
    }

    fn write_roughing(&self, gcode: &mut String) {
        let p = self.params;
        let doc = p.depth_of_cut();
        let stock = p.stock();
        let feed = format_number(p.feed_rate());
        let plunge = format_number(round_half_up(p.feed_rate() * 0.6));
        let far_x = format_coordinate(stock.x + 5.0);

        gcode.push_str("(ROUGHING PASS - T1)\n");
        gcode.push_str("T1 M6\n");
        gcode.push_str("G43 H1 Z50.\n");
        gcode.push_str(&format!("M3 S{}\n", format_number(p.spindle_rpm())));
        gcode.push_str("G0 X-5. Y-5. Z5.\n");
        gcode.push_str(&format!("G1 Z-{} F{}\n", format_coordinate(doc), plunge));
        gcode.push_str(&format!("G1 X{} F{}\n", far_x, feed));
        gcode.push_str(&format!("G1 Y{}\n", format_coordinate(doc * 2.0)));
        gcode.push_str("G1 X-5.\n");
        gcode.push_str(&format!("G1 Y{}\n", format_coordinate(doc * 4.0)));
        gcode.push_str(&format!("G1 X{}\n", far_x));
        gcode.push_str(&format!("G1 Y{}\n", format_coordinate(doc * 6.0)));
        gcode.push_str("G1 X-5.\n");
        gcode.push_str("G0 Z5.\n");

        // Second level across the full stock
        gcode.push_str(&format!(
            "G1 Z-{} F{}\n",
            format_coordinate(doc * 2.0),
            plunge
        ));
        gcode.push_str(&format!("G1 X{} F{}\n", far_x, feed));
        gcode.push_str(&format!("G1 Y{}\n", format_coordinate(stock.y + 5.0)));
        gcode.push_str("G1 X-5.\n");
        gcode.push_str("G1 Y0.\n");
        gcode.push_str("G0 Z50.\n");
        gcode.push_str(SEPARATOR);
        gcode.push('\n');
    }

    fn write_pocket(&self, gcode: &mut String) {
        let p = self.params;
        let doc = p.depth_of_cut();
        let plunge = format_number(round_half_up(p.feed_rate() * 0.5));

        gcode.push_str("(POCKET MILLING)\n");
        gcode.push_str("G0 X50. Y50.\n");
        gcode.push_str(&format!("G1 Z-{} F{}\n", format_coordinate(doc), plunge));
        gcode.push_str("G41 D1 (CUTTER COMP LEFT)\n");
        gcode.push_str(&format!("G1 X150. F{}\n", format_number(p.feed_rate())));
        gcode.push_str("G1 Y150.\n");
        gcode.push_str("G1 X50.\n");
        gcode.push_str("G1 Y50.\n");
        gcode.push_str("G40 (CANCEL COMP)\n");
        gcode.push_str(&format!(
            "G1 Z-{} F{}\n",
            format_coordinate(doc * 2.0),
            plunge
        ));
        gcode.push_str("G41 D1\n");
        gcode.push_str("G1 X150.\n");
        gcode.push_str("G1 Y150.\n");
        gcode.push_str("G1 X50.\n");
        gcode.push_str("G1 Y50.\n");
        gcode.push_str("G40\n");
        gcode.push_str("G0 Z50.\n");
        gcode.push_str(SEPARATOR);
        gcode.push('\n');
    }

    fn write_profile(&self, gcode: &mut String) {
        let p = self.params;
        let stock = p.stock();

        gcode.push_str("(PROFILE PASS)\n");
        gcode.push_str("G0 X-2. Y-2.\n");
        gcode.push_str(&format!(
            "G1 Z-{} F{}\n",
            format_coordinate(stock.z),
            format_number(round_half_up(p.feed_rate() * 0.4))
        ));
        gcode.push_str("G41 D1\n");
        gcode.push_str(&format!(
            "G1 X{} F{}\n",
            format_coordinate(stock.x + 2.0),
            format_number(round_half_up(p.feed_rate() * 0.8))
        ));
        gcode.push_str(&format!("G1 Y{}\n", format_coordinate(stock.y + 2.0)));
        gcode.push_str("G1 X-2.\n");
        gcode.push_str("G1 Y-2.\n");
        gcode.push_str("G40\n");
        gcode.push_str("G0 Z50.\n");
        gcode.push_str(SEPARATOR);
        gcode.push('\n');
    }

    fn write_five_axis(&self, gcode: &mut String) {
        let p = self.params;

        gcode.push_str("(5-AXIS CONTOURING PASS)\n");
        gcode.push_str("G0 X100. Y100.\n");
        gcode.push_str("G68.2 X0 Y0 Z0 I0 J0 K0 (WORKPLANE TILT)\n");
        gcode.push_str("G0 B15. C45. (ROTARY AXES)\n");
        gcode.push_str(&format!(
            "G1 Z-10. F{}\n",
            format_number(round_half_up(p.feed_rate() * 0.3))
        ));
        gcode.push_str(&format!(
            "G1 X200. Y200. B15. C90. F{}\n",
            format_number(p.feed_rate())
        ));
        gcode.push_str("G1 X300. Y150. B10. C135.\n");
        gcode.push_str("G1 X100. Y100. B0. C0.\n");
        gcode.push_str("G69 (CANCEL TILT)\n");
        gcode.push_str("G0 Z50.\n");
    }

    fn write_finishing(&self, gcode: &mut String) {
        let p = self.params;
        let stock = p.stock();

        gcode.push_str(SEPARATOR);
        gcode.push('\n');
        gcode.push_str("(TOOL CHANGE - FINISHING TOOL)\n");
        gcode.push_str("M5\n");
        gcode.push_str("G28 G91 Z0.\n");
        gcode.push_str("G90\n");
        gcode.push_str("T2 M6\n");
        gcode.push_str("G43 H2 Z50.\n");
        gcode.push_str(&format!(
            "M3 S{}\n",
            format_number(round_half_up(p.spindle_rpm() * 1.2))
        ));
        gcode.push_str("(FINISHING PASS - BALL NOSE)\n");
        gcode.push_str("G0 X0. Y0.\n");
        gcode.push_str(&format!(
            "G1 Z-{} F{}\n",
            format_coordinate(stock.z * 0.9),
            format_number(round_half_up(p.feed_rate() * 0.3))
        ));
        gcode.push_str("(RASTER FINISHING)\n");
        gcode.push_str("#100 = 0.\n");
        gcode.push_str(&format!(
            "WHILE [#100 LE {}] DO1\n",
            format_number(stock.y)
        ));
        gcode.push_str("G0 X0. Y#100.\n");
        gcode.push_str(&format!(
            "G1 X{} F{}\n",
            format_coordinate(stock.x),
            format_number(round_half_up(p.feed_rate() * 0.7))
        ));
        gcode.push_str("#100 = #100 + 1.\n");
        gcode.push_str("END1\n");
        gcode.push_str("G0 Z50.\n");
        gcode.push_str(SEPARATOR);
        gcode.push('\n');
    }

    fn write_drilling(&self, gcode: &mut String) {
        gcode.push_str("(DRILLING CYCLE)\n");
        gcode.push_str("T3 M6\n");
        gcode.push_str("G43 H3 Z50.\n");
        gcode.push_str("M3 S3000\n");
        gcode.push_str("G98 G81 X50. Y50. Z-25. R5. F200.\n");
        for (x, y) in [(100, 50), (150, 50), (50, 100), (100, 100), (150, 100)] {
            gcode.push_str(&format!("X{}. Y{}.\n", x, y));
        }
        gcode.push_str("G80 (CANCEL CYCLE)\n");
        gcode.push_str("G0 Z50.\n");
        gcode.push_str(SEPARATOR);
        gcode.push('\n');
    }

    fn write_footer(&self, gcode: &mut String) {
        gcode.push_str("(PROGRAM END)\n");
        gcode.push_str("M5 (SPINDLE STOP)\n");
        gcode.push_str("M9 (COOLANT OFF)\n");
        gcode.push_str("G28 G91 Z0.\n");
        gcode.push_str("G28 X0. Y0.\n");
        gcode.push_str("M30\n");
        gcode.push('%');
    }
}
