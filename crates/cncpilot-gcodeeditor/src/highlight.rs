use serde::Serialize;

/// Syntax class of one G-code line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LineClass {
    Comment,
    ToolChange,
    MCode,
    Rapid,
    Motion,
    ProgramDelimiter,
    Parametric,
    Plain,
}

impl LineClass {
    pub const ALL: [LineClass; 8] = [
        Self::Comment,
        Self::ToolChange,
        Self::MCode,
        Self::Rapid,
        Self::Motion,
        Self::ProgramDelimiter,
        Self::Parametric,
        Self::Plain,
    ];

    /// Display colour as `#rrggbb`
    pub fn color(self) -> &'static str {
        match self {
            Self::Comment => "#6b7280",
            Self::ToolChange => "#f59e0b",
            Self::MCode => "#a78bfa",
            Self::Rapid => "#34d399",
            Self::Motion => "#60a5fa",
            Self::ProgramDelimiter => "#f87171",
            Self::Parametric => "#fb923c",
            Self::Plain => "#e2e8f0",
        }
    }

    /// Display colour as RGB components
    pub fn rgb(self) -> (u8, u8, u8) {
        let hex = &self.color()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::ToolChange => "tool-change",
            Self::MCode => "m-code",
            Self::Rapid => "rapid",
            Self::Motion => "motion",
            Self::ProgramDelimiter => "delimiter",
            Self::Parametric => "parametric",
            Self::Plain => "plain",
        }
    }
}

impl std::fmt::Display for LineClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Classify a line by its leading characters.
///
/// Rules are checked in order and the first match wins. Matching is on the
/// raw, case-sensitive prefix, so `G00` counts as rapid and `G28` as motion.
pub fn classify(line: &str) -> LineClass {
    if line.starts_with('(') {
        LineClass::Comment
    } else if line.starts_with('T') {
        LineClass::ToolChange
    } else if line.starts_with('M') {
        LineClass::MCode
    } else if line.starts_with("G0") {
        LineClass::Rapid
    } else if ["G1", "G2", "G3"].iter().any(|p| line.starts_with(p)) {
        LineClass::Motion
    } else if line.starts_with('%') {
        LineClass::ProgramDelimiter
    } else if ["#", "WHILE", "END"].iter().any(|p| line.starts_with(p)) {
        LineClass::Parametric
    } else {
        LineClass::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_rules() {
        assert_eq!(classify("(ROUGHING PASS - T1)"), LineClass::Comment);
        assert_eq!(classify("T1 M6"), LineClass::ToolChange);
        assert_eq!(classify("M30"), LineClass::MCode);
        assert_eq!(classify("G0 Z50."), LineClass::Rapid);
        assert_eq!(classify("G1 X605. F3000"), LineClass::Motion);
        assert_eq!(classify("G2 X1 Y1 I1"), LineClass::Motion);
        assert_eq!(classify("%"), LineClass::ProgramDelimiter);
        assert_eq!(classify("#100 = 0."), LineClass::Parametric);
        assert_eq!(classify("WHILE [#100 LE 400] DO1"), LineClass::Parametric);
        assert_eq!(classify("END1"), LineClass::Parametric);
        assert_eq!(classify("X100. Y50."), LineClass::Plain);
        assert_eq!(classify(""), LineClass::Plain);
    }

    #[test]
    fn test_raw_prefix_semantics() {
        assert_eq!(classify("G00 X0"), LineClass::Rapid);
        assert_eq!(classify("G01 X0"), LineClass::Rapid);
        assert_eq!(classify("G28 G91 Z0."), LineClass::Motion);
        assert_eq!(classify("G90 G94 G17"), LineClass::Plain);
        assert_eq!(classify("g1 x0"), LineClass::Plain);
        assert_eq!(classify(" T1"), LineClass::Plain);
    }

    #[test]
    fn test_rgb() {
        assert_eq!(LineClass::Rapid.rgb(), (0x34, 0xd3, 0x99));
        assert_eq!(LineClass::Plain.rgb(), (0xe2, 0xe8, 0xf0));
    }
}
