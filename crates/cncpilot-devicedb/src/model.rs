use serde::Serialize;

/// Number of simultaneously controllable axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AxisCount {
    Three,
    Four,
    Five,
}

impl AxisCount {
    pub fn get(self) -> u8 {
        match self {
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }
}

impl std::fmt::Display for AxisCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-axis", self.get())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MachineProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub axes: AxisCount,
    /// Controller dialect tag (e.g. "Haas NGC", "Heidenhain iTNC 640")
    pub controller: &'static str,
    pub vendor: &'static str,
}

impl MachineProfile {
    pub fn axis_count(&self) -> u8 {
        self.axes.get()
    }

    /// Machines with five or more axes get simultaneous contouring passes
    pub fn supports_five_axis(&self) -> bool {
        self.axes >= AxisCount::Five
    }

    /// Heidenhain controls read conversational `.h` programs
    pub fn is_heidenhain(&self) -> bool {
        self.controller.contains("Heidenhain")
    }

    /// File extension for programs posted to this machine
    pub fn program_extension(&self) -> &'static str {
        if self.is_heidenhain() {
            ".h"
        } else {
            ".nc"
        }
    }
}

impl std::fmt::Display for MachineProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.controller)
    }
}
