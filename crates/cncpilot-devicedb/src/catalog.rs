//! Built-in machine catalog.

use crate::error::{DeviceError, DeviceResult};
use crate::model::{AxisCount, MachineProfile};

/// Machine selected when nothing else is configured
pub const DEFAULT_MACHINE_ID: &str = "haas_vf2";

const fn machine(
    id: &'static str,
    name: &'static str,
    axes: AxisCount,
    controller: &'static str,
    vendor: &'static str,
) -> MachineProfile {
    MachineProfile {
        id,
        name,
        axes,
        controller,
        vendor,
    }
}

const MACHINES: &[MachineProfile] = &[
    machine("haas_vf2", "Haas VF-2", AxisCount::Three, "Haas NGC", "Haas"),
    machine("haas_vf4ss", "Haas VF-4SS", AxisCount::Four, "Haas NGC", "Haas"),
    machine("fanuc_robodrill", "Fanuc Robodrill", AxisCount::Five, "Fanuc 31i", "Fanuc"),
    machine("mazak_integrex", "Mazak Integrex i-200", AxisCount::Five, "Mazatrol SmoothX", "Mazak"),
    machine("dmg_dmu50", "DMG Mori DMU 50", AxisCount::Five, "Heidenhain iTNC 640", "DMG Mori"),
    machine("biesse_rover", "Biesse Rover A", AxisCount::Five, "Biesse BSolid", "Biesse"),
    machine("homag_bof", "Homag BOF 211", AxisCount::Five, "Woodwop 7", "Homag"),
    machine("multicam_3000", "MultiCam 3000 Series", AxisCount::Three, "MultiCam ePC", "MultiCam"),
    machine("thermwood_cs45", "Thermwood CS 45", AxisCount::Five, "Thermwood CNC", "Thermwood"),
    machine("laguna_swift", "Laguna Swift", AxisCount::Three, "Syntec", "Laguna"),
    machine("shopbot_prsprt", "ShopBot PRSPRTalpha", AxisCount::Three, "ShopBot Control", "ShopBot"),
    machine("onsrud_c_series", "Onsrud C-Series", AxisCount::Five, "Fanuc 0i", "Onsrud"),
];

/// Read-only access to the machine catalog
pub struct MachineCatalog;

impl MachineCatalog {
    /// All machines in display order
    pub fn all() -> &'static [MachineProfile] {
        MACHINES
    }

    pub fn get(id: &str) -> Option<&'static MachineProfile> {
        MACHINES.iter().find(|m| m.id == id)
    }

    pub fn require(id: &str) -> DeviceResult<&'static MachineProfile> {
        Self::get(id).ok_or_else(|| {
            tracing::debug!("Unknown machine id '{}'", id);
            DeviceError::MachineNotFound(id.to_string())
        })
    }

    pub fn default_machine() -> &'static MachineProfile {
        &MACHINES[0]
    }

    /// Machines from one vendor
    pub fn by_vendor<'a>(vendor: &'a str) -> impl Iterator<Item = &'static MachineProfile> + 'a {
        MACHINES.iter().filter(move |m| m.vendor.eq_ignore_ascii_case(vendor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_machine() {
        let m = MachineCatalog::default_machine();
        assert_eq!(m.id, DEFAULT_MACHINE_ID);
        assert_eq!(m.axis_count(), 3);
    }

    #[test]
    fn test_require_unknown() {
        let err = MachineCatalog::require("bridgeport").unwrap_err();
        assert_eq!(err.to_string(), "Machine not found: bridgeport");
    }

    #[test]
    fn test_by_vendor() {
        let haas: Vec<_> = MachineCatalog::by_vendor("haas").map(|m| m.id).collect();
        assert_eq!(haas, ["haas_vf2", "haas_vf4ss"]);
    }
}
