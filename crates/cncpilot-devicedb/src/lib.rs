pub mod catalog;
pub mod error;
pub mod model;

pub use catalog::{MachineCatalog, DEFAULT_MACHINE_ID};
pub use error::{DeviceError, DeviceResult};
pub use model::{AxisCount, MachineProfile};
