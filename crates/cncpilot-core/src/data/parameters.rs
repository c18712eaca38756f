//! Machining parameters
//!
//! The user-chosen cutting parameters for a job: stock block size, feed,
//! spindle speed, tool diameter, depth of cut and the selected operations.
//! Every setter validates against the range of the matching control and
//! leaves the previous value in place on rejection.

use serde::{Deserialize, Serialize};

use super::operations::{OperationSet, OperationSetError};
use crate::error::ParameterError;

/// Range of a numeric control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    /// Parameter name used in errors
    pub name: &'static str,
    /// Inclusive minimum
    pub min: f64,
    /// Inclusive maximum
    pub max: f64,
    /// Control step (display hint, not enforced)
    pub step: f64,
}

impl ParameterRange {
    /// Check a value against the range
    pub fn check(&self, value: f64) -> Result<f64, ParameterError> {
        if value.is_finite() && value >= self.min && value <= self.max {
            Ok(value)
        } else {
            Err(ParameterError::OutOfRange {
                name: self.name,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Feed rate control in mm/min
pub const FEED_RATE_RANGE: ParameterRange = ParameterRange {
    name: "feed_rate",
    min: 500.0,
    max: 15000.0,
    step: 100.0,
};

/// Spindle speed control in RPM
pub const SPINDLE_RPM_RANGE: ParameterRange = ParameterRange {
    name: "spindle_rpm",
    min: 3000.0,
    max: 24000.0,
    step: 500.0,
};

/// Tool diameter control in mm
pub const TOOL_DIAMETER_RANGE: ParameterRange = ParameterRange {
    name: "tool_diameter",
    min: 1.0,
    max: 25.0,
    step: 0.5,
};

/// Depth of cut control in mm
pub const DEPTH_OF_CUT_RANGE: ParameterRange = ParameterRange {
    name: "depth_of_cut",
    min: 0.5,
    max: 20.0,
    step: 0.5,
};

/// Raw stock block dimensions in mm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockDimensions {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl StockDimensions {
    /// Create validated stock dimensions
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, ParameterError> {
        let stock = Self { x, y, z };
        stock.validate()?;
        Ok(stock)
    }

    /// Every dimension must be finite and positive
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (axis, value) in [('X', self.x), ('Y', self.y), ('Z', self.z)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParameterError::InvalidStock { axis, value });
            }
        }
        Ok(())
    }
}

impl Default for StockDimensions {
    fn default() -> Self {
        Self {
            x: 600.0,
            y: 400.0,
            z: 50.0,
        }
    }
}

/// The full parameter set for a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachiningParameters {
    stock: StockDimensions,
    feed_rate: f64,
    spindle_rpm: f64,
    tool_diameter: f64,
    depth_of_cut: f64,
    operations: OperationSet,
}

impl Default for MachiningParameters {
    fn default() -> Self {
        Self {
            stock: StockDimensions::default(),
            feed_rate: 3000.0,
            spindle_rpm: 18000.0,
            tool_diameter: 6.0,
            depth_of_cut: 3.0,
            operations: OperationSet::from_names(["Profile Cutting", "Pocket Milling"])
                .unwrap_or_default(),
        }
    }
}

impl MachiningParameters {
    /// Build a validated parameter set
    pub fn new(
        stock: StockDimensions,
        feed_rate: f64,
        spindle_rpm: f64,
        tool_diameter: f64,
        depth_of_cut: f64,
        operations: OperationSet,
    ) -> Result<Self, ParameterError> {
        let params = Self {
            stock,
            feed_rate,
            spindle_rpm,
            tool_diameter,
            depth_of_cut,
            operations,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validate every field against its control range
    pub fn validate(&self) -> Result<(), ParameterError> {
        self.stock.validate()?;
        FEED_RATE_RANGE.check(self.feed_rate)?;
        SPINDLE_RPM_RANGE.check(self.spindle_rpm)?;
        TOOL_DIAMETER_RANGE.check(self.tool_diameter)?;
        DEPTH_OF_CUT_RANGE.check(self.depth_of_cut)?;
        Ok(())
    }

    pub fn stock(&self) -> StockDimensions {
        self.stock
    }

    pub fn feed_rate(&self) -> f64 {
        self.feed_rate
    }

    pub fn spindle_rpm(&self) -> f64 {
        self.spindle_rpm
    }

    pub fn tool_diameter(&self) -> f64 {
        self.tool_diameter
    }

    pub fn depth_of_cut(&self) -> f64 {
        self.depth_of_cut
    }

    pub fn operations(&self) -> &OperationSet {
        &self.operations
    }

    /// Replace the stock dimensions
    pub fn set_stock(&mut self, stock: StockDimensions) -> Result<(), ParameterError> {
        stock.validate()?;
        self.stock = stock;
        Ok(())
    }

    /// Set the roughing feed rate in mm/min
    pub fn set_feed_rate(&mut self, value: f64) -> Result<(), ParameterError> {
        self.feed_rate = FEED_RATE_RANGE.check(value)?;
        Ok(())
    }

    /// Set the spindle speed in RPM
    pub fn set_spindle_rpm(&mut self, value: f64) -> Result<(), ParameterError> {
        self.spindle_rpm = SPINDLE_RPM_RANGE.check(value)?;
        Ok(())
    }

    /// Set the roughing tool diameter in mm
    pub fn set_tool_diameter(&mut self, value: f64) -> Result<(), ParameterError> {
        self.tool_diameter = TOOL_DIAMETER_RANGE.check(value)?;
        Ok(())
    }

    /// Set the per-pass depth of cut in mm
    pub fn set_depth_of_cut(&mut self, value: f64) -> Result<(), ParameterError> {
        self.depth_of_cut = DEPTH_OF_CUT_RANGE.check(value)?;
        Ok(())
    }

    /// Replace the operation selection
    pub fn set_operations(&mut self, operations: OperationSet) {
        self.operations = operations;
    }

    /// Toggle one operation; returns whether it is selected afterwards
    pub fn toggle_operation(&mut self, name: &str) -> Result<bool, OperationSetError> {
        self.operations.toggle(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let params = MachiningParameters::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.feed_rate(), 3000.0);
        assert_eq!(params.operations().len(), 2);
    }

    #[test]
    fn test_rejected_value_keeps_previous() {
        let mut params = MachiningParameters::default();
        assert!(params.set_feed_rate(499.0).is_err());
        assert!(params.set_feed_rate(f64::NAN).is_err());
        assert_eq!(params.feed_rate(), 3000.0);

        params.set_feed_rate(15000.0).unwrap();
        assert_eq!(params.feed_rate(), 15000.0);
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let mut params = MachiningParameters::default();
        assert!(params.set_depth_of_cut(0.5).is_ok());
        assert!(params.set_depth_of_cut(20.0).is_ok());
        assert!(params.set_depth_of_cut(20.5).is_err());
        assert!(params.set_tool_diameter(1.0).is_ok());
        assert!(params.set_spindle_rpm(2999.0).is_err());
    }

    #[test]
    fn test_stock_must_be_positive() {
        assert!(StockDimensions::new(600.0, 0.0, 50.0).is_err());
        assert!(StockDimensions::new(600.0, 400.0, -1.0).is_err());
        assert!(StockDimensions::new(f64::INFINITY, 400.0, 50.0).is_err());

        let err = StockDimensions::new(600.0, 0.0, 50.0).unwrap_err();
        assert_eq!(err, ParameterError::InvalidStock { axis: 'Y', value: 0.0 });
    }
}
