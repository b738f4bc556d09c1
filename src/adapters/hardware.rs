//! Hardware adapter — satisfies [`SensorPort`] and [`ValvePort`] over
//! the sensor hub and the two valve drivers.

use crate::app::context::SensorSnapshot;
use crate::app::ports::{SensorPort, ValvePort};
use crate::drivers::valve::ValveDriver;
use crate::sensors::SensorHub;

/// Owns every physical input and output the control core touches.
pub struct HardwareAdapter {
    sensors: SensorHub,
    dispense: ValveDriver,
    air: ValveDriver,
}

impl HardwareAdapter {
    pub fn new(sensors: SensorHub, dispense: ValveDriver, air: ValveDriver) -> Self {
        Self {
            sensors,
            dispense,
            air,
        }
    }

    /// De-energise both valves (shutdown path).
    pub fn all_off(&mut self) {
        self.dispense.set(false);
        self.air.set(false);
    }
}

impl SensorPort for HardwareAdapter {
    fn read_all(&mut self) -> SensorSnapshot {
        self.sensors.read_all()
    }
}

impl ValvePort for HardwareAdapter {
    fn set_dispense(&mut self, open: bool) {
        self.dispense.set(open);
    }

    fn set_air(&mut self, on: bool) {
        self.air.set(on);
    }
}
