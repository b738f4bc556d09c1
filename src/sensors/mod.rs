//! Sensor subsystem — individual input drivers and the aggregating
//! [`SensorHub`].
//!
//! The hub owns every input driver and produces a [`SensorSnapshot`]
//! each tick. Nothing here retains state across ticks beyond the last
//! raw readings — switches in particular are recomputed from hardware
//! every pass.

pub mod pressure;
pub mod switches;

use crate::app::context::SensorSnapshot;
use pressure::PressureSensor;
use switches::SwitchInputs;

/// Aggregates all input drivers and produces a unified snapshot.
pub struct SensorHub {
    pub pressure: PressureSensor,
    pub switches: SwitchInputs,
}

impl SensorHub {
    /// Construct a new hub. Pass in pre-built drivers (built in main
    /// where peripheral ownership is established).
    pub fn new(pressure: PressureSensor, switches: SwitchInputs) -> Self {
        Self { pressure, switches }
    }

    /// Read every input and return a unified snapshot.
    pub fn read_all(&mut self) -> SensorSnapshot {
        let pressure_raw = self.pressure.read();
        let (stop_pressed, foot_pressed) = self.switches.read();

        SensorSnapshot {
            pressure_raw,
            stop_pressed,
            foot_pressed,
        }
    }
}
