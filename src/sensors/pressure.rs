//! Pressure transducer input.
//!
//! The transducer feeds an ADC1 channel through a resistive divider.
//! The control loop and telemetry carry the raw sample unchanged —
//! conversion to engineering units is the host's concern.

use crate::drivers::hw_init;

pub struct PressureSensor {
    channel: u32,
}

impl PressureSensor {
    pub fn new(channel: u32) -> Self {
        Self { channel }
    }

    /// Latest raw ADC sample. Width follows the converter; a failed
    /// read returns 0 rather than stalling the loop.
    pub fn read(&mut self) -> u16 {
        hw_init::adc1_read(self.channel)
    }
}
