//! Solenoid valve driver (logic-level MOSFET, active HIGH).
//!
//! Used twice: once for the dispense valve, once for the air valve.
//! This is a dumb actuator — the pulse timing and the safety override
//! both live in the control core.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives a real GPIO via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;

pub struct ValveDriver {
    gpio: i32,
    energised: bool,
}

impl ValveDriver {
    /// A valve starts de-energised; the GPIO is driven low at init.
    pub fn new(gpio: i32) -> Self {
        hw_init::gpio_write(gpio, false);
        Self {
            gpio,
            energised: false,
        }
    }

    pub fn set(&mut self, energised: bool) {
        if energised != self.energised {
            hw_init::gpio_write(self.gpio, energised);
            self.energised = energised;
        }
    }

    pub fn is_energised(&self) -> bool {
        self.energised
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_commanded_state() {
        let mut v = ValveDriver::new(6);
        assert!(!v.is_energised());
        v.set(true);
        assert!(v.is_energised());
        v.set(true); // idempotent
        assert!(v.is_energised());
        v.set(false);
        assert!(!v.is_energised());
    }
}
