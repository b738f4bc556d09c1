//! Stop and foot switch inputs.
//!
//! Momentary switches to ground with internal pull-ups: a LOW level
//! means pressed. Read directly from hardware every tick.

use crate::drivers::hw_init;

pub struct SwitchInputs {
    stop_gpio: i32,
    foot_gpio: i32,
}

impl SwitchInputs {
    pub fn new(stop_gpio: i32, foot_gpio: i32) -> Self {
        Self {
            stop_gpio,
            foot_gpio,
        }
    }

    /// `(stop_pressed, foot_pressed)` for this instant.
    pub fn read(&mut self) -> (bool, bool) {
        let stop_pressed = !hw_init::gpio_read(self.stop_gpio);
        let foot_pressed = !hw_init::gpio_read(self.foot_gpio);
        (stop_pressed, foot_pressed)
    }
}
