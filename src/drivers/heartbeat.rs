//! Heartbeat LED.
//!
//! Free-running visual indicator toggled at half the configured blink
//! period. Has no effect on control logic; it only tells the operator
//! the loop is alive.

use crate::drivers::hw_init;

pub struct Heartbeat {
    gpio: i32,
    period_ms: u32,
    last_toggle_ms: u32,
    lit: bool,
}

impl Heartbeat {
    pub fn new(gpio: i32, period_ms: u32) -> Self {
        Self {
            gpio,
            period_ms,
            last_toggle_ms: 0,
            lit: false,
        }
    }

    /// Call every loop pass with the monotonic millisecond counter.
    pub fn tick(&mut self, now_ms: u32) {
        if now_ms.wrapping_sub(self.last_toggle_ms) >= self.period_ms / 2 {
            self.lit = !self.lit;
            self.last_toggle_ms = now_ms;
            hw_init::gpio_write(self.gpio, self.lit);
        }
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_each_half_period() {
        let mut hb = Heartbeat::new(8, 1_000);
        hb.tick(0);
        let first = hb.is_lit();
        hb.tick(100); // within the half period: no change
        assert_eq!(hb.is_lit(), first);
        hb.tick(500);
        assert_eq!(hb.is_lit(), !first);
    }
}
