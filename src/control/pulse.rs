//! Dispense valve pulse controller.
//!
//! A two-state machine over `{Idle, Pulsing}`:
//!
//! | State   | Output     | Transition                                      |
//! |---------|------------|-------------------------------------------------|
//! | Idle    | deasserted | non-zero request `d` → Pulsing for `d` ms       |
//! | Pulsing | asserted   | deadline reached, zero request, or cancel → Idle|
//!
//! A new request while pulsing *replaces* the deadline, computed from
//! the tick it arrives on — pulses never accumulate.
//!
//! All timing lives in one unsigned `u32` millisecond domain and every
//! elapsed-time check is `now.wrapping_sub(started)`, so counter
//! rollover after ~49.7 days of continuous operation cannot produce a
//! spurious long-open or long-closed valve.

/// Dispense valve state. The deadline is carried as start + duration so
/// the expiry check is a wraparound-safe subtraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValveState {
    Idle,
    Pulsing { started_ms: u32, duration_ms: u32 },
}

/// Owns the dispense valve output decision.
pub struct PulseController {
    state: ValveState,
}

impl Default for PulseController {
    fn default() -> Self {
        Self::new()
    }
}

impl PulseController {
    pub fn new() -> Self {
        Self {
            state: ValveState::Idle,
        }
    }

    /// Apply a host pulse request received at `now_ms`. Zero cancels;
    /// non-zero (re)opens for `duration_ms` from now.
    pub fn request(&mut self, duration_ms: u32, now_ms: u32) {
        self.state = if duration_ms == 0 {
            ValveState::Idle
        } else {
            ValveState::Pulsing {
                started_ms: now_ms,
                duration_ms,
            }
        };
    }

    /// Force the valve closed immediately (safety interlock).
    pub fn cancel(&mut self) {
        self.state = ValveState::Idle;
    }

    /// Advance the state machine one tick. Returns the valve output:
    /// `true` while the deadline is in the future.
    pub fn tick(&mut self, now_ms: u32) -> bool {
        if let ValveState::Pulsing {
            started_ms,
            duration_ms,
        } = self.state
        {
            if now_ms.wrapping_sub(started_ms) >= duration_ms {
                self.state = ValveState::Idle;
            }
        }
        self.is_open()
    }

    /// Current valve output.
    pub fn is_open(&self) -> bool {
        matches!(self.state, ValveState::Pulsing { .. })
    }

    pub fn state(&self) -> ValveState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_by_default() {
        let mut pc = PulseController::new();
        assert!(!pc.is_open());
        assert!(!pc.tick(0));
    }

    #[test]
    fn pulse_opens_then_closes_at_deadline() {
        let mut pc = PulseController::new();
        pc.request(200, 1_000);
        assert!(pc.tick(1_000));
        assert!(pc.tick(1_199));
        assert!(!pc.tick(1_200)); // deadline reached
        assert!(!pc.tick(1_201));
    }

    #[test]
    fn zero_request_cancels_active_pulse() {
        let mut pc = PulseController::new();
        pc.request(5_000, 0);
        assert!(pc.tick(10));
        pc.request(0, 20);
        assert!(!pc.tick(20));
    }

    #[test]
    fn new_request_replaces_deadline_not_accumulates() {
        let mut pc = PulseController::new();
        pc.request(1_000, 0);
        assert!(pc.tick(900));
        // Re-request at t=900: deadline becomes 900+500, not 1000+500.
        pc.request(500, 900);
        assert!(pc.tick(1_399));
        assert!(!pc.tick(1_400));
    }

    #[test]
    fn cancel_closes_regardless_of_deadline() {
        let mut pc = PulseController::new();
        pc.request(60_000, 0);
        assert!(pc.tick(1));
        pc.cancel();
        assert!(!pc.is_open());
        assert!(!pc.tick(2));
    }

    #[test]
    fn deadline_spanning_clock_wraparound() {
        let mut pc = PulseController::new();
        let start = u32::MAX - 50;
        pc.request(200, start);
        assert!(pc.tick(start));
        // 100 ms later the counter has wrapped to 49.
        assert!(pc.tick(start.wrapping_add(100)));
        // 200 ms after start the pulse expires.
        assert!(!pc.tick(start.wrapping_add(200)));
    }
}
