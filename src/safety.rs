//! Safety interlock.
//!
//! The interlock runs **every tick before valve logic is applied** and
//! is a pure function of the stop switch: while pressed, any pending or
//! active dispense pulse is cancelled immediately and the air valve is
//! forced OFF. It keeps no deadline and no history — releasing the
//! switch does not resume a cancelled pulse; the host must re-request.
//!
//! The only retained state is the previous verdict, used to log edges.

use log::{info, warn};

/// Stop-switch interlock, re-evaluated fresh each tick.
pub struct SafetyInterlock {
    tripped: bool,
}

impl Default for SafetyInterlock {
    fn default() -> Self {
        Self::new()
    }
}

impl SafetyInterlock {
    pub fn new() -> Self {
        Self { tripped: false }
    }

    /// Evaluate the stop switch for this tick. Returns `true` while the
    /// override is in force.
    pub fn evaluate(&mut self, stop_pressed: bool) -> bool {
        if stop_pressed && !self.tripped {
            warn!("SAFETY: stop switch pressed — valves overridden");
        } else if !stop_pressed && self.tripped {
            info!("SAFETY: stop switch released");
        }
        self.tripped = stop_pressed;
        stop_pressed
    }

    /// Verdict from the most recent evaluation.
    pub fn is_tripped(&self) -> bool {
        self.tripped
    }
}
