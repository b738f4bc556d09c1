//! Shared mutable context threaded through the control loop.
//!
//! `ControlContext` is the single struct the tick reads from and writes
//! to: the latest sensor snapshot, the air-valve latch, and the last
//! applied dispense output. Holding these in one explicit struct keeps
//! a single writer per field with no implicit global state.

// ---------------------------------------------------------------------------
// Sensor snapshot (recomputed every tick, no memory across ticks)
// ---------------------------------------------------------------------------

/// A point-in-time snapshot of every input on the machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SensorSnapshot {
    /// Raw pressure transducer sample, passed through unconverted.
    pub pressure_raw: u16,
    /// Stop switch is pressed.
    pub stop_pressed: bool,
    /// Foot pedal is pressed.
    pub foot_pressed: bool,
}

// ---------------------------------------------------------------------------
// ControlContext
// ---------------------------------------------------------------------------

/// The blackboard the control tick operates on.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlContext {
    /// Latest sensor readings. Updated at the start of each tick.
    pub sensors: SensorSnapshot,

    /// Air valve latch. Set or cleared only by explicit host commands,
    /// or forced OFF by the safety interlock.
    pub air_valve_on: bool,

    /// Dispense valve output as applied at the end of the last tick.
    pub dispense_open: bool,

    /// Monotonic total tick count.
    pub total_ticks: u64,
}

impl ControlContext {
    pub fn new() -> Self {
        Self::default()
    }
}
