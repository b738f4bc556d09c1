//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through
//! the [`EventSink`](super::ports::EventSink) port. Adapters on the
//! other side decide what to do with them — here they go to the serial
//! log; a diagnostics channel would implement the same trait.

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The control loop has started.
    Started,

    /// The air valve latch changed state.
    AirValveChanged { on: bool },

    /// A dispense pulse began (host-requested duration).
    PulseStarted { duration_ms: u32 },

    /// A dispense pulse reached its deadline and the valve closed.
    PulseFinished,

    /// A pulse was cut short (host sent `0_` or the interlock tripped).
    PulseCancelled,

    /// The stop switch was pressed; valve activity is being overridden.
    SafetyTripped,

    /// The stop switch was released.
    SafetyCleared,

    /// No scale data within the staleness threshold.
    ScaleOffline,

    /// Scale data resumed after an offline period.
    ScaleOnline,
}
