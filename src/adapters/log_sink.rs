//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger (UART console in production). A diagnostics channel
//! would implement the same trait.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => info!("START | control loop running"),
            AppEvent::AirValveChanged { on } => {
                info!("AIR   | {}", if *on { "ON" } else { "OFF" });
            }
            AppEvent::PulseStarted { duration_ms } => {
                info!("PULSE | open for {duration_ms} ms");
            }
            AppEvent::PulseFinished => info!("PULSE | deadline reached, closed"),
            AppEvent::PulseCancelled => info!("PULSE | cancelled"),
            AppEvent::SafetyTripped => info!("STOP  | interlock tripped"),
            AppEvent::SafetyCleared => info!("STOP  | interlock cleared"),
            AppEvent::ScaleOffline => info!("SCALE | offline (no data within threshold)"),
            AppEvent::ScaleOnline => info!("SCALE | online"),
        }
    }
}
