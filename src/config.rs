//! System configuration parameters.
//!
//! All tunable parameters for the fillhead controller. There is no
//! persistent store on this machine — everything is a compile-time
//! default held in RAM for the lifetime of the power cycle.

/// Core system configuration.
#[derive(Debug, Clone)]
pub struct SystemConfig {
    // --- Serial links ---
    /// Host link baud rate (8N1).
    pub host_baud: u32,
    /// Scale link baud rate (8N1).
    pub scale_baud: u32,

    // --- Scale watchdog ---
    /// Milliseconds of scale-link silence before telemetry reports the
    /// scale offline.
    pub scale_stale_ms: u32,

    // --- Indicators ---
    /// Heartbeat LED full blink period (milliseconds).
    pub heartbeat_period_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host_baud: 19_200,
            scale_baud: 9_600,
            scale_stale_ms: 1_000,
            heartbeat_period_ms: 1_000,
        }
    }
}
