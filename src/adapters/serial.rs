//! Serial link adapters for the host and scale UARTs.
//!
//! Both expose the non-blocking poll contract of the port traits: a
//! read drains only what the UART driver has already buffered.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: real UART reads/writes via hw_init helpers.
//! On host/test: reads return nothing and writes are logged, so the
//! simulation loop runs quietly without attached devices.

use log::warn;

use crate::app::ports::{HostLinkPort, ScaleLinkPort};
use crate::drivers::hw_init;
use crate::pins;

// ───────────────────────────────────────────────────────────────
// Host link (bidirectional: commands in, telemetry out)
// ───────────────────────────────────────────────────────────────

pub struct HostSerial {
    port: i32,
}

impl HostSerial {
    pub fn new() -> Self {
        Self {
            port: pins::HOST_UART_PORT,
        }
    }
}

impl Default for HostSerial {
    fn default() -> Self {
        Self::new()
    }
}

impl HostLinkPort for HostSerial {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        hw_init::uart_read(self.port, buf)
    }

    fn write_line(&mut self, line: &str) {
        // A failed or short write loses one telemetry frame; the next
        // tick sends a fresh one, so this is log-and-continue.
        if let Err(e) = hw_init::uart_write(self.port, line.as_bytes()) {
            warn!("host link: {e}");
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Scale link (receive-only)
// ───────────────────────────────────────────────────────────────

pub struct ScaleSerial {
    port: i32,
}

impl ScaleSerial {
    pub fn new() -> Self {
        Self {
            port: pins::SCALE_UART_PORT,
        }
    }
}

impl Default for ScaleSerial {
    fn default() -> Self {
        Self::new()
    }
}

impl ScaleLinkPort for ScaleSerial {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        hw_init::uart_read(self.port, buf)
    }
}
