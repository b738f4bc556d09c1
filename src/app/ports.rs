//! Port traits — the boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (sensors, valves, serial links, event sinks)
//! implement these traits. The [`AppService`](super::service::AppService)
//! consumes them via generics, so the domain core never touches
//! hardware directly and the whole control loop runs under test with
//! mock adapters.

use super::events::AppEvent;
use crate::app::context::SensorSnapshot;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this once per tick.
pub trait SensorPort {
    /// Read the pressure transducer and both switches.
    fn read_all(&mut self) -> SensorSnapshot;
}

// ───────────────────────────────────────────────────────────────
// Valve port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command the valves.
pub trait ValvePort {
    /// Assert or deassert the dispense valve output.
    fn set_dispense(&mut self, open: bool);

    /// Energise or de-energise the air valve output.
    fn set_air(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Serial link ports (non-blocking polls, never wait)
// ───────────────────────────────────────────────────────────────

/// Bidirectional host link. `read` returns only bytes already buffered
/// by the UART driver — it must never block the control loop.
pub trait HostLinkPort {
    /// Drain up to `buf.len()` buffered bytes; returns the count read.
    fn read(&mut self, buf: &mut [u8]) -> usize;

    /// Queue one telemetry line for transmission.
    fn write_line(&mut self, line: &str);
}

/// Receive-only scale link, same non-blocking contract.
pub trait ScaleLinkPort {
    /// Drain up to `buf.len()` buffered bytes; returns the count read.
    fn read(&mut self, buf: &mut [u8]) -> usize;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
