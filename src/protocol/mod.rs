//! Serial protocol codecs.
//!
//! Pure, byte-fed, non-blocking — no I/O happens here. The adapters
//! drain the UARTs and push whatever arrived into these types each
//! tick.

pub mod command;
pub mod scale;
pub mod telemetry;
