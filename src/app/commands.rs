//! Inbound commands to the application service.
//!
//! These are the discrete events the host command decoder produces from
//! the `_`-terminated serial protocol.

/// A complete, decoded host command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// `P_` — latch the air valve ON.
    AirValveOn,
    /// `p_` — latch the air valve OFF.
    AirValveOff,
    /// `<digits>_` — request a dispense pulse of this many milliseconds.
    /// Zero cancels any pending or active pulse. Malformed command text
    /// parses to zero (permissive-zero contract, see the decoder).
    Pulse(u32),
}
