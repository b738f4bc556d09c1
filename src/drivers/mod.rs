//! Hardware drivers: one-shot peripheral bring-up and dumb actuators.

pub mod heartbeat;
pub mod hw_init;
pub mod valve;
pub mod watchdog;
