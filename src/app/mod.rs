//! Application layer — hardware-agnostic control core.
//!
//! Contains the port traits, command/event vocabulary, the control-loop
//! context struct, and the [`AppService`](service::AppService) that runs
//! one control tick.

pub mod commands;
pub mod context;
pub mod events;
pub mod ports;
pub mod service;
