//! Fillhead firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control;
pub mod protocol;
pub mod safety;

pub mod error;
pub mod pins;

// Re-export the ESP-IDF-facing modules so the crate compiles on host
// targets; the hardware implementations are guarded by cfg attributes
// inside.
pub mod adapters;
pub mod drivers;
pub mod sensors;
