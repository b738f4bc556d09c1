//! Timed actuator control elements.

pub mod pulse;
