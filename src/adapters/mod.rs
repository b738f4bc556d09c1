//! Adapters — implementations of the app port traits over real
//! hardware (ESP-IDF) or in-memory simulation (host).

pub mod hardware;
pub mod log_sink;
pub mod serial;
pub mod time;
