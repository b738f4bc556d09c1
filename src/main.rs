//! Fillhead firmware — main entry point.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                  │
//! │                                                           │
//! │  HardwareAdapter     HostSerial / ScaleSerial             │
//! │  (Sensor+ValvePort)  (link ports)                         │
//! │  LogEventSink        TimeAdapter                          │
//! │                                                           │
//! │  ──────────────── Port Trait Boundary ─────────────────   │
//! │                                                           │
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │            AppService (pure logic)                  │  │
//! │  │  decoder · pulse timer · interlock · scale watchdog │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! │                                                           │
//! │  Heartbeat LED · Task watchdog                            │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! The loop has no fixed tick rate: it runs as fast as possible and
//! every deadline is a wall-clock comparison against the monotonic
//! millisecond counter.

#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use fillhead::adapters::hardware::HardwareAdapter;
use fillhead::adapters::log_sink::LogEventSink;
use fillhead::adapters::serial::{HostSerial, ScaleSerial};
use fillhead::adapters::time::TimeAdapter;
use fillhead::app::service::AppService;
use fillhead::config::SystemConfig;
use fillhead::drivers::heartbeat::Heartbeat;
use fillhead::drivers::hw_init;
use fillhead::drivers::valve::ValveDriver;
use fillhead::drivers::watchdog::Watchdog;
use fillhead::pins;
use fillhead::sensors::pressure::PressureSensor;
use fillhead::sensors::switches::SwitchInputs;
use fillhead::sensors::SensorHub;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("fillhead v{} starting", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration + peripherals ────────────────────────
    let config = SystemConfig::default();

    if let Err(e) = hw_init::init_peripherals(&config) {
        // Peripheral init failure is critical — log and halt.
        // The watchdog reset path takes over on real hardware.
        log::error!("HAL init failed: {e} — halting");
        #[allow(clippy::empty_loop)]
        loop {}
    }
    let watchdog = Watchdog::new();

    // ── 3. Construct adapters ─────────────────────────────────
    let sensor_hub = SensorHub::new(
        PressureSensor::new(pins::PRESSURE_ADC_CHANNEL),
        SwitchInputs::new(pins::STOP_SWITCH_GPIO, pins::FOOT_SWITCH_GPIO),
    );
    let mut hw = HardwareAdapter::new(
        sensor_hub,
        ValveDriver::new(pins::DISPENSE_VALVE_GPIO),
        ValveDriver::new(pins::AIR_VALVE_GPIO),
    );
    let mut host = HostSerial::new();
    let mut scale = ScaleSerial::new();
    let mut sink = LogEventSink::new();
    let time = TimeAdapter::new();
    let mut heartbeat = Heartbeat::new(pins::HEARTBEAT_LED_GPIO, config.heartbeat_period_ms);

    // ── 4. Construct the app service ──────────────────────────
    let mut app = AppService::new(&config);
    app.start(&mut sink);

    info!("System ready. Entering control loop.");

    // ── 5. Control loop ───────────────────────────────────────
    loop {
        let now_ms = time.uptime_ms();

        app.tick(now_ms, &mut hw, &mut host, &mut scale, &mut sink);
        heartbeat.tick(now_ms);
        watchdog.feed();

        // Keep the simulation from spinning a host core flat out; on
        // hardware the UART FIFOs pace the loop naturally.
        #[cfg(not(target_os = "espidf"))]
        std::thread::sleep(std::time::Duration::from_millis(1));
    }
}
