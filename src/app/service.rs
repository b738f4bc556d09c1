//! Application service — the hardware-agnostic control core.
//!
//! [`AppService`] owns the command decoder, pulse controller, scale
//! watchdog, safety interlock, and the shared [`ControlContext`]. All
//! I/O flows through port traits injected at call sites, making the
//! entire control loop testable with mock adapters.
//!
//! Tick order is fixed and substitutes for synchronization (there is
//! exactly one logical thread of control):
//!
//! 1. read sensors
//! 2. safety interlock
//! 3. decode host commands (arrival order, last-write-wins)
//! 4. apply interlock override, update valve outputs
//! 5. update scale watchdog
//! 6. encode and transmit telemetry

use log::info;

use crate::config::SystemConfig;
use crate::control::pulse::PulseController;
use crate::protocol::command::CommandDecoder;
use crate::protocol::scale::ScaleWatchdog;
use crate::protocol::telemetry;
use crate::safety::SafetyInterlock;

use super::commands::HostCommand;
use super::context::ControlContext;
use super::events::AppEvent;
use super::ports::{EventSink, HostLinkPort, ScaleLinkPort, SensorPort, ValvePort};

/// Per-tick UART drain chunk size.
const READ_CHUNK: usize = 64;

/// The application service orchestrates all domain logic.
pub struct AppService {
    decoder: CommandDecoder,
    pulse: PulseController,
    scale: ScaleWatchdog,
    interlock: SafetyInterlock,
    ctx: ControlContext,
    /// Scale link verdict from the previous tick, for edge events.
    scale_was_online: bool,
}

impl AppService {
    /// Construct the service from configuration.
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            decoder: CommandDecoder::new(),
            pulse: PulseController::new(),
            scale: ScaleWatchdog::new(config.scale_stale_ms),
            interlock: SafetyInterlock::new(),
            ctx: ControlContext::new(),
            scale_was_online: false,
        }
    }

    /// Announce startup.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
        info!("AppService started");
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full control cycle.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`ValvePort`] — this avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    pub fn tick(
        &mut self,
        now_ms: u32,
        hw: &mut (impl SensorPort + ValvePort),
        host: &mut impl HostLinkPort,
        scale_link: &mut impl ScaleLinkPort,
        sink: &mut impl EventSink,
    ) {
        self.ctx.total_ticks += 1;

        // 1. Read sensors.
        self.ctx.sensors = hw.read_all();

        // 2. Safety interlock verdict for this tick.
        let was_tripped = self.interlock.is_tripped();
        let tripped = self.interlock.evaluate(self.ctx.sensors.stop_pressed);
        if tripped != was_tripped {
            sink.emit(if tripped {
                &AppEvent::SafetyTripped
            } else {
                &AppEvent::SafetyCleared
            });
        }

        // 3. Decode whatever host bytes are buffered, in arrival order.
        let mut buf = [0u8; READ_CHUNK];
        loop {
            let n = host.read(&mut buf);
            if n == 0 {
                break;
            }
            for &b in &buf[..n] {
                if let Some(cmd) = self.decoder.feed(b) {
                    self.apply_command(cmd, now_ms, sink);
                }
            }
        }

        // 4. Interlock override wins over anything the host asked for
        //    this tick, then the pulse timer decides the valve output.
        if tripped {
            if self.pulse.is_open() {
                sink.emit(&AppEvent::PulseCancelled);
            }
            self.pulse.cancel();
            if self.ctx.air_valve_on {
                self.ctx.air_valve_on = false;
                sink.emit(&AppEvent::AirValveChanged { on: false });
            }
        }

        // A cancel (host `0_` or trip) already closed the controller
        // above, so an open-to-closed edge here is a natural expiry.
        let was_open = self.pulse.is_open();
        let open = self.pulse.tick(now_ms);
        if was_open && !open {
            sink.emit(&AppEvent::PulseFinished);
        }
        self.ctx.dispense_open = open;
        hw.set_dispense(open);
        hw.set_air(self.ctx.air_valve_on);

        // 5. Scale watchdog.
        loop {
            let n = scale_link.read(&mut buf);
            if n == 0 {
                break;
            }
            self.scale.feed(&buf[..n], now_ms);
        }
        let online = self.scale.is_online(now_ms);
        if online != self.scale_was_online {
            sink.emit(if online {
                &AppEvent::ScaleOnline
            } else {
                &AppEvent::ScaleOffline
            });
            self.scale_was_online = online;
        }

        // 6. Telemetry.
        let frame = telemetry::encode_frame(self.scale.reading(now_ms), &self.ctx.sensors);
        host.write_line(frame.as_str());
    }

    // ── Command handling ──────────────────────────────────────

    /// Apply one decoded command. Called per command in arrival order,
    /// so later commands in a tick override earlier ones.
    fn apply_command(&mut self, cmd: HostCommand, now_ms: u32, sink: &mut impl EventSink) {
        match cmd {
            HostCommand::AirValveOn => {
                if !self.ctx.air_valve_on {
                    self.ctx.air_valve_on = true;
                    sink.emit(&AppEvent::AirValveChanged { on: true });
                }
            }
            HostCommand::AirValveOff => {
                if self.ctx.air_valve_on {
                    self.ctx.air_valve_on = false;
                    sink.emit(&AppEvent::AirValveChanged { on: false });
                }
            }
            HostCommand::Pulse(duration_ms) => {
                if duration_ms == 0 {
                    if self.pulse.is_open() {
                        sink.emit(&AppEvent::PulseCancelled);
                    }
                } else {
                    sink.emit(&AppEvent::PulseStarted { duration_ms });
                }
                self.pulse.request(duration_ms, now_ms);
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Air valve latch state.
    pub fn air_valve_on(&self) -> bool {
        self.ctx.air_valve_on
    }

    /// Dispense valve output as of the last tick.
    pub fn dispense_open(&self) -> bool {
        self.ctx.dispense_open
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.ctx.total_ticks
    }

    /// Last sensor snapshot.
    pub fn sensors(&self) -> crate::app::context::SensorSnapshot {
        self.ctx.sensors
    }
}
