//! Integration tests: full control ticks through mock ports.
//!
//! Each test drives `AppService::tick` with scripted serial input and
//! switch states, then checks valve outputs and the telemetry stream.

use std::collections::VecDeque;

use fillhead::app::context::SensorSnapshot;
use fillhead::app::events::AppEvent;
use fillhead::app::ports::{EventSink, HostLinkPort, ScaleLinkPort, SensorPort, ValvePort};
use fillhead::app::service::AppService;
use fillhead::config::SystemConfig;

// ── Mock implementations ──────────────────────────────────────

struct MockHw {
    snapshot: SensorSnapshot,
    dispense: bool,
    air: bool,
}

impl MockHw {
    fn new() -> Self {
        Self {
            snapshot: SensorSnapshot {
                pressure_raw: 512,
                stop_pressed: false,
                foot_pressed: false,
            },
            dispense: false,
            air: false,
        }
    }
}

impl SensorPort for MockHw {
    fn read_all(&mut self) -> SensorSnapshot {
        self.snapshot
    }
}

impl ValvePort for MockHw {
    fn set_dispense(&mut self, open: bool) {
        self.dispense = open;
    }
    fn set_air(&mut self, on: bool) {
        self.air = on;
    }
}

struct MockHost {
    rx: VecDeque<u8>,
    lines: Vec<String>,
}

impl MockHost {
    fn new() -> Self {
        Self {
            rx: VecDeque::new(),
            lines: Vec::new(),
        }
    }
    fn send(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes);
    }
    fn last_line(&self) -> &str {
        self.lines.last().expect("no telemetry yet")
    }
}

impl HostLinkPort for MockHost {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        let mut n = 0;
        while n < buf.len() {
            match self.rx.pop_front() {
                Some(b) => {
                    buf[n] = b;
                    n += 1;
                }
                None => break,
            }
        }
        n
    }
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }
}

struct MockScale {
    rx: VecDeque<u8>,
}

impl MockScale {
    fn new() -> Self {
        Self { rx: VecDeque::new() }
    }
    fn send(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes);
    }
}

impl ScaleLinkPort for MockScale {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        let mut n = 0;
        while n < buf.len() {
            match self.rx.pop_front() {
                Some(b) => {
                    buf[n] = b;
                    n += 1;
                }
                None => break,
            }
        }
        n
    }
}

#[derive(Default)]
struct EventLog {
    events: Vec<AppEvent>,
}

impl EventSink for EventLog {
    fn emit(&mut self, e: &AppEvent) {
        self.events.push(*e);
    }
}

struct Rig {
    app: AppService,
    hw: MockHw,
    host: MockHost,
    scale: MockScale,
    sink: EventLog,
}

impl Rig {
    fn new() -> Self {
        let mut app = AppService::new(&SystemConfig::default());
        let mut sink = EventLog::default();
        app.start(&mut sink);
        Self {
            app,
            hw: MockHw::new(),
            host: MockHost::new(),
            scale: MockScale::new(),
            sink,
        }
    }

    fn tick(&mut self, now_ms: u32) {
        self.app.tick(
            now_ms,
            &mut self.hw,
            &mut self.host,
            &mut self.scale,
            &mut self.sink,
        );
    }
}

// ── Pulse round trip ──────────────────────────────────────────

#[test]
fn pulse_round_trip_1500ms() {
    let mut rig = Rig::new();

    rig.host.send(b"1500_");
    rig.tick(0);
    assert!(rig.hw.dispense, "valve must open on request");

    // Telemetry keeps streaming one line per tick while pulsing.
    let lines_before = rig.host.lines.len();
    for t in (100..1_500).step_by(100) {
        rig.tick(t);
        assert!(rig.hw.dispense, "valve must stay open at t={t}");
    }
    assert_eq!(rig.host.lines.len(), lines_before + 14);

    rig.tick(1_500);
    assert!(!rig.hw.dispense, "valve must close once the deadline passes");
    assert!(rig.sink.events.contains(&AppEvent::PulseFinished));
}

#[test]
fn new_request_replaces_running_pulse() {
    let mut rig = Rig::new();

    rig.host.send(b"1000_");
    rig.tick(0);
    rig.host.send(b"500_");
    rig.tick(900); // deadline becomes 1400, not 1500
    assert!(rig.hw.dispense);
    rig.tick(1_399);
    assert!(rig.hw.dispense);
    rig.tick(1_400);
    assert!(!rig.hw.dispense);
}

// ── Safety interlock ──────────────────────────────────────────

#[test]
fn stop_switch_cancels_pulse_and_forces_air_off() {
    let mut rig = Rig::new();

    rig.host.send(b"P_60000_");
    rig.tick(0);
    assert!(rig.hw.dispense);
    assert!(rig.hw.air);

    rig.hw.snapshot.stop_pressed = true;
    rig.tick(10);
    assert!(!rig.hw.dispense, "pulse must cancel within one tick");
    assert!(!rig.hw.air, "air valve must be forced OFF");
    assert!(rig.sink.events.contains(&AppEvent::SafetyTripped));
    assert!(rig.sink.events.contains(&AppEvent::PulseCancelled));
    assert!(rig.host.last_line().contains(";S;"));

    // Releasing the stop switch must not resume the cancelled pulse.
    rig.hw.snapshot.stop_pressed = false;
    rig.tick(20);
    assert!(!rig.hw.dispense);
    assert!(!rig.hw.air);
    assert!(rig.sink.events.contains(&AppEvent::SafetyCleared));
}

#[test]
fn commands_arriving_while_tripped_are_overridden() {
    let mut rig = Rig::new();
    rig.hw.snapshot.stop_pressed = true;
    rig.host.send(b"P_500_");
    rig.tick(0);
    assert!(!rig.hw.dispense);
    assert!(!rig.hw.air);
}

// ── Scale watchdog ────────────────────────────────────────────

#[test]
fn scale_line_verbatim_then_sentinel_after_threshold() {
    let mut rig = Rig::new();

    rig.scale.send(b"+    0.00g  \n");
    rig.tick(100);
    assert_eq!(rig.host.last_line(), "+    0.00g  ;512;s;f\n");

    rig.tick(1_100); // exactly 1000 ms later: still fresh
    assert_eq!(rig.host.last_line(), "+    0.00g  ;512;s;f\n");

    rig.tick(1_101); // past the threshold: sentinel
    assert_eq!(rig.host.last_line(), "$;512;s;f\n");
    assert!(rig.sink.events.contains(&AppEvent::ScaleOffline));

    // New data clears the sentinel.
    rig.scale.send(b"+   10.00g  \n");
    rig.tick(2_000);
    assert_eq!(rig.host.last_line(), "+   10.00g  ;512;s;f\n");
    assert!(rig.sink.events.contains(&AppEvent::ScaleOnline));
}

#[test]
fn partial_scale_line_not_surfaced_until_complete() {
    let mut rig = Rig::new();
    rig.scale.send(b"+    5.0");
    rig.tick(0);
    assert_eq!(rig.host.last_line(), "$;512;s;f\n");
    rig.scale.send(b"0g\n");
    rig.tick(50);
    assert_eq!(rig.host.last_line(), "+    5.00g;512;s;f\n");
}

// ── Command semantics ─────────────────────────────────────────

#[test]
fn air_valve_commands_are_idempotent() {
    let mut rig = Rig::new();

    // `p_` with the valve already off: no observable effect.
    rig.host.send(b"p_");
    rig.tick(0);
    assert!(!rig.hw.air);
    assert!(
        !rig.sink.events.iter().any(|e| matches!(e, AppEvent::AirValveChanged { .. })),
        "redundant OFF must not emit a change event"
    );

    // `P_` twice is equivalent to once.
    rig.host.send(b"P_P_");
    rig.tick(10);
    assert!(rig.hw.air);
    let on_events = rig
        .sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::AirValveChanged { on: true }))
        .count();
    assert_eq!(on_events, 1);
}

#[test]
fn malformed_command_is_a_silent_zero_pulse() {
    let mut rig = Rig::new();
    rig.host.send(b"abc_");
    rig.tick(0);
    assert!(!rig.hw.dispense);
    assert!(!rig.hw.air);
    // The loop keeps streaming telemetry; nothing crashed or latched.
    rig.tick(10);
    assert_eq!(rig.host.lines.len(), 2);
}

#[test]
fn same_tick_commands_apply_in_arrival_order() {
    // The host protocol does not promise one command per tick; this
    // firmware applies them strictly in arrival order, so the last
    // write wins within a tick.
    let mut rig = Rig::new();

    rig.host.send(b"300_0_");
    rig.tick(0);
    assert!(!rig.hw.dispense, "later 0_ cancels the earlier request");

    rig.host.send(b"100_2000_");
    rig.tick(100);
    assert!(rig.hw.dispense);
    rig.tick(1_000); // past 100+100 but within 100+2000
    assert!(rig.hw.dispense, "later duration must have replaced 100ms");
    rig.tick(2_100);
    assert!(!rig.hw.dispense);

    rig.host.send(b"P_p_");
    rig.tick(2_200);
    assert!(!rig.hw.air, "later p_ overrides P_ within the tick");
}

#[test]
fn command_split_across_ticks_decodes_once_complete() {
    let mut rig = Rig::new();
    rig.host.send(b"20");
    rig.tick(0);
    assert!(!rig.hw.dispense);
    rig.host.send(b"0_");
    rig.tick(10);
    assert!(rig.hw.dispense);
    rig.tick(210);
    assert!(!rig.hw.dispense);
}

// ── End-to-end scenario ───────────────────────────────────────

#[test]
fn air_on_then_short_pulse_with_continuous_telemetry() {
    // Host sends `P_200_`: air valve ON, then a 200 ms dispense pulse,
    // telemetry streaming throughout with the scale never reporting.
    let mut rig = Rig::new();

    rig.host.send(b"P_200_");
    rig.tick(0);
    assert!(rig.hw.air);
    assert!(rig.hw.dispense);
    assert_eq!(rig.host.last_line(), "$;512;s;f\n");

    rig.tick(100);
    assert!(rig.hw.dispense);
    assert_eq!(rig.host.last_line(), "$;512;s;f\n");

    rig.tick(200);
    assert!(!rig.hw.dispense);
    assert!(rig.hw.air, "air valve stays latched after the pulse ends");
    assert_eq!(rig.host.lines.len(), 3);
}

#[test]
fn foot_switch_is_reported_but_does_not_gate_valves() {
    let mut rig = Rig::new();
    rig.hw.snapshot.foot_pressed = true;
    rig.host.send(b"100_");
    rig.tick(0);
    assert!(rig.hw.dispense);
    assert_eq!(rig.host.last_line(), "$;512;s;F\n");
}
