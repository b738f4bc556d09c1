//! Telemetry line encoder.
//!
//! One line per control tick, device → host:
//! ```text
//! <scale-field>;<pressure-int>;<stop-char>;<foot-char>\n
//! ```
//! `<scale-field>` is the verbatim last scale line or `$` when the
//! scale is offline; `<pressure-int>` is the raw ADC sample; the switch
//! characters are `S`/`s` (stop) and `F`/`f` (foot), upper-case meaning
//! pressed. No escaping — upstream fields never legitimately contain
//! the separator.

use core::fmt::Write;

use crate::app::context::SensorSnapshot;

/// Field separator character.
pub const FIELD_SEPARATOR: char = ';';

/// Substituted for the scale field when the link is stale.
pub const SCALE_OFFLINE_SENTINEL: &str = "$";

/// Scale field (≤64) + separators + pressure + flags + newline.
pub const FRAME_CAP: usize = 96;

/// A fully composed outbound line. Built fresh every tick, never
/// mutated in place, discarded after transmission.
pub type TelemetryFrame = heapless::String<FRAME_CAP>;

/// Compose one telemetry frame.
pub fn encode_frame(scale: Option<&str>, sensors: &SensorSnapshot) -> TelemetryFrame {
    let mut frame = TelemetryFrame::new();
    let scale_field = scale.unwrap_or(SCALE_OFFLINE_SENTINEL);
    let stop = if sensors.stop_pressed { 'S' } else { 's' };
    let foot = if sensors.foot_pressed { 'F' } else { 'f' };

    // FRAME_CAP leaves headroom over the largest possible scale line;
    // a fmt overflow here is unreachable, and truncation would be the
    // right failure mode anyway.
    writeln!(
        frame,
        "{scale_field}{FIELD_SEPARATOR}{pressure}{FIELD_SEPARATOR}{stop}{FIELD_SEPARATOR}{foot}",
        pressure = sensors.pressure_raw,
    )
    .ok();

    frame
}
