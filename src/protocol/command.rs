//! Streaming host command decoder.
//!
//! Wire format (host → device, ASCII):
//! ```text
//! <digits>_   dispense pulse of <digits> milliseconds (0 cancels)
//! P_          air valve ON
//! p_          air valve OFF
//! ```
//!
//! The terminator is the literal `_`. Bytes accumulate in a
//! fixed-capacity buffer; the terminator completes a command, is never
//! retained, and clears the buffer. Anything that is not exactly `P`
//! or `p` is parsed as a leading-digit non-negative integer, and a
//! non-numeric or empty command parses to 0 — the observed
//! "permissive-zero" contract, kept deliberately rather than surfaced
//! as an error.
//!
//! Multiple terminated commands in one `feed` batch come out one per
//! terminator, in arrival order.

use crate::app::commands::HostCommand;

/// Command terminator byte.
pub const TERMINATOR: u8 = b'_';

/// Longest sensible command: ten digits covers any u32 millisecond
/// count with room to spare.
const CMD_BUF_CAP: usize = 16;

/// Streaming decoder for the `_`-terminated host protocol.
pub struct CommandDecoder {
    buf: heapless::Vec<u8, CMD_BUF_CAP>,
    /// Set when a command overran the buffer; the command is poisoned
    /// and parses to 0 at its terminator.
    overflowed: bool,
}

impl Default for CommandDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandDecoder {
    pub fn new() -> Self {
        Self {
            buf: heapless::Vec::new(),
            overflowed: false,
        }
    }

    /// Feed one received byte. Returns a complete command when `byte`
    /// is the terminator, `None` otherwise.
    pub fn feed(&mut self, byte: u8) -> Option<HostCommand> {
        if byte == TERMINATOR {
            let cmd = if self.overflowed {
                HostCommand::Pulse(0)
            } else {
                Self::classify(&self.buf)
            };
            self.buf.clear();
            self.overflowed = false;
            return Some(cmd);
        }

        if self.buf.push(byte).is_err() {
            self.overflowed = true;
        }
        None
    }

    /// Interpret one complete command's text (terminator excluded).
    fn classify(text: &[u8]) -> HostCommand {
        match text {
            b"P" => HostCommand::AirValveOn,
            b"p" => HostCommand::AirValveOff,
            _ => HostCommand::Pulse(parse_ms(text)),
        }
    }
}

/// Leading-digit-prefix parse: consume digits from the front, stop at
/// the first non-digit. Empty or non-numeric input yields 0. Values
/// beyond u32 saturate — the host never legitimately requests pulses
/// anywhere near that long.
fn parse_ms(text: &[u8]) -> u32 {
    let mut value: u32 = 0;
    for &b in text {
        if !b.is_ascii_digit() {
            break;
        }
        value = value
            .saturating_mul(10)
            .saturating_add(u32::from(b - b'0'));
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(dec: &mut CommandDecoder, bytes: &[u8]) -> Vec<HostCommand> {
        bytes.iter().filter_map(|&b| dec.feed(b)).collect()
    }

    #[test]
    fn air_valve_commands() {
        let mut dec = CommandDecoder::new();
        assert_eq!(feed_all(&mut dec, b"P_"), vec![HostCommand::AirValveOn]);
        assert_eq!(feed_all(&mut dec, b"p_"), vec![HostCommand::AirValveOff]);
    }

    #[test]
    fn numeric_pulse_request() {
        let mut dec = CommandDecoder::new();
        assert_eq!(feed_all(&mut dec, b"1500_"), vec![HostCommand::Pulse(1500)]);
        assert_eq!(feed_all(&mut dec, b"0_"), vec![HostCommand::Pulse(0)]);
    }

    #[test]
    fn malformed_parses_to_zero() {
        let mut dec = CommandDecoder::new();
        assert_eq!(feed_all(&mut dec, b"abc_"), vec![HostCommand::Pulse(0)]);
        assert_eq!(feed_all(&mut dec, b"_"), vec![HostCommand::Pulse(0)]);
    }

    #[test]
    fn leading_digit_prefix_wins() {
        let mut dec = CommandDecoder::new();
        assert_eq!(feed_all(&mut dec, b"42x9_"), vec![HostCommand::Pulse(42)]);
    }

    #[test]
    fn upper_p_with_trailing_text_is_not_air_command() {
        // `P` must match exactly; `Px` falls through to numeric parse.
        let mut dec = CommandDecoder::new();
        assert_eq!(feed_all(&mut dec, b"Px_"), vec![HostCommand::Pulse(0)]);
    }

    #[test]
    fn multiple_commands_one_batch_in_order() {
        let mut dec = CommandDecoder::new();
        assert_eq!(
            feed_all(&mut dec, b"P_200_p_"),
            vec![
                HostCommand::AirValveOn,
                HostCommand::Pulse(200),
                HostCommand::AirValveOff,
            ]
        );
    }

    #[test]
    fn partial_command_retained_across_feeds() {
        let mut dec = CommandDecoder::new();
        assert!(feed_all(&mut dec, b"15").is_empty());
        assert_eq!(feed_all(&mut dec, b"00_"), vec![HostCommand::Pulse(1500)]);
    }

    #[test]
    fn overflowed_command_poisons_to_zero() {
        let mut dec = CommandDecoder::new();
        let long = [b'9'; 40];
        assert!(feed_all(&mut dec, &long).is_empty());
        assert_eq!(feed_all(&mut dec, b"_"), vec![HostCommand::Pulse(0)]);
        // Decoder recovers for the next command.
        assert_eq!(feed_all(&mut dec, b"5_"), vec![HostCommand::Pulse(5)]);
    }

    #[test]
    fn huge_duration_saturates() {
        assert_eq!(parse_ms(b"99999999999999999999"), u32::MAX);
    }
}
