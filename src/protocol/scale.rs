//! Scale link line assembler and liveness watchdog.
//!
//! The scale streams newline-terminated ASCII lines of its own format
//! (e.g. `+    0.00g  `); the contents are passed through to telemetry
//! verbatim. This type assembles lines without ever blocking — partial
//! lines are retained across ticks until their terminator arrives —
//! and tracks arrival recency so telemetry can substitute the offline
//! sentinel once the link goes quiet.

/// Longest scale line retained; excess bytes before the newline are
/// dropped (predictable truncation, same stance as the host decoder).
const LINE_CAP: usize = 64;

/// Assembles scale lines and reports staleness.
pub struct ScaleWatchdog {
    /// Bytes of the line currently being received.
    partial: heapless::Vec<u8, LINE_CAP>,
    /// Most recent complete line (terminator excluded).
    line: heapless::String<LINE_CAP>,
    /// Tick (ms) at which `line` arrived.
    arrival_ms: u32,
    /// A complete line has been received at least once since power-up.
    have_line: bool,
    /// Staleness threshold in milliseconds.
    stale_ms: u32,
}

impl ScaleWatchdog {
    pub fn new(stale_ms: u32) -> Self {
        Self {
            partial: heapless::Vec::new(),
            line: heapless::String::new(),
            arrival_ms: 0,
            have_line: false,
            stale_ms,
        }
    }

    /// Feed bytes drained from the scale UART. `now_ms` stamps any line
    /// completed within this batch.
    pub fn feed(&mut self, data: &[u8], now_ms: u32) {
        for &b in data {
            if b == b'\n' {
                self.finish_line(now_ms);
            } else {
                // Capacity overflow drops the byte; the line is stored
                // truncated when its newline eventually arrives.
                let _ = self.partial.push(b);
            }
        }
    }

    /// The current line, or `None` when the link is stale or no line
    /// has ever arrived. Staleness is strictly-greater-than: a line is
    /// still surfaced at exactly `stale_ms` elapsed.
    pub fn reading(&self, now_ms: u32) -> Option<&str> {
        if self.have_line && now_ms.wrapping_sub(self.arrival_ms) <= self.stale_ms {
            Some(self.line.as_str())
        } else {
            None
        }
    }

    /// Whether the link currently counts as live.
    pub fn is_online(&self, now_ms: u32) -> bool {
        self.reading(now_ms).is_some()
    }

    fn finish_line(&mut self, now_ms: u32) {
        // Scales commonly terminate with CRLF; a stray CR would corrupt
        // the `;`-separated telemetry layout.
        if self.partial.last() == Some(&b'\r') {
            self.partial.pop();
        }

        self.line.clear();
        for &b in &self.partial {
            // Non-ASCII noise (line glitches) becomes `?` so the stored
            // line stays valid UTF-8.
            let c = if b.is_ascii() && !b.is_ascii_control() {
                b as char
            } else {
                '?'
            };
            let _ = self.line.push(c);
        }

        self.partial.clear();
        self.arrival_ms = now_ms;
        self.have_line = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STALE_MS: u32 = 1_000;

    #[test]
    fn no_data_reads_offline() {
        let wd = ScaleWatchdog::new(STALE_MS);
        assert_eq!(wd.reading(0), None);
        assert_eq!(wd.reading(5_000), None);
    }

    #[test]
    fn complete_line_surfaces_verbatim() {
        let mut wd = ScaleWatchdog::new(STALE_MS);
        wd.feed(b"+    0.00g  \n", 100);
        assert_eq!(wd.reading(100), Some("+    0.00g  "));
    }

    #[test]
    fn partial_line_held_across_ticks() {
        let mut wd = ScaleWatchdog::new(STALE_MS);
        wd.feed(b"+   12", 100);
        assert_eq!(wd.reading(100), None);
        wd.feed(b".50g\n", 150);
        assert_eq!(wd.reading(150), Some("+   12.50g"));
    }

    #[test]
    fn stale_after_threshold_fresh_at_boundary() {
        let mut wd = ScaleWatchdog::new(STALE_MS);
        wd.feed(b"w\n", 1_000);
        assert_eq!(wd.reading(2_000), Some("w")); // exactly 1000 ms: fresh
        assert_eq!(wd.reading(2_001), None); // 1001 ms: stale
    }

    #[test]
    fn new_line_clears_staleness() {
        let mut wd = ScaleWatchdog::new(STALE_MS);
        wd.feed(b"a\n", 0);
        assert_eq!(wd.reading(3_000), None);
        wd.feed(b"b\n", 3_000);
        assert_eq!(wd.reading(3_000), Some("b"));
    }

    #[test]
    fn crlf_terminator_stripped() {
        let mut wd = ScaleWatchdog::new(STALE_MS);
        wd.feed(b"+    0.00g\r\n", 10);
        assert_eq!(wd.reading(10), Some("+    0.00g"));
    }

    #[test]
    fn two_lines_in_one_batch_keeps_latest() {
        let mut wd = ScaleWatchdog::new(STALE_MS);
        wd.feed(b"old\nnew\n", 42);
        assert_eq!(wd.reading(42), Some("new"));
    }

    #[test]
    fn clock_wraparound_is_not_a_spurious_staleness() {
        let mut wd = ScaleWatchdog::new(STALE_MS);
        let just_before_wrap = u32::MAX - 100;
        wd.feed(b"x\n", just_before_wrap);
        // 200 ms later the counter has wrapped; the line is still fresh.
        assert_eq!(wd.reading(just_before_wrap.wrapping_add(200)), Some("x"));
        // 2 s later it is stale.
        assert_eq!(wd.reading(just_before_wrap.wrapping_add(2_000)), None);
    }

    #[test]
    fn oversize_line_is_truncated_not_lost() {
        let mut wd = ScaleWatchdog::new(STALE_MS);
        let long = [b'x'; 200];
        wd.feed(&long, 0);
        wd.feed(b"\n", 0);
        let line = wd.reading(0).unwrap();
        assert_eq!(line.len(), 64);
        assert!(line.bytes().all(|b| b == b'x'));
    }
}
