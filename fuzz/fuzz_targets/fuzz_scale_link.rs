//! Fuzz target: `ScaleWatchdog::feed`
//!
//! Streams arbitrary bytes into the scale line assembler, split at an
//! input-derived point to exercise partial-line retention, and asserts
//! that any surfaced line is bounded, printable ASCII.
//!
//! cargo fuzz run fuzz_scale_link

#![no_main]

use libfuzzer_sys::fuzz_target;
use fillhead::protocol::scale::ScaleWatchdog;

fuzz_target!(|data: &[u8]| {
    let mut wd = ScaleWatchdog::new(1_000);

    let split = if data.is_empty() {
        0
    } else {
        data[0] as usize % data.len()
    };
    wd.feed(&data[..split], 0);
    wd.feed(&data[split..], 5);

    if let Some(line) = wd.reading(5) {
        assert!(line.len() <= 64, "line exceeds capacity");
        assert!(line.chars().all(|c| c.is_ascii() && !c.is_ascii_control()));
    }
});
