//! Fuzz target: `CommandDecoder::feed`
//!
//! Drives arbitrary byte sequences into the streaming host command
//! decoder and asserts that it never panics and that every terminator
//! yields exactly one command.
//!
//! cargo fuzz run fuzz_command_decoder

#![no_main]

use libfuzzer_sys::fuzz_target;
use fillhead::protocol::command::{CommandDecoder, TERMINATOR};

fuzz_target!(|data: &[u8]| {
    let mut decoder = CommandDecoder::new();

    let mut commands = 0usize;
    for &b in data {
        if decoder.feed(b).is_some() {
            commands += 1;
        }
    }

    let terminators = data.iter().filter(|&&b| b == TERMINATOR).count();
    assert_eq!(commands, terminators, "one command per terminator");

    // Whatever partial state the input left behind, the decoder must
    // still accept a clean command.
    let _ = decoder.feed(TERMINATOR);
    for &b in b"100" {
        assert!(decoder.feed(b).is_none());
    }
    assert!(decoder.feed(TERMINATOR).is_some());
});
