//! Fuzz target: `CommandLineParser::feed`
//!
//! Drives arbitrary byte sequences into the line parser and asserts that it
//! never panics, never lets the buffer reach capacity, and only ever yields
//! commands on a newline.
//!
//! cargo fuzz run fuzz_command_parser

#![no_main]

use libfuzzer_sys::fuzz_target;
use roomnode::remote::{COMMAND_BUFFER_CAPACITY, CommandLineParser};

fuzz_target!(|data: &[u8]| {
    let mut parser = CommandLineParser::new();

    for &byte in data {
        if parser.feed(byte).is_some() {
            assert_eq!(byte, b'\n', "commands complete only on a terminator");
            assert!(parser.pending().is_empty());
        }
        assert!(parser.pending().len() < COMMAND_BUFFER_CAPACITY);
    }

    // After a reset the parser must accept bytes cleanly again.
    parser.reset();
    assert!(parser.pending().is_empty());
    for &byte in data {
        let _ = parser.feed(byte);
    }
});
