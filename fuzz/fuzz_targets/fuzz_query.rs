//! Fuzz target: query-string decoding
//!
//! `percent_decode` must never panic on arbitrary input (including split
//! escapes and invalid UTF-8 after decoding).  Output is bounded by three
//! bytes per input byte (each lossy replacement character).
//!
//! cargo fuzz run fuzz_query

#![no_main]

use libfuzzer_sys::fuzz_target;
use rccar::http::query::{find, int_param, percent_decode};

fuzz_target!(|data: &[u8]| {
    let Ok(query) = core::str::from_utf8(data) else {
        return;
    };

    let decoded = percent_decode(query);
    assert!(decoded.len() <= query.len() * 3);

    let _ = find(query, "angle");
    let _ = int_param(query, "duty", false);
    let _ = int_param(query, "duty", true);
});
