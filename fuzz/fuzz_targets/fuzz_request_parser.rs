//! Fuzz target: `http::request::parse`
//!
//! Feeds arbitrary URIs through the router in both parameter modes.  The
//! parser must never panic, and a lenient parse must succeed wherever the
//! strict one does, with the same result.
//!
//! cargo fuzz run fuzz_request_parser

#![no_main]

use libfuzzer_sys::fuzz_target;
use rccar::http::request::parse;

fuzz_target!(|data: &[u8]| {
    let Ok(uri) = core::str::from_utf8(data) else {
        return;
    };

    let strict = parse(uri, false);
    let lenient = parse(uri, true);
    if let Ok(req) = strict {
        assert_eq!(lenient, Ok(req), "lenient mode must accept what strict accepts");
    }
});
