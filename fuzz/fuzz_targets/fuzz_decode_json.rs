#![no_main]

use hubdev::client::{ResponseFormat, decode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic; errors are fine.
        let _ = decode(ResponseFormat::Json, s);
    }
});
