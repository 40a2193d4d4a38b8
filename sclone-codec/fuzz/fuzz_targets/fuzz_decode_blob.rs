//! Fuzz the whole-blob driver with arbitrary bytes

#![no_main]

use libfuzzer_sys::fuzz_target;
use sclone_codec::{decode_blob, Limits};

fuzz_target!(|data: &[u8]| {
    // Malformed input must error, never panic or hang.
    let _ = decode_blob(data, &Limits::default());
});
