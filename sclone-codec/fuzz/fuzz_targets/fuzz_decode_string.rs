//! Fuzz string decoding with arbitrary length words and bodies

#![no_main]

use libfuzzer_sys::fuzz_target;
use sclone_format::{decode_string, ByteReader, Limits};

fuzz_target!(|input: (u32, &[u8])| {
    let (data_word, body) = input;
    let mut reader = ByteReader::new(body);
    let _ = decode_string(data_word, &mut reader, &Limits::default());
});
