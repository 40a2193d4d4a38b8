//! Property-based tests for the wire primitives

use proptest::prelude::*;
use sclone_format::constants::{STRING_ASCII_FLAG, WORD_SIZE};
use sclone_format::strings::decode_string;
use sclone_format::{ByteReader, Error, Limits};

/// Encode a (tag, data) pair the way the producer writes it: one
/// little-endian u64 with the tag in the high 32 bits.
fn encode_pair(tag: u32, data: u32) -> [u8; 8] {
    let word = (u64::from(tag) << 32) | u64::from(data);
    word.to_le_bytes()
}

/// Padding needed to carry `byte_len` character bytes to a word boundary.
fn padding_len(byte_len: usize) -> usize {
    match byte_len % WORD_SIZE {
        0 => 0,
        rem => WORD_SIZE - rem,
    }
}

proptest! {
    #[test]
    fn pair_framing_roundtrip(tag in any::<u32>(), data in any::<u32>()) {
        let bytes = encode_pair(tag, data);
        let mut reader = ByteReader::new(&bytes);
        let pair = reader.next_pair().unwrap();
        prop_assert_eq!(pair.tag, tag);
        prop_assert_eq!(pair.data, data);
        prop_assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn short_pair_always_fails(bytes in prop::collection::vec(any::<u8>(), 0..8)) {
        let mut reader = ByteReader::new(&bytes);
        let err = reader.next_pair().unwrap_err();
        prop_assert!(matches!(err.root_cause(), Error::ShortRead));
    }

    #[test]
    fn ascii_padding_bytes_never_leak(
        body in prop::collection::vec(any::<u8>(), 0..64),
        pad_fill in any::<u8>(),
    ) {
        let mut stream = body.clone();
        stream.extend(std::iter::repeat(pad_fill).take(padding_len(body.len())));

        let data = STRING_ASCII_FLAG | body.len() as u32;
        let mut reader = ByteReader::new(&stream);
        let decoded = decode_string(data, &mut reader, &Limits::default()).unwrap();

        prop_assert_eq!(decoded, body);
        prop_assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn ascii_decode_leaves_trailing_stream_untouched(
        body in prop::collection::vec(any::<u8>(), 0..64),
        trailer in prop::collection::vec(any::<u8>(), 0..32),
    ) {
        let mut stream = body.clone();
        stream.extend(std::iter::repeat(0u8).take(padding_len(body.len())));
        stream.extend_from_slice(&trailer);

        let data = STRING_ASCII_FLAG | body.len() as u32;
        let mut reader = ByteReader::new(&stream);
        let decoded = decode_string(data, &mut reader, &Limits::default()).unwrap();

        prop_assert_eq!(decoded, body);
        prop_assert_eq!(reader.remaining(), trailer.len());
    }

    #[test]
    fn utf16_roundtrip(text in "\\PC{0,32}") {
        // A leading U+FEFF/U+FFFE would be consumed as a byte-order mark
        // rather than content.
        prop_assume!(!text.starts_with(['\u{feff}', '\u{fffe}']));

        let units: Vec<u16> = text.encode_utf16().collect();
        let mut stream: Vec<u8> = units.iter().flat_map(|u| u.to_le_bytes()).collect();
        stream.extend(std::iter::repeat(0u8).take(padding_len(units.len() * 2)));

        let mut reader = ByteReader::new(&stream);
        let decoded = decode_string(units.len() as u32, &mut reader, &Limits::default()).unwrap();

        prop_assert_eq!(decoded, text.as_bytes());
        prop_assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn truncated_string_body_never_panics(
        declared_len in 1u32..1024,
        available in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        prop_assume!((available.len() as u32) < declared_len);

        let data = STRING_ASCII_FLAG | declared_len;
        let mut reader = ByteReader::new(&available);
        let err = decode_string(data, &mut reader, &Limits::default()).unwrap_err();
        prop_assert!(matches!(err.root_cause(), Error::ShortRead));
    }
}
