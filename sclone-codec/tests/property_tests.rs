//! Property-based tests for whole-blob decoding

use proptest::prelude::*;
use sclone_codec::{decode_blob, Limits};
use sclone_format::constants::TAG_FLOAT_MAX;
use sclone_test_utils::BlobBuilder;

proptest! {
    #[test]
    fn date_bit_pattern_roundtrips(bits in any::<u64>()) {
        let blob = BlobBuilder::new()
            .begin_object()
            .key("d")
            .date(bits)
            .end()
            .build();

        let decoded = decode_blob(&blob, &Limits::default()).unwrap();
        let expected = bits.to_string();
        prop_assert_eq!(&decoded["d"], expected.as_bytes());
    }

    #[test]
    fn bare_double_roundtrips_below_float_max(bits in any::<u64>()) {
        prop_assume!(((bits >> 32) as u32) < TAG_FLOAT_MAX);

        let blob = BlobBuilder::new()
            .begin_object()
            .key("f")
            .double_bits(bits)
            .end()
            .build();

        let decoded = decode_blob(&blob, &Limits::default()).unwrap();
        let expected = bits.to_string();
        prop_assert_eq!(&decoded["f"], expected.as_bytes());
    }

    #[test]
    fn flat_int_objects_decode_exactly(values in prop::collection::vec(any::<u32>(), 0..16)) {
        let mut builder = BlobBuilder::new().begin_object();
        for (i, value) in values.iter().enumerate() {
            builder = builder.key(&format!("k{i}")).int32(*value);
        }
        let blob = builder.end().build();

        let decoded = decode_blob(&blob, &Limits::default()).unwrap();
        prop_assert_eq!(decoded.len(), values.len());
        for (i, value) in values.iter().enumerate() {
            let key = format!("k{i}");
            let expected = value.to_string();
            prop_assert_eq!(&decoded[&key], expected.as_bytes());
        }
    }

    #[test]
    fn null_and_undefined_values_are_empty(use_null in any::<bool>()) {
        let builder = BlobBuilder::new().begin_object().key("k");
        let blob = if use_null { builder.null() } else { builder.undefined() }
            .end()
            .build();

        let decoded = decode_blob(&blob, &Limits::default()).unwrap();
        prop_assert_eq!(&decoded["k"], b"");
    }

    #[test]
    fn nested_objects_render_to_wellformed_json(
        entries in prop::collection::btree_map("[a-z]{1,8}", "[ -~]{0,16}", 0..8)
    ) {
        let mut builder = BlobBuilder::new().begin_object().key("o").begin_object();
        for (key, value) in &entries {
            builder = builder.key(key).ascii_string(value);
        }
        let blob = builder.end().end().build();

        let decoded = decode_blob(&blob, &Limits::default()).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&decoded["o"]).unwrap();
        let object = parsed.as_object().unwrap();
        prop_assert_eq!(object.len(), entries.len());
        for (key, value) in &entries {
            prop_assert_eq!(object[key].as_str().unwrap(), value);
        }
    }

    #[test]
    fn string_values_roundtrip_either_encoding(text in "\\PC{0,24}") {
        prop_assume!(!text.starts_with(['\u{feff}', '\u{fffe}']));

        let builder = BlobBuilder::new().begin_object().key("s");
        let blob = if text.is_ascii() {
            builder.ascii_string(&text)
        } else {
            builder.utf16_string(&text)
        }
        .end()
        .build();

        let decoded = decode_blob(&blob, &Limits::default()).unwrap();
        prop_assert_eq!(&decoded["s"], text.as_bytes());
    }
}
