//! Shared test helpers for the sclone crates
//!
//! Provides [`BlobBuilder`], a chainable encoder producing structured-clone
//! blobs the way the Firefox producer lays them out, so tests can describe
//! fixtures at the value level instead of hand-writing hex. Test-only; the
//! published crates ship no serializer.

use std::collections::HashMap;

use sclone_format::constants::{
    STRING_ASCII_FLAG, TAG_ARRAY_OBJECT, TAG_BOOLEAN, TAG_DATE_OBJECT, TAG_END_OF_KEYS,
    TAG_HEADER, TAG_INT32, TAG_MAP_OBJECT, TAG_NULL, TAG_OBJECT_OBJECT, TAG_SET_OBJECT,
    TAG_STRING, TAG_UNDEFINED, WORD_SIZE,
};

/// Builder for structured-clone blobs with common patterns
#[derive(Debug, Clone)]
pub struct BlobBuilder {
    bytes: Vec<u8>,
    pad_byte: u8,
}

impl BlobBuilder {
    /// Start a blob with the leading header pair.
    pub fn new() -> Self {
        Self::raw().pair(TAG_HEADER, 0)
    }

    /// Start an empty byte stream, without the header pair. Useful for
    /// exercising a single decoder below the driver.
    pub fn raw() -> Self {
        Self {
            bytes: Vec::new(),
            pad_byte: 0,
        }
    }

    /// Use `pad` for string alignment padding instead of zero.
    pub fn with_pad_byte(mut self, pad: u8) -> Self {
        self.pad_byte = pad;
        self
    }

    /// Append a raw (tag, data) pair: one little-endian u64 with the tag in
    /// the high 32 bits.
    pub fn pair(mut self, tag: u32, data: u32) -> Self {
        let word = (u64::from(tag) << 32) | u64::from(data);
        self.bytes.extend_from_slice(&word.to_le_bytes());
        self
    }

    /// Open an object; close it with [`end`](Self::end).
    pub fn begin_object(self) -> Self {
        self.pair(TAG_OBJECT_OBJECT, 0)
    }

    /// Open an array declaring `length` slots; close it with
    /// [`end`](Self::end).
    pub fn begin_array(self, length: u32) -> Self {
        self.pair(TAG_ARRAY_OBJECT, length)
    }

    /// Open a map; close it with [`end`](Self::end).
    pub fn begin_map(self) -> Self {
        self.pair(TAG_MAP_OBJECT, 0)
    }

    /// Open a set; close it with [`end`](Self::end).
    pub fn begin_set(self) -> Self {
        self.pair(TAG_SET_OBJECT, 0)
    }

    /// Append the end-of-keys sentinel closing the innermost composite.
    pub fn end(self) -> Self {
        self.pair(TAG_END_OF_KEYS, 0)
    }

    /// Append an object key. Keys are plain ASCII strings on the wire.
    pub fn key(self, key: &str) -> Self {
        self.ascii_string(key)
    }

    /// Append a string pair in the one-byte-per-character encoding, padded
    /// to the next word boundary.
    pub fn ascii_string(self, s: &str) -> Self {
        self.ascii_string_pair(s).ascii_body(s)
    }

    /// Append just the tag pair of an ASCII string, without its body.
    ///
    /// Map entries carry both tag pairs before either body, so the two
    /// halves are exposed separately; follow up with
    /// [`ascii_body`](Self::ascii_body) once the other pair is in place.
    pub fn ascii_string_pair(self, s: &str) -> Self {
        assert!(s.is_ascii(), "use utf16_string for non-ASCII content");
        self.pair(TAG_STRING, STRING_ASCII_FLAG | s.len() as u32)
    }

    /// Append the padded body bytes of a string emitted earlier with
    /// [`ascii_string_pair`](Self::ascii_string_pair).
    pub fn ascii_body(mut self, s: &str) -> Self {
        self.bytes.extend_from_slice(s.as_bytes());
        self.pad(s.len())
    }

    /// Append a string pair in UTF-16LE, padded to the next word boundary.
    pub fn utf16_string(mut self, s: &str) -> Self {
        let units: Vec<u16> = s.encode_utf16().collect();
        self = self.pair(TAG_STRING, units.len() as u32);
        for unit in &units {
            self.bytes.extend_from_slice(&unit.to_le_bytes());
        }
        self.pad(units.len() * 2)
    }

    /// Append an Int32 value.
    pub fn int32(self, value: u32) -> Self {
        self.pair(TAG_INT32, value)
    }

    /// Append a boolean value.
    pub fn boolean(self, value: bool) -> Self {
        self.pair(TAG_BOOLEAN, value as u32)
    }

    /// Append a null value.
    pub fn null(self) -> Self {
        self.pair(TAG_NULL, 0)
    }

    /// Append an undefined value.
    pub fn undefined(self) -> Self {
        self.pair(TAG_UNDEFINED, 0)
    }

    /// Append a date object: the DateObject pair followed by the double
    /// carrying `bits` as its 64-bit pattern.
    pub fn date(self, bits: u64) -> Self {
        self.pair(TAG_DATE_OBJECT, 0).double_bits(bits)
    }

    /// Append a bare double as a single pair: high 32 bits of the pattern
    /// in the tag position, low 32 bits in the data position.
    pub fn double_bits(self, bits: u64) -> Self {
        self.pair((bits >> 32) as u32, bits as u32)
    }

    /// Append an array element index pair.
    pub fn array_index(self, index: u32) -> Self {
        self.pair(TAG_INT32, index)
    }

    /// Finish and return the encoded bytes.
    pub fn build(self) -> Vec<u8> {
        self.bytes
    }

    fn pad(mut self, byte_len: usize) -> Self {
        let into_next_word = byte_len % WORD_SIZE;
        if into_next_word > 0 {
            self.bytes
                .extend(std::iter::repeat(self.pad_byte).take(WORD_SIZE - into_next_word));
        }
        self
    }
}

impl Default for BlobBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap a blob in an input row under the `data` column.
pub fn data_row(blob: Vec<u8>) -> HashMap<String, Vec<u8>> {
    let mut row = HashMap::new();
    row.insert("data".to_string(), blob);
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_matches_wire_example() {
        // (Boolean, 1) is written 01 00 00 00 02 00 FF FF.
        let bytes = BlobBuilder::raw().boolean(true).build();
        assert_eq!(bytes, [0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0xff, 0xff]);
    }

    #[test]
    fn ascii_string_is_word_padded() {
        let bytes = BlobBuilder::raw().ascii_string("k").build();
        assert_eq!(bytes.len(), 16, "pair plus one padded word");
        assert_eq!(&bytes[8..9], b"k");
        assert_eq!(&bytes[9..], &[0u8; 7]);
    }

    #[test]
    fn utf16_string_length_counts_units() {
        let bytes = BlobBuilder::raw().utf16_string("αβγ").build();
        // Data word: length 3, ASCII flag clear.
        assert_eq!(bytes[0], 3);
        assert_eq!(bytes[3] & 0x80, 0);
        assert_eq!(bytes.len(), 16, "pair plus six content bytes and two pad");
    }

    #[test]
    fn pad_byte_is_configurable() {
        let bytes = BlobBuilder::raw().with_pad_byte(0xaa).ascii_string("hi").build();
        assert_eq!(&bytes[10..], &[0xaa; 6]);
    }
}
