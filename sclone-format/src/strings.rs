//! Length-prefixed string decoding

use crate::constants::{STRING_ASCII_FLAG, STRING_LENGTH_MASK, WORD_SIZE};
use crate::error::{Error, Result, ResultExt};
use crate::limits::Limits;
use crate::reader::ByteReader;

/// Decode the string whose (tag, data) pair has just been read.
///
/// `data` carries the encoding flag in bit 31 and the character count in
/// bits 0-30. Character bytes follow immediately in the stream: one byte per
/// character for the ASCII form, two (UTF-16LE) otherwise. UTF-16 content is
/// re-encoded so the returned bytes are always UTF-8.
pub fn decode_string(data: u32, reader: &mut ByteReader<'_>, limits: &Limits) -> Result<Vec<u8>> {
    let char_len = (data & STRING_LENGTH_MASK) as usize;

    if data & STRING_ASCII_FLAG != 0 {
        read_body(char_len, reader, limits)
    } else {
        decode_utf16(char_len, reader, limits)
    }
}

/// Read `byte_len` character bytes, then consume padding out to the next
/// 8-byte word boundary.
///
/// Capacity is clamped to what the stream can still provide, so a hostile
/// length prefix on a truncated stream fails with `ShortRead` before any
/// large allocation. End of input while reading padding is not an error: the
/// producer's final word may be incomplete.
fn read_body(byte_len: usize, reader: &mut ByteReader<'_>, limits: &Limits) -> Result<Vec<u8>> {
    if byte_len > limits.max_string_bytes {
        return Err(Error::LimitExceeded(format!(
            "string body of {byte_len} bytes exceeds limit of {} bytes",
            limits.max_string_bytes
        )));
    }

    let mut body = Vec::with_capacity(byte_len.min(reader.remaining()));
    for _ in 0..byte_len {
        body.push(reader.read_byte().context(|| "reading byte in string")?);
    }

    let into_next_word = byte_len % WORD_SIZE;
    if into_next_word > 0 {
        for _ in 0..WORD_SIZE - into_next_word {
            let _ = reader.read_byte();
        }
    }

    Ok(body)
}

fn decode_utf16(char_len: usize, reader: &mut ByteReader<'_>, limits: &Limits) -> Result<Vec<u8>> {
    let raw = read_body(char_len * 2, reader, limits)?;

    let mut units: Vec<u16> = raw
        .chunks_exact(2)
        .map(|chunk| u16::from_le_bytes([chunk[0], chunk[1]]))
        .collect();

    // Honor a leading BOM: strip it, and byte-swap the payload when it
    // arrives in big-endian order. Little-endian is the default.
    match units.first().copied() {
        Some(0xfeff) => {
            units.remove(0);
        }
        Some(0xfffe) => {
            units.remove(0);
            for unit in &mut units {
                *unit = unit.swap_bytes();
            }
        }
        _ => {}
    }

    let decoded =
        String::from_utf16(&units).map_err(|err| Error::StringDecodeFailed(err.to_string()))?;
    Ok(decoded.into_bytes())
}
