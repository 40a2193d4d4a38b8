//! Map decoding

use sclone_format::{Result, ResultExt, Tag};
use serde_json::Value;

use crate::decoder::Decoder;

impl Decoder<'_, '_> {
    /// Decode a Map into compact JSON object text.
    ///
    /// Unlike plain objects, Map keys may be arbitrary values. Each entry is
    /// laid out with both tag pairs up front:
    ///
    /// ```text
    /// <key tag, key data>
    /// <value tag, value data>
    /// ...key fields...        (composite keys only)
    /// <end-of-keys>
    /// ...value fields...      (composite values only)
    /// <end-of-keys>
    /// ```
    ///
    /// and the Map itself closes with an end-of-keys pair in place of a
    /// further key. Keys and values are rendered through the dispatcher and
    /// recast to strings for the JSON object; a repeated key overwrites its
    /// earlier value.
    pub(crate) fn decode_map(&mut self, depth: usize) -> Result<Vec<u8>> {
        self.check_depth(depth)?;

        let mut entries = serde_json::Map::new();

        loop {
            let key_pair = self
                .reader
                .next_pair()
                .context(|| "reading next pair for key in map")?;

            if Tag::from_u32(key_pair.tag) == Some(Tag::EndOfKeys) {
                break;
            }

            let value_pair = self
                .reader
                .next_pair()
                .context(|| "reading next pair for value in map")?;

            let key_bytes = self
                .decode_value(key_pair, depth)
                .context(|| "deserializing key in map")?;
            let key = String::from_utf8_lossy(&key_bytes).into_owned();

            let value_bytes = self
                .decode_value(value_pair, depth)
                .context(|| format!("deserializing value in map for key `{key}`"))?;

            entries.insert(
                key,
                Value::String(String::from_utf8_lossy(&value_bytes).into_owned()),
            );
        }

        Ok(serde_json::to_vec(&entries)?)
    }
}
