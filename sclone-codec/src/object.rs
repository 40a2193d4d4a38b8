//! Object decoding: key/value entries up to the end-of-keys sentinel

use std::collections::HashMap;

use sclone_format::{decode_string, Error, Result, ResultExt, Tag};
use serde_json::Value;

use crate::decoder::Decoder;

impl Decoder<'_, '_> {
    /// Decode object entries until the end-of-keys sentinel.
    ///
    /// Keys are always strings; values go through the dispatcher and land as
    /// raw bytes. A key that repeats overwrites its earlier value.
    pub(crate) fn decode_object(&mut self, depth: usize) -> Result<HashMap<String, Vec<u8>>> {
        self.check_depth(depth)?;

        let mut object = HashMap::new();

        loop {
            let entry = self
                .reader
                .next_pair()
                .context(|| "reading next pair in object")?;

            match Tag::from_u32(entry.tag) {
                Some(Tag::EndOfKeys) => break,
                Some(Tag::String) => {}
                _ => return Err(Error::BadKeyTag(entry.tag)),
            }

            let key_bytes = decode_string(entry.data, self.reader, self.limits)
                .context(|| format!("reading string for tag {:#x}", entry.tag))?;
            let key = String::from_utf8_lossy(&key_bytes).into_owned();

            let value_pair = self
                .reader
                .next_pair()
                .context(|| "reading next pair for value in object")?;
            let value = self
                .decode_value(value_pair, depth)
                .context(|| format!("deserializing value for key `{key}`"))?;

            object.insert(key, value);
        }

        Ok(object)
    }

    /// Decode a nested object and render it as compact JSON text.
    ///
    /// Inner byte values are recast as strings so the nested structure stays
    /// readable once marshalled; callers treat the result as an opaque
    /// printable blob.
    pub(crate) fn decode_nested_object(&mut self, depth: usize) -> Result<Vec<u8>> {
        let object = self
            .decode_object(depth)
            .context(|| "deserializing nested object")?;

        let readable: serde_json::Map<String, Value> = object
            .into_iter()
            .map(|(key, value)| {
                (
                    key,
                    Value::String(String::from_utf8_lossy(&value).into_owned()),
                )
            })
            .collect();

        Ok(serde_json::to_vec(&readable)?)
    }
}
