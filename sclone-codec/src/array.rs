//! Array decoding: index-addressed slots up to the end-of-keys sentinel

use sclone_format::{decode_string, Error, Result, ResultExt, Tag};
use serde_json::Value;

use crate::decoder::Decoder;

impl Decoder<'_, '_> {
    /// Decode an array declared to hold `length` slots into compact JSON
    /// array text.
    ///
    /// Each element arrives as an index pair followed by the element value,
    /// so the producer may write slots out of order or sparsely; slots never
    /// written stay JSON null. Only objects and strings appear as array
    /// elements in practice, and anything else is rejected rather than
    /// guessed at.
    pub(crate) fn decode_array(&mut self, length: u32, depth: usize) -> Result<Vec<u8>> {
        self.check_depth(depth)?;

        if length as usize > self.limits.max_array_length {
            return Err(Error::LimitExceeded(format!(
                "array length {length} exceeds limit of {}",
                self.limits.max_array_length
            )));
        }

        let mut slots: Vec<Value> = vec![Value::Null; length as usize];

        loop {
            let index_pair = self
                .reader
                .next_pair()
                .context(|| "reading next index in array")?;

            if Tag::from_u32(index_pair.tag) == Some(Tag::EndOfKeys) {
                break;
            }
            let index = index_pair.data;

            let item = self
                .reader
                .next_pair()
                .context(|| format!("reading item at index {index} in array"))?;

            let rendered = match Tag::from_u32(item.tag) {
                Some(Tag::ObjectObject) => self
                    .decode_nested_object(depth + 1)
                    .context(|| format!("reading object at index {index} in array"))?,
                Some(Tag::String) => decode_string(item.data, self.reader, self.limits)
                    .context(|| format!("reading string at index {index} in array"))?,
                _ => {
                    return Err(Error::UnsupportedArrayElement {
                        index,
                        tag: item.tag,
                    })
                }
            };

            let slot = slots.get_mut(index as usize).ok_or_else(|| {
                Error::LimitExceeded(format!(
                    "array index {index} beyond declared length {length}"
                ))
            })?;
            *slot = Value::String(String::from_utf8_lossy(&rendered).into_owned());
        }

        Ok(serde_json::to_vec(&slots)?)
    }
}
