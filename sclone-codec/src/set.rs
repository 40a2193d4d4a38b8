//! Set decoding

use sclone_format::{Result, ResultExt, Tag};
use serde_json::Value;

use crate::decoder::Decoder;

impl Decoder<'_, '_> {
    /// Decode a Set into compact JSON object text.
    ///
    /// The wire layout is a Map without the value pairs: each element is one
    /// tag pair followed by its own fields (composites close with their
    /// sentinel), and the Set closes with an end-of-keys pair. The output
    /// layer wants a JSON object, so elements become keys bound to empty
    /// objects; duplicates collapse by construction.
    pub(crate) fn decode_set(&mut self, depth: usize) -> Result<Vec<u8>> {
        self.check_depth(depth)?;

        let mut entries = serde_json::Map::new();

        loop {
            let element_pair = self
                .reader
                .next_pair()
                .context(|| "reading next pair for key in set")?;

            if Tag::from_u32(element_pair.tag) == Some(Tag::EndOfKeys) {
                break;
            }

            let element = self
                .decode_value(element_pair, depth)
                .context(|| "deserializing key in set")?;

            entries.insert(
                String::from_utf8_lossy(&element).into_owned(),
                Value::Object(serde_json::Map::new()),
            );
        }

        Ok(serde_json::to_vec(&entries)?)
    }
}
