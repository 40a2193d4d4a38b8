//! Per-tag value dispatch

use sclone_format::{decode_string, ByteReader, Error, Limits, Pair, Result, ResultExt, Tag, TagClass};

/// Decoding state threaded through the value tree: the single-pass reader
/// and the limits applied to untrusted input.
pub(crate) struct Decoder<'buf, 'r> {
    pub(crate) reader: &'r mut ByteReader<'buf>,
    pub(crate) limits: &'r Limits,
}

impl<'buf, 'r> Decoder<'buf, 'r> {
    pub(crate) fn new(reader: &'r mut ByteReader<'buf>, limits: &'r Limits) -> Self {
        Self { reader, limits }
    }

    /// Decode the value introduced by `pair`, reading further pairs and
    /// string bodies from the stream as the tag requires.
    ///
    /// Scalars render to their textual bytes; composites recurse and render
    /// to compact JSON text; Null and Undefined render to an empty value.
    /// `depth` counts enclosing composites and is checked by each composite
    /// decoder.
    pub(crate) fn decode_value(&mut self, pair: Pair, depth: usize) -> Result<Vec<u8>> {
        match Tag::classify(pair.tag) {
            TagClass::Known(Tag::Int32) => Ok(pair.data.to_string().into_bytes()),
            TagClass::Known(Tag::String | Tag::StringObject) => {
                decode_string(pair.data, self.reader, self.limits)
            }
            TagClass::Known(Tag::Boolean | Tag::BooleanObject) => Ok(if pair.data != 0 {
                b"true".to_vec()
            } else {
                b"false".to_vec()
            }),
            TagClass::Known(Tag::DateObject) => {
                // Dates arrive as a DateObject pair with data 0 followed by
                // a double in the next pair; the current data field is
                // ignored.
                let double = self
                    .reader
                    .next_pair()
                    .context(|| "reading next pair as date object")?;
                Ok(render_double(double.tag, double.data))
            }
            TagClass::Known(Tag::ObjectObject) => self.decode_nested_object(depth + 1),
            TagClass::Known(Tag::ArrayObject) => self.decode_array(pair.data, depth + 1),
            TagClass::Known(Tag::MapObject) => self.decode_map(depth + 1),
            TagClass::Known(Tag::SetObject) => self.decode_set(depth + 1),
            TagClass::Known(Tag::Null | Tag::Undefined) => Ok(Vec::new()),
            TagClass::DoubleHigh(high) => Ok(render_double(high, pair.data)),
            // Header and EndOfKeys never introduce a value; they fall
            // through to the same rejection as reserved-range tags.
            TagClass::Known(other) => Err(Error::UnknownTag {
                tag: other as u32,
                data: pair.data,
            }),
            TagClass::Unknown(tag) => Err(Error::UnknownTag {
                tag,
                data: pair.data,
            }),
        }
    }

    pub(crate) fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.limits.max_depth {
            return Err(Error::LimitExceeded(format!(
                "nesting depth {depth} exceeds limit of {}",
                self.limits.max_depth
            )));
        }
        Ok(())
    }
}

/// Render the 64-bit double bit pattern `(high << 32) | low` as the decimal
/// text of the unsigned pattern. Dates and floats are rendered this way;
/// floating-point formatting is never applied.
fn render_double(high: u32, low: u32) -> Vec<u8> {
    let pattern = (u64::from(high) << 32) | u64::from(low);
    pattern.to_string().into_bytes()
}
