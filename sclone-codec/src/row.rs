//! Top-level row driver

use std::collections::HashMap;

use sclone_format::{ByteReader, Error, Limits, Result, ResultExt, Tag};
use tracing::{instrument, warn};

use crate::decoder::Decoder;

/// A flat row: column name to raw bytes.
///
/// The same shape is used on both sides of the decoder. On input it is the
/// row a host extracted from the IndexedDB SQLite store; on output the keys
/// are the top-level fields of the stored value.
pub type Row = HashMap<String, Vec<u8>>;

/// Column that holds the serialized top-level object in an IndexedDB row.
pub const DATA_COLUMN: &str = "data";

/// Decode one IndexedDB row with default [`Limits`].
///
/// The serialized object lives under the `data` column; any other columns
/// are ignored and the top-level `data` key itself is discarded. Top-level
/// values come back as raw textual bytes, with composite sub-values rendered
/// as compact JSON text.
pub fn decode_row(row: &Row) -> Result<Row> {
    decode_row_with_limits(row, &Limits::default())
}

/// Decode one IndexedDB row, bounding recursion and allocations by `limits`.
#[instrument(skip_all)]
pub fn decode_row_with_limits(row: &Row, limits: &Limits) -> Result<Row> {
    let blob = row.get(DATA_COLUMN).ok_or(Error::MissingDataColumn)?;
    decode_blob(blob, limits)
}

/// Decode a raw structured-clone blob into a flat field mapping.
///
/// The blob must open with the header sentinel pair followed by a top-level
/// object. Values of the top-level object stay raw bytes here; only nested
/// composites are rendered to JSON text.
pub fn decode_blob(blob: &[u8], limits: &Limits) -> Result<Row> {
    read_blob(blob, limits).map_err(|err| {
        warn!(error = %err, "failed to decode structured-clone blob");
        err
    })
}

fn read_blob(blob: &[u8], limits: &Limits) -> Result<Row> {
    let mut reader = ByteReader::new(blob);

    let header = reader.next_pair().context(|| "reading header pair")?;
    if Tag::from_u32(header.tag) != Some(Tag::Header) {
        return Err(Error::BadHeader(header.tag));
    }

    let top = reader.next_pair().context(|| "reading top-level object tag")?;
    if Tag::from_u32(top.tag) != Some(Tag::ObjectObject) {
        return Err(Error::BadTopLevel {
            expected: Tag::ObjectObject as u32,
            actual: top.tag,
        });
    }

    Decoder::new(&mut reader, limits)
        .decode_object(0)
        .context(|| "reading top-level object")
}
