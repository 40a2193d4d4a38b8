//! Decoder engine for Firefox structured-clone IndexedDB blobs
//!
//! Firefox stores IndexedDB values in SQLite as structured-clone blobs: a
//! self-describing stream of tagged 8-byte pairs encoding a recursively
//! nested value. This crate decodes one such blob into a flat mapping from
//! field name to textual bytes, the shape a flat-table query layer can
//! consume: scalars render to text, nested objects, arrays, maps, and sets
//! render to compact JSON text.
//!
//! The entry points are [`decode_row`] (a row previously extracted from the
//! store, with the blob under its `data` column) and [`decode_blob`] (the
//! raw bytes). Decoding is a pure, single-pass function over the input;
//! malformed blobs fail the whole row with a breadcrumb error chain, and
//! [`Limits`] bounds recursion depth and hostile length fields.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod array;
mod decoder;
mod map;
mod object;
mod row;
mod set;

// Re-export the wire-level types callers interact with
pub use sclone_format::{Error, Limits, Result, ResultExt, Tag, TagClass};

pub use row::{decode_blob, decode_row, decode_row_with_limits, Row, DATA_COLUMN};
