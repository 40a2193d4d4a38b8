//! Wire primitives for Firefox structured-clone IndexedDB blobs
//!
//! Firefox persists IndexedDB values in SQLite using its structured-clone
//! serialization: a stream of 8-byte words, each framing a 32-bit tag and a
//! 32-bit data field, with string bodies and doubles interleaved between
//! pairs. This crate provides the I/O-free primitives for reading that
//! stream:
//!
//! - Tag constants and the closed tag alphabet
//! - Error types and breadcrumb context chains
//! - Security limits for untrusted input
//! - The single-pass byte reader and pair framing
//! - String decoding (ASCII and UTF-16LE, word-aligned)
//!
//! The decoding engine that assembles whole values lives in `sclone-codec`.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod limits;
pub mod reader;
pub mod strings;
pub mod tags;

// Re-export commonly used types
pub use error::{Error, Result, ResultExt};
pub use limits::Limits;
pub use reader::{ByteReader, Pair};
pub use strings::decode_string;
pub use tags::{Tag, TagClass};
