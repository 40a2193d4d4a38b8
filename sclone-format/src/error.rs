//! Error types for structured-clone decoding

use thiserror::Error;

/// Decode failures.
///
/// Layers wrap lower-level failures in [`Error::Context`] with one line of
/// what they were doing, so a failed row surfaces a breadcrumb chain rather
/// than a single flat message.
#[derive(Debug, Error)]
pub enum Error {
    /// The input row has no `data` column.
    #[error("row missing top-level data column")]
    MissingDataColumn,

    /// The stream ended in the middle of a pair or a string body.
    #[error("unexpected end of input")]
    ShortRead,

    /// The first pair of the blob is not the header sentinel.
    #[error("unknown header tag {0:#x}")]
    BadHeader(u32),

    /// The pair after the header is not a top-level object.
    #[error("object not found after header: expected {expected:#x}, got {actual:#x}")]
    BadTopLevel {
        /// The object tag the blob must carry here.
        expected: u32,
        /// The tag actually read.
        actual: u32,
    },

    /// An object key pair is not a string.
    #[error("unsupported key type {0:#x}")]
    BadKeyTag(u32),

    /// A value tag outside the alphabet and outside the double range.
    #[error("unknown tag type {tag:#x} with data {data}")]
    UnknownTag {
        /// The unrecognized tag.
        tag: u32,
        /// Its data word, for debuggability.
        data: u32,
    },

    /// An array element uses a tag the array decoder does not handle.
    #[error("cannot process item at index {index} in array: unsupported tag type {tag:#x}")]
    UnsupportedArrayElement {
        /// Index the element was addressed to.
        index: u32,
        /// The offending tag.
        tag: u32,
    },

    /// A UTF-16 payload that does not decode.
    #[error("decoding UTF-16 string: {0}")]
    StringDecodeFailed(String),

    /// JSON serialization of a decoded composite failed.
    #[error("marshalling decoded value: {0}")]
    Marshal(#[from] serde_json::Error),

    /// A configured limit was exceeded, or a length field describes
    /// something the blob cannot hold.
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// A breadcrumb wrapping a lower-level failure.
    #[error("{context}: {source}")]
    Context {
        /// What the failing layer was doing.
        context: String,
        /// The underlying failure.
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap this error with one line of context.
    pub fn context(self, context: impl Into<String>) -> Self {
        Error::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error of a context chain.
    pub fn root_cause(&self) -> &Error {
        let mut err = self;
        while let Error::Context { source, .. } = err {
            err = source.as_ref();
        }
        err
    }
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Adds breadcrumb context to decode results.
pub trait ResultExt<T> {
    /// Wrap the error, if any, with one line of context.
    fn context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|err| err.context(f()))
    }
}
