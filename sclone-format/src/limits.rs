//! Security limits for decoding untrusted blobs

/// Limits applied while decoding a blob.
///
/// IndexedDB contents are attacker-influenced (any web page can write
/// them), so length fields and nesting depth are bounded before anything
/// is allocated or recursed into.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum composite nesting depth (default: 128)
    pub max_depth: usize,
    /// Maximum byte length of a single string body (default: 16 MiB)
    pub max_string_bytes: usize,
    /// Maximum declared array length (default: 1,000,000)
    pub max_array_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: 128,
            max_string_bytes: 16 * 1024 * 1024,
            max_array_length: 1_000_000,
        }
    }
}
