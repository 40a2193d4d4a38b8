//! Tag constants for the structured-clone wire format

/// Leading sentinel pair at the start of every blob; its data field is ignored.
pub const TAG_HEADER: u32 = 0xfff1_0000;

/// JavaScript `null`.
pub const TAG_NULL: u32 = 0xffff_0000;
/// JavaScript `undefined`.
pub const TAG_UNDEFINED: u32 = 0xffff_0001;
/// Primitive boolean; truth value carried in the data field.
pub const TAG_BOOLEAN: u32 = 0xffff_0002;
/// 32-bit integer carried in the data field.
pub const TAG_INT32: u32 = 0xffff_0003;
/// String; length and encoding flag in the data field, bytes follow.
pub const TAG_STRING: u32 = 0xffff_0004;
/// Date object; the following pair holds the double bit pattern.
pub const TAG_DATE_OBJECT: u32 = 0xffff_0005;
/// Array; declared length in the data field, indexed elements follow.
pub const TAG_ARRAY_OBJECT: u32 = 0xffff_0007;
/// Object; key/value pairs follow.
pub const TAG_OBJECT_OBJECT: u32 = 0xffff_0008;
/// Boxed boolean, decoded like the primitive.
pub const TAG_BOOLEAN_OBJECT: u32 = 0xffff_000a;
/// Boxed string, decoded like the primitive.
pub const TAG_STRING_OBJECT: u32 = 0xffff_000b;
/// Map; entries follow as key/value pair groups.
pub const TAG_MAP_OBJECT: u32 = 0xffff_0011;
/// Set; entries follow as key pair groups.
pub const TAG_SET_OBJECT: u32 = 0xffff_0012;
/// Sentinel closing every composite value.
pub const TAG_END_OF_KEYS: u32 = 0xffff_0013;

/// Any tag strictly below this value is the high 32 bits of a double.
/// Values at or above it that are not in the alphabet above are errors.
pub const TAG_FLOAT_MAX: u32 = 0xfff0_0000;

/// Bit 31 of a string's data field: set for one-byte characters, clear for
/// UTF-16LE.
pub const STRING_ASCII_FLAG: u32 = 1 << 31;
/// Bits 0-30 of a string's data field: length in characters.
pub const STRING_LENGTH_MASK: u32 = (1 << 31) - 1;

/// The stream is organized as fixed-size words; strings are padded out to
/// the next word boundary.
pub const WORD_SIZE: usize = 8;
