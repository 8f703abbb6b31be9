//! Wire protocol constants.
//!
//! Type ids follow the grid's binary marshaller, which is also what the
//! server writes into the `data_type` field of column metadata.

// String framing
pub const NULL_STRING_LENGTH: i32 = -1;
pub const TYPE_HEADER_STRING: u8 = 9;
pub const TYPE_HEADER_NULL: u8 = 101;

// Decode defaults
pub const DEFAULT_MAX_RESERVE: usize = 1024;

// Smallest possible record on the wire: four empty strings and the type tag.
pub const MIN_RECORD_SIZE_LENGTH_PREFIXED: usize = 4 * 4 + 1;
pub const MIN_RECORD_SIZE_TYPED: usize = 4 + 1;

// Column type tags
pub const TYPE_ID_UNREGISTERED: i8 = 0;
pub const TYPE_ID_BYTE: i8 = 1;
pub const TYPE_ID_SHORT: i8 = 2;
pub const TYPE_ID_INT: i8 = 3;
pub const TYPE_ID_LONG: i8 = 4;
pub const TYPE_ID_FLOAT: i8 = 5;
pub const TYPE_ID_DOUBLE: i8 = 6;
pub const TYPE_ID_CHAR: i8 = 7;
pub const TYPE_ID_BOOL: i8 = 8;
pub const TYPE_ID_STRING: i8 = 9;
pub const TYPE_ID_UUID: i8 = 10;
pub const TYPE_ID_DATE: i8 = 11;
pub const TYPE_ID_BYTE_ARRAY: i8 = 12;
pub const TYPE_ID_DECIMAL: i8 = 30;
pub const TYPE_ID_TIMESTAMP: i8 = 33;
pub const TYPE_ID_TIME: i8 = 36;
pub const TYPE_ID_OBJECT: i8 = 103;
