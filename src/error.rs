//! Error types for column metadata decoding.

use std::fmt;
use std::panic::Location;
use thiserror::Error;

/// Result type alias for decode operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which kind of length prefix carried an invalid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthField {
    /// Byte count in front of a string.
    String,
    /// Element count in front of an array of records.
    Array,
}

impl fmt::Display for LengthField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthField::String => write!(f, "string"),
            LengthField::Array => write!(f, "array"),
        }
    }
}

/// Error type for metadata decoding.
#[derive(Error, Debug)]
pub enum Error {
    /// Fewer bytes are available than a field declares.
    #[error("Truncated stream: need {needed} bytes, have {available} filed at {location}")]
    TruncatedStream {
        needed: usize,
        available: usize,
        location: &'static Location<'static>,
    },

    /// A declared length is negative and not the null sentinel.
    #[error("Invalid {field} length: {length}")]
    InvalidLength { field: LengthField, length: i32 },

    /// String bytes are not valid UTF-8 (strict text policy only).
    #[error("Invalid UTF-8 text in string starting at offset {position}")]
    InvalidText { position: usize },

    /// Typed string framing carried a header other than string or null.
    #[error("Unexpected type header in front of string: {header}")]
    UnexpectedTypeHeader { header: u8 },

    /// Type tag not recognized by the client type system.
    #[error("Unknown column type tag: {tag}")]
    UnknownTypeTag { tag: i8 },

    /// Protocol error.
    #[error("Protocol error: {message}")]
    Protocol { message: String },
}

impl Error {
    /// Create a protocol error.
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Whether this error means the server sent bytes that break the wire
    /// contract.
    ///
    /// The driver reports these as protocol violations, separately from SQL
    /// errors returned by the server. An unknown type tag is a well-formed
    /// stream the client cannot interpret, so it is not counted.
    pub fn is_protocol_violation(&self) -> bool {
        !matches!(self, Error::UnknownTypeTag { .. })
    }
}
