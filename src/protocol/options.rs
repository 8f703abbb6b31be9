//! Decoder configuration.

use crate::protocol::constants::{
    DEFAULT_MAX_RESERVE, MIN_RECORD_SIZE_LENGTH_PREFIXED, MIN_RECORD_SIZE_TYPED,
};

/// How strings are framed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringEncoding {
    /// Signed 32-bit little-endian byte count followed by the bytes.
    /// A count of -1 means no value.
    #[default]
    LengthPrefixed,
    /// One type header byte (string or null) in front of a
    /// length-prefixed body. Null carries no body.
    Typed,
}

/// What to do with string bytes that are not valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextPolicy {
    /// Replace invalid sequences with U+FFFD.
    #[default]
    Lossy,
    /// Fail with `Error::InvalidText`.
    Strict,
}

/// Options controlling how a `ReadBuffer` decodes metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Upper bound on the number of records reserved up front when an
    /// array declares its length. Growth past this is incremental.
    pub max_reserve: usize,
    /// String framing.
    pub string_encoding: StringEncoding,
    /// Handling of non-UTF-8 string bytes.
    pub text_policy: TextPolicy,
}

impl DecodeOptions {
    /// Create options with the defaults.
    pub fn new() -> Self {
        Self {
            max_reserve: DEFAULT_MAX_RESERVE,
            string_encoding: StringEncoding::default(),
            text_policy: TextPolicy::default(),
        }
    }

    /// Set the eager reservation cap for record arrays.
    ///
    /// # Example
    ///
    /// ```
    /// use odbc_meta_rs::DecodeOptions;
    ///
    /// let options = DecodeOptions::new().with_max_reserve(64);
    /// assert_eq!(options.max_reserve, 64);
    /// ```
    pub fn with_max_reserve(mut self, max_reserve: usize) -> Self {
        self.max_reserve = max_reserve;
        self
    }

    /// Set the string framing.
    pub fn with_string_encoding(mut self, encoding: StringEncoding) -> Self {
        self.string_encoding = encoding;
        self
    }

    /// Set the text policy.
    pub fn with_text_policy(mut self, policy: TextPolicy) -> Self {
        self.text_policy = policy;
        self
    }

    /// Smallest number of bytes a single column record can occupy.
    pub fn min_record_size(&self) -> usize {
        match self.string_encoding {
            StringEncoding::LengthPrefixed => MIN_RECORD_SIZE_LENGTH_PREFIXED,
            StringEncoding::Typed => MIN_RECORD_SIZE_TYPED,
        }
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::new()
    }
}
