//! Cursor for reading primitive fields of the metadata wire format.
//!
//! All integers are little-endian. Strings are UTF-8.

use crate::error::{Error, LengthField, Result};
use crate::protocol::constants::*;
use crate::protocol::options::{DecodeOptions, StringEncoding, TextPolicy};
use bytes::Bytes;

/// A cursor over metadata bytes received from the server.
///
/// Cloning yields an independent cursor over the same underlying bytes.
#[derive(Debug, Clone)]
pub struct ReadBuffer {
    data: Bytes,
    pos: usize,
    options: DecodeOptions,
}

impl ReadBuffer {
    /// Create a new read buffer from bytes with default options.
    pub fn new(data: Bytes) -> Self {
        Self::with_options(data, DecodeOptions::default())
    }

    /// Create a new read buffer with explicit decode options.
    pub fn with_options(data: Bytes, options: DecodeOptions) -> Self {
        Self {
            data,
            pos: 0,
            options,
        }
    }

    /// Get the decode options.
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Get the current position in the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the remaining bytes in the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Check if the buffer has at least `n` bytes remaining.
    pub fn has_remaining(&self, n: usize) -> bool {
        self.remaining() >= n
    }

    /// Get a slice of the remaining data.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[self.pos..]
    }

    #[track_caller]
    fn ensure(&self, n: usize) -> Result<()> {
        if !self.has_remaining(n) {
            return Err(Error::TruncatedStream {
                needed: n,
                available: self.remaining(),
                location: std::panic::Location::caller(),
            });
        }
        Ok(())
    }

    /// Skip `n` bytes.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.ensure(n)?;
        self.pos += n;
        Ok(())
    }

    /// Read a single unsigned byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        let val = self.data[self.pos];
        self.pos += 1;
        Ok(val)
    }

    /// Read a single signed byte.
    pub fn read_i8(&mut self) -> Result<i8> {
        self.ensure(1)?;
        let val = self.data[self.pos] as i8;
        self.pos += 1;
        Ok(val)
    }

    /// Read a little-endian i32.
    pub fn read_i32(&mut self) -> Result<i32> {
        self.ensure(4)?;
        let val = i32::from_le_bytes([
            self.data[self.pos],
            self.data[self.pos + 1],
            self.data[self.pos + 2],
            self.data[self.pos + 3],
        ]);
        self.pos += 4;
        Ok(val)
    }

    /// Read raw bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<Bytes> {
        self.ensure(n)?;
        let bytes = self.data.slice(self.pos..self.pos + n);
        self.pos += n;
        Ok(bytes)
    }

    /// Read a string, mapping the null value to an empty string.
    pub fn read_string(&mut self) -> Result<String> {
        Ok(self.read_opt_string()?.unwrap_or_default())
    }

    /// Read a string, returning `None` for the null value.
    ///
    /// An explicit zero length is `Some("")`, never `None`.
    pub fn read_opt_string(&mut self) -> Result<Option<String>> {
        if self.options.string_encoding == StringEncoding::Typed {
            match self.read_u8()? {
                TYPE_HEADER_STRING => {}
                TYPE_HEADER_NULL => return Ok(None),
                header => return Err(Error::UnexpectedTypeHeader { header }),
            }
        }

        let length = self.read_i32()?;
        if length == NULL_STRING_LENGTH {
            return Ok(None);
        }
        if length < 0 {
            return Err(Error::InvalidLength {
                field: LengthField::String,
                length,
            });
        }

        let start = self.pos;
        let bytes = self.read_bytes(length as usize)?;
        let text = match self.options.text_policy {
            TextPolicy::Lossy => String::from_utf8_lossy(&bytes).into_owned(),
            TextPolicy::Strict => String::from_utf8(bytes.to_vec())
                .map_err(|_| Error::InvalidText { position: start })?,
        };
        Ok(Some(text))
    }
}

impl From<Vec<u8>> for ReadBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self::new(Bytes::from(data))
    }
}

impl From<&'static [u8]> for ReadBuffer {
    fn from(data: &'static [u8]) -> Self {
        Self::new(Bytes::from_static(data))
    }
}
