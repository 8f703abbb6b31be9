//! Column metadata decoder for a SQL grid ODBC thin client
//!
//! Decodes the description of a query result set's columns from the bytes
//! the server sends after executing a statement. Transport, handshake and
//! result-set cursors live elsewhere; this crate only turns bytes into
//! `ColumnMeta` records.
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use odbc_meta_rs::{ReadBuffer, ColumnMetaVector, Result};
//! use odbc_meta_rs::protocol::read_column_meta_vector;
//!
//! fn main() -> Result<()> {
//!     // A result set with no columns
//!     let mut buf = ReadBuffer::new(Bytes::from_static(&[0, 0, 0, 0]));
//!     let mut meta = ColumnMetaVector::new();
//!
//!     read_column_meta_vector(&mut buf, &mut meta)?;
//!     assert!(meta.is_empty());
//!     assert_eq!(buf.position(), 4);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod protocol;

// Re-export main types
pub use error::{Error, LengthField, Result};
pub use protocol::{
    ColumnMeta, ColumnMetaVector, DataType, DecodeOptions, ReadBuffer, StringEncoding, TextPolicy,
};
