//! Wire format of result-set column metadata.

pub mod buffer;
pub mod constants;
pub mod describe;
pub mod options;
pub mod types;

pub use buffer::ReadBuffer;
pub use describe::{decode_column_meta_vector, read_column_meta, read_column_meta_vector};
pub use options::{DecodeOptions, StringEncoding, TextPolicy};
pub use types::{find_column, ColumnMeta, ColumnMetaVector, DataType};
