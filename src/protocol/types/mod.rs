//! Column metadata types.

mod data_type;
mod metadata;

pub use data_type::DataType;
pub use metadata::{find_column, ColumnMeta, ColumnMetaVector};
