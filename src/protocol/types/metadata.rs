//! Column metadata as sent by the server.

use crate::error::Result;
use crate::protocol::buffer::ReadBuffer;

use super::data_type::DataType;

/// Metadata for one result-set column, in wire field order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ColumnMeta {
    /// Owning schema. Empty when the server sent none.
    pub schema_name: String,
    /// Owning table.
    pub table_name: String,
    /// Column name.
    pub column_name: String,
    /// Server-reported type name.
    pub type_name: String,
    /// Raw type tag, not validated.
    pub data_type: i8,
}

/// Columns of a result set, in result-set order.
pub type ColumnMetaVector = Vec<ColumnMeta>;

impl ColumnMeta {
    /// Create column metadata from its parts.
    pub fn new(
        schema_name: impl Into<String>,
        table_name: impl Into<String>,
        column_name: impl Into<String>,
        type_name: impl Into<String>,
        data_type: i8,
    ) -> Self {
        Self {
            schema_name: schema_name.into(),
            table_name: table_name.into(),
            column_name: column_name.into(),
            type_name: type_name.into(),
            data_type,
        }
    }

    /// Decode the next record from `buf`.
    pub fn read(buf: &mut ReadBuffer) -> Result<Self> {
        crate::protocol::describe::read_column_meta(buf)
    }

    /// Classify the raw type tag.
    ///
    /// Returns `Err(Error::UnknownTypeTag)` if the client does not know it.
    pub fn data_type(&self) -> Result<DataType> {
        DataType::from_tag(self.data_type)
    }

    /// Dotted `schema.table.column` name, skipping empty parts.
    pub fn qualified_name(&self) -> String {
        [
            self.schema_name.as_str(),
            self.table_name.as_str(),
            self.column_name.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(".")
    }
}

/// Find a column index by name (case-insensitive).
pub fn find_column(columns: &[ColumnMeta], name: &str) -> Option<usize> {
    let name_upper = name.to_uppercase();
    columns
        .iter()
        .position(|c| c.column_name.to_uppercase() == name_upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn make_test_metadata() -> ColumnMetaVector {
        vec![
            ColumnMeta::new("PUBLIC", "PERSON", "ID", "java.lang.Long", 4),
            ColumnMeta::new("PUBLIC", "PERSON", "NAME", "java.lang.String", 9),
            ColumnMeta::new("", "", "CNT", "java.lang.Integer", 3),
        ]
    }

    #[test]
    fn test_find_column() {
        let columns = make_test_metadata();
        assert_eq!(find_column(&columns, "name"), Some(1));
        assert_eq!(find_column(&columns, "ID"), Some(0));
        assert_eq!(find_column(&columns, "UNKNOWN"), None);
    }

    #[test]
    fn test_qualified_name() {
        let columns = make_test_metadata();
        assert_eq!(columns[0].qualified_name(), "PUBLIC.PERSON.ID");
        assert_eq!(columns[2].qualified_name(), "CNT");
    }

    #[test]
    fn test_data_type() {
        let columns = make_test_metadata();
        assert_eq!(columns[0].data_type().unwrap(), DataType::Long);

        let odd = ColumnMeta::new("S", "T", "C", "x", 99);
        assert!(matches!(
            odd.data_type(),
            Err(Error::UnknownTypeTag { tag: 99 })
        ));
    }

    #[test]
    fn test_equality_covers_all_fields() {
        let a = ColumnMeta::new("S", "T", "C", "x", 1);
        let mut b = a.clone();
        assert_eq!(a, b);
        b.data_type = 2;
        assert_ne!(a, b);
    }
}
