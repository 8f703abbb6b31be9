//! Column type tags understood by the client type system.
//!
//! Decoding keeps the raw `i8` tag; this enum is for consumers that need
//! to map it onto a concrete type.

use crate::error::{Error, Result};
use crate::protocol::constants::*;

/// Column data type identified by the server's type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Type without a registered descriptor on the server.
    Unregistered,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
    Bool,
    String,
    Uuid,
    Date,
    ByteArray,
    Decimal,
    Timestamp,
    Time,
    /// Composite user object.
    Object,
}

impl DataType {
    /// Map a raw tag onto a data type.
    ///
    /// Returns `Err(Error::UnknownTypeTag)` for tags the client does not know.
    pub fn from_tag(tag: i8) -> Result<Self> {
        match tag {
            TYPE_ID_UNREGISTERED => Ok(DataType::Unregistered),
            TYPE_ID_BYTE => Ok(DataType::Byte),
            TYPE_ID_SHORT => Ok(DataType::Short),
            TYPE_ID_INT => Ok(DataType::Int),
            TYPE_ID_LONG => Ok(DataType::Long),
            TYPE_ID_FLOAT => Ok(DataType::Float),
            TYPE_ID_DOUBLE => Ok(DataType::Double),
            TYPE_ID_CHAR => Ok(DataType::Char),
            TYPE_ID_BOOL => Ok(DataType::Bool),
            TYPE_ID_STRING => Ok(DataType::String),
            TYPE_ID_UUID => Ok(DataType::Uuid),
            TYPE_ID_DATE => Ok(DataType::Date),
            TYPE_ID_BYTE_ARRAY => Ok(DataType::ByteArray),
            TYPE_ID_DECIMAL => Ok(DataType::Decimal),
            TYPE_ID_TIMESTAMP => Ok(DataType::Timestamp),
            TYPE_ID_TIME => Ok(DataType::Time),
            TYPE_ID_OBJECT => Ok(DataType::Object),
            _ => Err(Error::UnknownTypeTag { tag }),
        }
    }

    /// Get the wire tag.
    pub fn tag(&self) -> i8 {
        match self {
            DataType::Unregistered => TYPE_ID_UNREGISTERED,
            DataType::Byte => TYPE_ID_BYTE,
            DataType::Short => TYPE_ID_SHORT,
            DataType::Int => TYPE_ID_INT,
            DataType::Long => TYPE_ID_LONG,
            DataType::Float => TYPE_ID_FLOAT,
            DataType::Double => TYPE_ID_DOUBLE,
            DataType::Char => TYPE_ID_CHAR,
            DataType::Bool => TYPE_ID_BOOL,
            DataType::String => TYPE_ID_STRING,
            DataType::Uuid => TYPE_ID_UUID,
            DataType::Date => TYPE_ID_DATE,
            DataType::ByteArray => TYPE_ID_BYTE_ARRAY,
            DataType::Decimal => TYPE_ID_DECIMAL,
            DataType::Timestamp => TYPE_ID_TIMESTAMP,
            DataType::Time => TYPE_ID_TIME,
            DataType::Object => TYPE_ID_OBJECT,
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DataType::Unregistered => "OTHER",
            DataType::Byte => "TINYINT",
            DataType::Short => "SMALLINT",
            DataType::Int => "INTEGER",
            DataType::Long => "BIGINT",
            DataType::Float => "REAL",
            DataType::Double => "DOUBLE",
            DataType::Char => "CHAR",
            DataType::Bool => "BOOLEAN",
            DataType::String => "VARCHAR",
            DataType::Uuid => "UUID",
            DataType::Date => "DATE",
            DataType::ByteArray => "BINARY",
            DataType::Decimal => "DECIMAL",
            DataType::Timestamp => "TIMESTAMP",
            DataType::Time => "TIME",
            DataType::Object => "OTHER",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_known() {
        assert_eq!(DataType::from_tag(TYPE_ID_INT).unwrap(), DataType::Int);
        assert_eq!(DataType::from_tag(TYPE_ID_STRING).unwrap(), DataType::String);
        assert_eq!(DataType::from_tag(0).unwrap(), DataType::Unregistered);
    }

    #[test]
    fn test_from_tag_unknown() {
        match DataType::from_tag(-7) {
            Err(Error::UnknownTypeTag { tag }) => assert_eq!(tag, -7),
            other => panic!("Expected UnknownTypeTag error, got {:?}", other),
        }
    }

    #[test]
    fn test_tag_matches_from_tag() {
        let mut known = 0;
        for tag in i8::MIN..=i8::MAX {
            if let Ok(t) = DataType::from_tag(tag) {
                assert_eq!(t.tag(), tag);
                known += 1;
            }
        }
        assert_eq!(known, 17);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", DataType::Long), "BIGINT");
        assert_eq!(format!("{}", DataType::String), "VARCHAR");
    }
}
