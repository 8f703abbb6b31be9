//! Decoding of result-set column metadata.

use tracing::{debug, trace, warn};

use crate::error::{Error, LengthField, Result};
use crate::protocol::buffer::ReadBuffer;
use crate::protocol::types::{ColumnMeta, ColumnMetaVector};

/// Decode a single column metadata record.
///
/// Fields are read in wire order. Any failed read aborts the record.
pub fn read_column_meta(buf: &mut ReadBuffer) -> Result<ColumnMeta> {
    let schema_name = buf.read_string()?;
    let table_name = buf.read_string()?;
    let column_name = buf.read_string()?;
    let type_name = buf.read_string()?;
    let data_type = buf.read_i8()?;

    trace!(
        schema = %schema_name,
        table = %table_name,
        column = %column_name,
        data_type,
        "decoded column metadata"
    );

    Ok(ColumnMeta {
        schema_name,
        table_name,
        column_name,
        type_name,
        data_type,
    })
}

/// Decode a count-prefixed array of column metadata into `meta`.
///
/// `meta` is cleared and refilled. A negative count is rejected before
/// `meta` is touched. If a record fails to decode, `meta` may hold the
/// records decoded so far and must not be used.
pub fn read_column_meta_vector(buf: &mut ReadBuffer, meta: &mut ColumnMetaVector) -> Result<()> {
    let count = buf.read_i32()?;
    if count < 0 {
        return Err(Error::InvalidLength {
            field: LengthField::Array,
            length: count,
        });
    }
    let count = count as usize;

    meta.clear();
    meta.reserve(reserve_hint(buf, count));

    for _ in 0..count {
        let column = read_column_meta(buf)?;
        meta.push(column);
    }

    debug!(columns = count, position = buf.position(), "decoded column metadata array");
    Ok(())
}

/// Decode a count-prefixed array of column metadata into a new vector.
pub fn decode_column_meta_vector(buf: &mut ReadBuffer) -> Result<ColumnMetaVector> {
    let mut meta = ColumnMetaVector::new();
    read_column_meta_vector(buf, &mut meta)?;
    Ok(meta)
}

/// Number of records to reserve up front for a declared `count`.
///
/// Bounded by the configured cap and by how many records the remaining
/// bytes could possibly hold.
fn reserve_hint(buf: &ReadBuffer, count: usize) -> usize {
    let options = buf.options();
    let fits = buf.remaining() / options.min_record_size();
    if count > fits {
        warn!(
            declared = count,
            remaining = buf.remaining(),
            "declared column count exceeds what the stream can hold"
        );
    }
    count.min(options.max_reserve).min(fits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::options::{DecodeOptions, StringEncoding};
    use bytes::{BufMut, Bytes};

    fn encode_string(out: &mut Vec<u8>, s: &str) {
        out.put_i32_le(s.len() as i32);
        out.put_slice(s.as_bytes());
    }

    fn encode_column(out: &mut Vec<u8>, column: &ColumnMeta) {
        encode_string(out, &column.schema_name);
        encode_string(out, &column.table_name);
        encode_string(out, &column.column_name);
        encode_string(out, &column.type_name);
        out.put_i8(column.data_type);
    }

    #[test]
    fn test_read_column_meta() {
        let column = ColumnMeta::new("PUBLIC", "PERSON", "NAME", "java.lang.String", 9);
        let mut data = Vec::new();
        encode_column(&mut data, &column);
        data.put_u8(0xaa);

        let mut buf = ReadBuffer::from(data);
        assert_eq!(read_column_meta(&mut buf).unwrap(), column);
        assert_eq!(buf.remaining(), 1);
    }

    #[test]
    fn test_read_column_meta_missing_type_tag() {
        let column = ColumnMeta::new("S", "T", "C", "x", 1);
        let mut data = Vec::new();
        encode_column(&mut data, &column);
        data.pop();

        let mut buf = ReadBuffer::from(data);
        assert!(matches!(
            read_column_meta(&mut buf),
            Err(Error::TruncatedStream { needed: 1, available: 0, .. })
        ));
    }

    #[test]
    fn test_read_column_meta_null_strings() {
        let mut data = Vec::new();
        for _ in 0..4 {
            data.put_i32_le(-1);
        }
        data.put_i8(-128);

        let mut buf = ReadBuffer::from(data);
        let column = read_column_meta(&mut buf).unwrap();
        assert_eq!(column, ColumnMeta::new("", "", "", "", -128));
    }

    #[test]
    fn test_reserve_hint_bounded_by_stream() {
        let buf = ReadBuffer::from(vec![0u8; 17 * 3]);
        assert_eq!(reserve_hint(&buf, 1_000_000), 3);
        assert_eq!(reserve_hint(&buf, 2), 2);
    }

    #[test]
    fn test_reserve_hint_bounded_by_cap() {
        let options = DecodeOptions::new().with_max_reserve(4);
        let buf = ReadBuffer::with_options(Bytes::from(vec![0u8; 17 * 100]), options);
        assert_eq!(reserve_hint(&buf, 50), 4);
    }

    #[test]
    fn test_read_column_meta_vector_typed() {
        let mut data = Vec::new();
        data.put_i32_le(1);
        data.put_u8(101);
        data.put_u8(101);
        data.put_u8(9);
        encode_string(&mut data, "ID");
        data.put_u8(9);
        encode_string(&mut data, "java.lang.Integer");
        data.put_i8(3);

        let options = DecodeOptions::new().with_string_encoding(StringEncoding::Typed);
        let mut buf = ReadBuffer::with_options(Bytes::from(data), options);
        let meta = decode_column_meta_vector(&mut buf).unwrap();
        assert_eq!(
            meta,
            vec![ColumnMeta::new("", "", "ID", "java.lang.Integer", 3)]
        );
        assert_eq!(buf.remaining(), 0);
    }
}
